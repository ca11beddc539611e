//! roomsplit - split shared household expenses between roommates
//!
//! This library keeps a ledger of participants and the expenses they pay
//! for, splits each expense equally among the current participants, and
//! derives who owes whom from the full expense history.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (participants, expenses, money, balances)
//! - `storage`: JSON file storage and bill attachments
//! - `services`: Split policy, balance engine and ledger operations
//! - `audit`: Append-only audit trail
//! - `export`: JSON, YAML and CSV export
//! - `cli` / `display`: Command handlers and terminal formatting
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use roomsplit::config::SplitPaths;
//! use roomsplit::services::{BalanceService, ExpenseService, ParticipantService};
//! use roomsplit::storage::Storage;
//!
//! let mut storage = Storage::new(SplitPaths::new()?)?;
//! storage.load_all()?;
//!
//! ParticipantService::new(&storage).add("Alice")?;
//! ParticipantService::new(&storage).add("Bob")?;
//! ExpenseService::new(&storage).record("Groceries", "30", "Alice", None)?;
//!
//! let balances = BalanceService::new(&storage).compute()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SplitError, SplitResult};
