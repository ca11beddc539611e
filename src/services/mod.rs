//! Service layer for roomsplit
//!
//! The service layer provides business logic on top of the storage layer:
//! write-time validation, the equal-split policy, and balance computation.

pub mod balance;
pub mod expense;
pub mod participant;
pub mod split;

pub use balance::{compute_balances, BalanceService};
pub use expense::ExpenseService;
pub use participant::ParticipantService;
pub use split::equal_split;
