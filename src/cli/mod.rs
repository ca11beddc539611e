//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod balance;
pub mod config;
pub mod expense;
pub mod export;
pub mod participant;

pub use audit::handle_audit_command;
pub use balance::handle_balance_command;
pub use config::{handle_config_command, ConfigUpdate};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, handle_import_command, ExportFormat};
pub use participant::{handle_participant_command, ParticipantCommands};
