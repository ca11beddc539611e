//! Display formatting for terminal output
//!
//! Renders participants, expenses and balances as plain-text tables and
//! detail views.

pub mod balance;
pub mod expense;
pub mod participant;

pub use balance::{describe_balance, format_balance_line, format_balances};
pub use expense::{format_expense_details, format_expense_list};
pub use participant::format_participant_list;
