//! Core data models for roomsplit
//!
//! This module contains the data structures of the expense-splitting domain:
//! participants, expense records, money, and derived balances.

pub mod balance;
pub mod expense;
pub mod ids;
pub mod money;
pub mod participant;

pub use balance::Balances;
pub use expense::{ExpenseRecord, ExpenseValidationError, Split, MAX_EXPENSE_AMOUNT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use participant::{Participant, ParticipantValidationError};
