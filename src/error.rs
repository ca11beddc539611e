//! Custom error types for roomsplit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every ledger failure is recoverable: the
//! presentation layer renders it and carries on.

use thiserror::Error;

use crate::models::Money;

/// The main error type for roomsplit operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A participant with the same name is already registered
    #[error("Participant already exists: {0}")]
    DuplicateParticipant(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Amount is not a number or not strictly positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Payer is not one of the current participants
    #[error("Payer is not a participant: {0}")]
    UnknownPayer(String),

    /// There is nobody to split an expense between
    #[error("No participants to split the expense between")]
    NoParticipants,

    /// Removal refused because the participant is not settled up
    #[error("Participant '{name}' still has a balance of {balance}")]
    ParticipantHasBalance { name: String, balance: Money },

    /// Attachment storage errors
    #[error("Attachment error: {0}")]
    Attachment(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl SplitError {
    /// Create a "not found" error for participants
    pub fn participant_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Participant",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidAmount(_))
    }
}

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for roomsplit operations
pub type SplitResult<T> = Result<T, SplitError>;
