//! Participant model
//!
//! A participant is a person sharing expenses, identified by their name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted length of a participant name, in characters
pub const MAX_NAME_LEN: usize = 100;

/// A person sharing household expenses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique name; the identity key used in expense splits
    pub name: String,

    /// When the participant joined the ledger
    pub added_at: DateTime<Utc>,
}

impl Participant {
    /// Create a new participant joining now
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            added_at: Utc::now(),
        }
    }

    /// Validate the participant
    pub fn validate(&self) -> Result<(), ParticipantValidationError> {
        if self.name.trim().is_empty() {
            return Err(ParticipantValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(ParticipantValidationError::NameTooLong(len));
        }

        Ok(())
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for participants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for ParticipantValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Participant name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Participant name too long ({} chars, max {})",
                len, MAX_NAME_LEN
            ),
        }
    }
}

impl std::error::Error for ParticipantValidationError {}
