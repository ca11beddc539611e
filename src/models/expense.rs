//! Expense record model
//!
//! An expense is one payment made by a participant on behalf of the group,
//! together with the per-participant shares owed back to the payer.
//! Records are immutable once created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Largest amount a single expense may have ($10,000,000,000.00)
///
/// Keeps sums over millions of records well inside the `i64` cent range.
pub const MAX_EXPENSE_AMOUNT: Money = Money::from_cents(1_000_000_000_000);

/// Per-participant owed shares of an expense, keyed by participant name
pub type Split = BTreeMap<String, Money>;

/// A single shared expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// Free-text display name (e.g. "Groceries")
    #[serde(default)]
    pub name: String,

    /// Total amount paid
    pub amount: Money,

    /// Name of the participant who paid
    pub payer: String,

    /// What each participant owes the payer for this expense
    pub split: Split,

    /// Opaque reference to an attached bill, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    /// Create a new expense record stamped with the current time
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        payer: impl Into<String>,
        split: Split,
        attachment: Option<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            payer: payer.into(),
            split,
            attachment,
            created_at: Utc::now(),
        }
    }

    /// Sum of all shares owed back to the payer
    pub fn owed_to_payer(&self) -> Money {
        self.split.values().sum()
    }

    /// The part of the amount the payer covers for themselves
    ///
    /// Includes any rounding remainder, so `owed_to_payer() + payer_portion()`
    /// always equals `amount`.
    pub fn payer_portion(&self) -> Money {
        self.amount - self.owed_to_payer()
    }

    /// Share owed by a given participant (zero if they were not part of the split)
    pub fn share_of(&self, name: &str) -> Money {
        self.split.get(name).copied().unwrap_or_default()
    }

    /// Number of participants the expense was split between
    pub fn participant_count(&self) -> usize {
        self.split.len()
    }

    pub fn has_attachment(&self) -> bool {
        self.attachment.is_some()
    }

    /// Validate the structural invariants of the record
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > MAX_EXPENSE_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        if self.payer.trim().is_empty() {
            return Err(ExpenseValidationError::MissingPayer);
        }

        if let Some((name, share)) = self.split.iter().find(|(_, share)| share.is_negative()) {
            return Err(ExpenseValidationError::NegativeShare(name.clone(), *share));
        }

        let payer_share = self.share_of(&self.payer);
        if !payer_share.is_zero() {
            return Err(ExpenseValidationError::PayerOwesSelf(payer_share));
        }

        if self.payer_portion().is_negative() {
            return Err(ExpenseValidationError::SharesExceedAmount {
                shares: self.owed_to_payer(),
                amount: self.amount,
            });
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | Paid by: {} | Amount: {}", self.name, self.payer, self.amount)
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
    MissingPayer,
    NegativeShare(String, Money),
    PayerOwesSelf(Money),
    SharesExceedAmount { shares: Money, amount: Money },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive, got {}", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Expense amount {} exceeds the maximum of {}",
                amount, MAX_EXPENSE_AMOUNT
            ),
            Self::MissingPayer => write!(f, "Expense must have a payer"),
            Self::NegativeShare(name, share) => {
                write!(f, "Share for '{}' cannot be negative ({})", name, share)
            }
            Self::PayerOwesSelf(share) => {
                write!(f, "Payer cannot owe a share to themselves ({})", share)
            }
            Self::SharesExceedAmount { shares, amount } => write!(
                f,
                "Shares ({}) exceed the expense amount ({})",
                shares, amount
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
