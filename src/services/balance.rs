//! Balance engine
//!
//! Balances are derived from the full expense history every time they are
//! needed and never stored, so they cannot drift from the records.

use crate::error::{SplitError, SplitResult};
use crate::models::{Balances, ExpenseRecord, Money, Participant};
use crate::storage::Storage;

/// Fold an expense history into per-participant balances
///
/// Every current participant starts at zero. For each share in each
/// record's split, the participant is debited and the payer credited by the
/// same amount. Names that only appear in past records (removed
/// participants) are still accumulated.
///
/// The fold only adds and subtracts, so the result does not depend on the
/// order of `expenses`, and the total over all participants is zero.
pub fn compute_balances(participants: &[Participant], expenses: &[ExpenseRecord]) -> Balances {
    let mut balances = Balances::zeroed(participants.iter().map(|p| p.name.as_str()));

    for expense in expenses {
        for (name, share) in &expense.split {
            balances.adjust(name, -*share);
            balances.adjust(&expense.payer, *share);
        }
    }

    balances
}

/// Service computing balances over the stored ledger
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Balances for the whole ledger
    pub fn compute(&self) -> SplitResult<Balances> {
        let participants = self.storage.participants.get_all()?;
        let expenses = self.storage.expenses.get_all()?;

        let balances = compute_balances(&participants, &expenses);
        tracing::debug!(
            expenses = expenses.len(),
            participants = balances.len(),
            "computed balances"
        );
        Ok(balances)
    }

    /// Balance of a single participant, current or historical
    pub fn balance_of(&self, name: &str) -> SplitResult<Money> {
        self.compute()?
            .get(name)
            .ok_or_else(|| SplitError::participant_not_found(name))
    }

    /// Balances in display order (see [`Balances::ordered`])
    pub fn ordered(&self) -> SplitResult<Vec<(String, Money)>> {
        let participants = self.storage.participants.get_all()?;
        Ok(self.compute()?.ordered(&participants))
    }
}
