//! Expense service
//!
//! Validates and records expenses. A record is either fully committed
//! (appended and saved) or not at all.

use crate::audit::AuditEntry;
use crate::error::{SplitError, SplitResult};
use crate::models::{ExpenseId, ExpenseRecord, Money, Participant, MAX_EXPENSE_AMOUNT};
use crate::storage::Storage;

use super::split::equal_split;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse a raw amount string into a strictly positive amount
    ///
    /// Amounts above [`MAX_EXPENSE_AMOUNT`] are rejected.
    pub fn parse_amount(raw: &str) -> SplitResult<Money> {
        let amount = Money::parse(raw).map_err(|e| SplitError::InvalidAmount(e.to_string()))?;
        if !amount.is_positive() {
            return Err(SplitError::InvalidAmount(format!(
                "amount must be greater than zero, got {}",
                raw.trim()
            )));
        }
        if amount > MAX_EXPENSE_AMOUNT {
            return Err(SplitError::InvalidAmount(format!(
                "amount must not exceed {}, got {}",
                MAX_EXPENSE_AMOUNT,
                raw.trim()
            )));
        }
        Ok(amount)
    }

    /// Record an expense from raw user input
    ///
    /// The amount is split equally among the current participants. `bill` is
    /// an optional path to a bill file, copied into the uploads directory
    /// once every other check has passed.
    pub fn record(
        &self,
        name: &str,
        amount: &str,
        payer: &str,
        bill: Option<&str>,
    ) -> SplitResult<ExpenseRecord> {
        let amount = Self::parse_amount(amount)?;
        let payer = payer.trim();
        let participants = self.storage.participants.get_all()?;

        // Validate the split before touching the attachment store
        equal_split(amount, payer, &participants)?;

        let attachment = match bill {
            Some(path) => self.storage.attachments.store(path)?,
            None => None,
        };

        self.record_split(name, amount, payer, &participants, attachment)
    }

    /// Record an expense split among a given participant snapshot
    ///
    /// The payer must be an active participant.
    pub fn record_split(
        &self,
        name: &str,
        amount: Money,
        payer: &str,
        participants: &[Participant],
        attachment: Option<String>,
    ) -> SplitResult<ExpenseRecord> {
        if !amount.is_positive() {
            return Err(SplitError::InvalidAmount(amount.to_string()));
        }

        if participants.is_empty() {
            return Err(SplitError::NoParticipants);
        }

        if !self.storage.participants.contains(payer)? {
            return Err(SplitError::UnknownPayer(payer.to_string()));
        }

        let split = equal_split(amount, payer, participants)?;
        let record = ExpenseRecord::new(name.trim(), amount, payer, split, attachment);

        record
            .validate()
            .map_err(|e| SplitError::Validation(e.to_string()))?;

        self.commit(record)
    }

    /// Append and persist a record, rolling back the append if saving fails
    fn commit(&self, record: ExpenseRecord) -> SplitResult<ExpenseRecord> {
        self.storage.expenses.append(record.clone())?;

        if let Err(err) = self.storage.expenses.save() {
            self.storage.expenses.rollback_append(record.id)?;
            tracing::warn!(expense = %record.id, error = %err, "failed to save expense, rolled back");
            return Err(err);
        }

        if let Err(err) = self
            .storage
            .record_audit(&AuditEntry::expense_recorded(&record))
        {
            tracing::warn!(error = %err, "failed to write audit entry");
        }

        tracing::info!(
            expense = %record.id,
            amount = %record.amount,
            payer = %record.payer,
            "expense recorded"
        );
        Ok(record)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> SplitResult<Option<ExpenseRecord>> {
        self.storage.expenses.get(id)
    }

    /// Find an expense by full or short ID (e.g. `exp-1a2b3c4d`)
    pub fn find(&self, identifier: &str) -> SplitResult<ExpenseRecord> {
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return self
                .get(id)?
                .ok_or_else(|| SplitError::expense_not_found(identifier));
        }

        let mut matches = self.storage.expenses.find_by_short_id(identifier)?;
        match matches.len() {
            0 => Err(SplitError::expense_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            n => Err(SplitError::Validation(format!(
                "'{}' matches {} expenses, use a longer ID",
                identifier, n
            ))),
        }
    }

    /// All expenses in the order they were recorded
    pub fn list(&self) -> SplitResult<Vec<ExpenseRecord>> {
        self.storage.expenses.get_all()
    }

    /// Expense history, newest first, optionally limited
    pub fn history(&self, limit: Option<usize>) -> SplitResult<Vec<ExpenseRecord>> {
        let mut expenses = self.storage.expenses.get_all()?;
        expenses.reverse();
        expenses.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(limit) = limit {
            expenses.truncate(limit);
        }
        Ok(expenses)
    }

    /// Sum of all recorded expense amounts
    pub fn total_spent(&self) -> SplitResult<Money> {
        Ok(self.storage.expenses.get_all()?.iter().map(|e| e.amount).sum())
    }

    pub fn count(&self) -> SplitResult<usize> {
        self.storage.expenses.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SplitPaths;
    use crate::services::ParticipantService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn with_participants(storage: &Storage, names: &[&str]) {
        let service = ParticipantService::new(storage);
        for name in names {
            service.add(name).unwrap();
        }
    }

    #[test]
    fn test_record_expense() {
        let (_temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B", "C"]);
        let service = ExpenseService::new(&storage);

        let record = service.record("Groceries", "30", "A", None).unwrap();

        assert_eq!(record.amount, Money::from_cents(3000));
        assert_eq!(record.split["A"], Money::zero());
        assert_eq!(record.split["B"], Money::from_cents(1000));
        assert_eq!(record.split["C"], Money::from_cents(1000));
        assert_eq!(record.attachment, None);
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_invalid_amounts() {
        let (_temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B"]);
        let service = ExpenseService::new(&storage);

        for raw in ["abc", "", "0", "-5", "0.00", "1.234"] {
            let err = service.record("x", raw, "A", None).unwrap_err();
            assert!(matches!(err, SplitError::InvalidAmount(_)), "{raw}: {err}");
        }
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_amount_ceiling() {
        let (_temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B"]);
        let service = ExpenseService::new(&storage);

        assert_eq!(
            ExpenseService::parse_amount("10000000000").unwrap(),
            MAX_EXPENSE_AMOUNT
        );
        for raw in ["10000000000.01", "90000000000000000"] {
            let err = service.record("Huge", raw, "A", None).unwrap_err();
            assert!(matches!(err, SplitError::InvalidAmount(_)), "{raw}: {err}");
        }
        assert_eq!(service.count().unwrap(), 0);

        for _ in 0..3 {
            service.record("Big", "10000000000", "A", None).unwrap();
        }
        let balances = crate::services::BalanceService::new(&storage)
            .compute()
            .unwrap();
        assert_eq!(balances.get("A"), Some(Money::from_cents(1_500_000_000_000)));
        assert!(balances.total().is_zero());
    }

    #[test]
    fn test_no_participants_appends_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.record("Rent", "1200", "A", None).unwrap_err();
        assert!(matches!(err, SplitError::NoParticipants));
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_unknown_payer() {
        let (_temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B"]);
        let service = ExpenseService::new(&storage);

        let err = service.record("Rent", "1200", "Zed", None).unwrap_err();
        assert!(matches!(err, SplitError::UnknownPayer(ref n) if n == "Zed"));
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_removed_payer_cannot_record() {
        let (_temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B"]);
        ParticipantService::new(&storage).remove("B").unwrap();

        let err = ExpenseService::new(&storage)
            .record("Gas", "10", "B", None)
            .unwrap_err();
        assert!(matches!(err, SplitError::UnknownPayer(_)));
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let (temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B"]);

        // A directory in place of the temp file makes the atomic write fail
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(data_dir.join("expenses.json.tmp")).unwrap();

        let service = ExpenseService::new(&storage);
        let err = service.record("Rent", "100", "A", None).unwrap_err();
        assert!(matches!(err, SplitError::Storage(_)));
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_record_with_bill() {
        let (temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B"]);
        let bill = temp_dir.path().join("bill.png");
        std::fs::write(&bill, b"png").unwrap();

        let record = ExpenseService::new(&storage)
            .record("Power", "80", "B", bill.to_str())
            .unwrap();

        assert_eq!(record.attachment.as_deref(), Some("bill.png"));
        assert!(storage.attachments.path_of("bill.png").exists());
    }

    #[test]
    fn test_missing_bill_appends_nothing() {
        let (temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B"]);
        let missing = temp_dir.path().join("missing.png");

        let service = ExpenseService::new(&storage);
        let err = service
            .record("Power", "80", "B", missing.to_str())
            .unwrap_err();
        assert!(matches!(err, SplitError::Attachment(_)));
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_record_split_with_snapshot() {
        let (_temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B", "C"]);
        let snapshot = storage.participants.get_all().unwrap();

        let record = ExpenseService::new(&storage)
            .record_split("Snacks", Money::from_cents(1000), "C", &snapshot, None)
            .unwrap();
        assert_eq!(record.split["A"].cents(), 333);
        assert_eq!(record.payer_portion().cents(), 334);
    }

    #[test]
    fn test_find_and_history() {
        let (_temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B"]);
        let service = ExpenseService::new(&storage);

        let first = service.record("First", "10", "A", None).unwrap();
        let second = service.record("Second", "20", "B", None).unwrap();

        assert_eq!(service.find(&first.id.to_string()).unwrap().name, "First");
        assert_eq!(
            service.find(&second.id.as_uuid().to_string()).unwrap().name,
            "Second"
        );
        assert!(service.find("exp-zzzzzzzz").unwrap_err().is_not_found());

        let history = service.history(None).unwrap();
        assert_eq!(history[0].name, "Second");
        assert_eq!(service.history(Some(1)).unwrap().len(), 1);
        assert_eq!(service.total_spent().unwrap(), Money::from_cents(3000));
    }

    #[test]
    fn test_persisted_across_reload() {
        let (temp_dir, storage) = create_test_storage();
        with_participants(&storage, &["A", "B"]);
        let record = ExpenseService::new(&storage)
            .record("Internet", "45.99", "A", None)
            .unwrap();

        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();

        let loaded = ExpenseService::new(&reopened).list().unwrap();
        assert_eq!(loaded, vec![record]);
    }
}
