//! Storage layer for roomsplit
//!
//! Holds the ledger in memory (participants and the append-only expense
//! history) and persists it as whole JSON snapshots with atomic writes.

pub mod attachments;
pub mod expenses;
pub mod file_io;
pub mod participants;

pub use attachments::AttachmentStore;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use participants::ParticipantRepository;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::SplitPaths;
use crate::error::SplitError;
use crate::models::{ExpenseRecord, Participant};

/// The full ledger contents: active participants and every expense recorded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub participants: Vec<Participant>,
    pub expenses: Vec<ExpenseRecord>,
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SplitPaths,
    pub participants: ParticipantRepository,
    pub expenses: ExpenseRepository,
    pub attachments: AttachmentStore,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SplitPaths) -> Result<Self, SplitError> {
        paths.ensure_directories()?;

        Ok(Self {
            participants: ParticipantRepository::new(paths.participants_file()),
            expenses: ExpenseRepository::new(paths.expenses_file()),
            attachments: AttachmentStore::new(paths.uploads_dir()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SplitPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SplitError> {
        self.participants.load()?;
        self.expenses.load()?;
        tracing::debug!(
            participants = self.participants.count()?,
            expenses = self.expenses.count()?,
            "ledger loaded"
        );
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SplitError> {
        self.participants.save()?;
        self.expenses.save()?;
        Ok(())
    }

    /// Read the whole ledger from disk
    ///
    /// Missing or corrupt files come back as empty collections; this never fails
    /// on bad data.
    pub fn load_snapshot(&self) -> Result<LedgerSnapshot, SplitError> {
        self.participants.load()?;
        self.expenses.load()?;
        self.snapshot()
    }

    /// Replace the in-memory ledger and write it to disk
    ///
    /// If writing fails the previous ledger is put back in memory and written
    /// again, so a failed import leaves neither memory nor disk half-replaced.
    pub fn save_snapshot(&self, snapshot: &LedgerSnapshot) -> Result<(), SplitError> {
        let previous = self.snapshot()?;

        self.participants
            .replace_all(snapshot.participants.clone())?;
        self.expenses.replace_all(snapshot.expenses.clone())?;

        if let Err(err) = self.save_all() {
            self.participants.replace_all(previous.participants)?;
            self.expenses.replace_all(previous.expenses)?;
            if let Err(restore_err) = self.save_all() {
                tracing::warn!(error = %restore_err, "failed to rewrite previous ledger");
            }
            tracing::warn!(error = %err, "failed to save ledger snapshot, restored previous");
            return Err(err);
        }

        Ok(())
    }

    /// Current in-memory ledger contents
    pub fn snapshot(&self) -> Result<LedgerSnapshot, SplitError> {
        Ok(LedgerSnapshot {
            participants: self.participants.get_all()?,
            expenses: self.expenses.get_all()?,
        })
    }

    /// Append an entry to the audit log
    pub fn record_audit(&self, entry: &AuditEntry) -> Result<(), SplitError> {
        self.audit.log(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Split};
    use tempfile::TempDir;

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_storage();
        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.snapshot().unwrap(), LedgerSnapshot::default());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let (temp_dir, storage) = create_storage();

        let mut split = Split::new();
        split.insert("A".into(), Money::zero());
        split.insert("B".into(), Money::from_cents(1500));
        let snapshot = LedgerSnapshot {
            participants: vec![Participant::new("A"), Participant::new("B")],
            expenses: vec![ExpenseRecord::new(
                "Pizza",
                Money::from_cents(3000),
                "A",
                split,
                Some("pizza.jpg".into()),
            )],
        };
        storage.save_snapshot(&snapshot).unwrap();

        let paths = SplitPaths::with_base_dir(temp_dir.path().to_path_buf());
        let reopened = Storage::new(paths).unwrap();
        assert_eq!(reopened.load_snapshot().unwrap(), snapshot);
    }

    #[test]
    fn test_corrupt_storage_loads_empty_snapshot() {
        let (temp_dir, storage) = create_storage();
        let data_dir = temp_dir.path().join("data");
        std::fs::write(data_dir.join("participants.json"), "garbage").unwrap();
        std::fs::write(data_dir.join("expenses.json"), "").unwrap();

        assert_eq!(storage.load_snapshot().unwrap(), LedgerSnapshot::default());
    }

    #[test]
    fn test_failed_save_keeps_previous_ledger() {
        let (temp_dir, storage) = create_storage();
        let current = LedgerSnapshot {
            participants: vec![Participant::new("A")],
            expenses: Vec::new(),
        };
        storage.save_snapshot(&current).unwrap();

        // A directory in the way of the temp file makes the expenses write fail
        std::fs::create_dir(temp_dir.path().join("data").join("expenses.json.tmp")).unwrap();

        let mut split = Split::new();
        split.insert("B".into(), Money::zero());
        let replacement = LedgerSnapshot {
            participants: vec![Participant::new("B")],
            expenses: vec![ExpenseRecord::new(
                "Rent",
                Money::from_cents(1000),
                "B",
                split,
                None,
            )],
        };

        assert!(storage.save_snapshot(&replacement).is_err());
        assert_eq!(storage.snapshot().unwrap(), current);
        assert_eq!(storage.load_snapshot().unwrap(), current);
    }
}
