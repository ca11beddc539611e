//! Expense repository for JSON storage
//!
//! Expense records form an append-only list persisted to expenses.json.
//! Records are never edited in place; the only removal is rolling back an
//! append whose save failed.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::SplitError;
use crate::models::{ExpenseId, ExpenseRecord};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<ExpenseRecord>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<ExpenseRecord>>, SplitError> {
        self.data
            .read()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<ExpenseRecord>>, SplitError> {
        self.data
            .write()
            .map_err(|e| SplitError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load expenses from disk
    ///
    /// A missing or corrupt file yields an empty history.
    pub fn load(&self) -> Result<(), SplitError> {
        let file_data: ExpenseData = read_json_or_default(&self.path);

        let mut data = self.write()?;
        *data = file_data.expenses;
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), SplitError> {
        let data = self.read()?;
        let file_data = ExpenseData {
            expenses: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all expenses in the order they were recorded
    pub fn get_all(&self) -> Result<Vec<ExpenseRecord>, SplitError> {
        Ok(self.read()?.clone())
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<ExpenseRecord>, SplitError> {
        Ok(self.read()?.iter().find(|e| e.id == id).cloned())
    }

    /// Find expenses whose short display ID starts with the given string
    pub fn find_by_short_id(&self, short: &str) -> Result<Vec<ExpenseRecord>, SplitError> {
        Ok(self
            .read()?
            .iter()
            .filter(|e| e.id.matches_short(short))
            .cloned()
            .collect())
    }

    /// Append a record to the end of the history
    pub fn append(&self, record: ExpenseRecord) -> Result<(), SplitError> {
        self.write()?.push(record);
        Ok(())
    }

    /// Undo the most recent append if it is the given record
    pub fn rollback_append(&self, id: ExpenseId) -> Result<bool, SplitError> {
        let mut data = self.write()?;
        if data.last().map(|e| e.id) == Some(id) {
            data.pop();
            return Ok(true);
        }
        Ok(false)
    }

    /// Replace the whole history
    pub fn replace_all(&self, expenses: Vec<ExpenseRecord>) -> Result<(), SplitError> {
        *self.write()? = expenses;
        Ok(())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, SplitError> {
        Ok(self.read()?.len())
    }
}
