//! JSON Export functionality
//!
//! Exports the complete ledger to JSON with schema versioning, and reads such
//! an export back for restoring.

use crate::error::{SplitError, SplitResult};
use crate::models::{Balances, ExpenseRecord, Money, Participant};
use crate::services::compute_balances;
use crate::storage::{LedgerSnapshot, Storage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Active participants in insertion order
    pub participants: Vec<Participant>,

    /// Every expense in the order it was recorded
    pub expenses: Vec<ExpenseRecord>,

    /// Balances derived at export time, for readers of the file
    pub balances: Balances,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub participant_count: usize,
    pub expense_count: usize,
    /// Sum of all expense amounts
    pub total_spent: Money,
    /// Names appearing in past expenses but no longer active
    pub former_participants: Vec<String>,
    pub earliest_expense: Option<DateTime<Utc>>,
    pub latest_expense: Option<DateTime<Utc>>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> SplitResult<Self> {
        Ok(Self::from_snapshot(storage.snapshot()?))
    }

    /// Build an export from a ledger snapshot
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        let LedgerSnapshot {
            participants,
            expenses,
        } = snapshot;

        let balances = compute_balances(&participants, &expenses);
        let former_participants = balances
            .iter()
            .map(|(name, _)| name)
            .filter(|name| !participants.iter().any(|p| p.name == *name))
            .map(str::to_string)
            .collect();

        let metadata = ExportMetadata {
            participant_count: participants.len(),
            expense_count: expenses.len(),
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            former_participants,
            earliest_expense: expenses.iter().map(|e| e.created_at).min(),
            latest_expense: expenses.iter().map(|e| e.created_at).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            participants,
            expenses,
            balances,
            metadata,
        }
    }

    /// Validate the export structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for participant in &self.participants {
            participant
                .validate()
                .map_err(|e| format!("Participant '{}': {}", participant.name, e))?;
            if !seen.insert(participant.name.as_str()) {
                return Err(format!("Duplicate participant '{}'", participant.name));
            }
        }

        let mut ids = std::collections::HashSet::new();
        for expense in &self.expenses {
            expense
                .validate()
                .map_err(|e| format!("Expense {}: {}", expense.id, e))?;
            if !ids.insert(expense.id) {
                return Err(format!("Duplicate expense ID {}", expense.id));
            }
        }

        if compute_balances(&self.participants, &self.expenses) != self.balances {
            return Err("Stored balances do not match the expense history".to_string());
        }

        Ok(())
    }

    /// Convert into a snapshot that can be written back to storage
    pub fn into_snapshot(self) -> LedgerSnapshot {
        LedgerSnapshot {
            participants: self.participants,
            expenses: self.expenses,
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> SplitResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| SplitError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> SplitResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| SplitError::Export(e.to_string()))?;

    export.validate().map_err(SplitError::Export)?;

    Ok(export)
}
