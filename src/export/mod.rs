//! Export module for roomsplit
//!
//! Provides ledger export in multiple formats:
//! - CSV: expenses or balances, for spreadsheets
//! - JSON: the full ledger, machine-readable and restorable
//! - YAML: the full ledger, human-readable and restorable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_balances_csv, export_expenses_csv};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
