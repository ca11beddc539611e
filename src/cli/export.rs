//! CLI commands for data export and restore
//!
//! Exports write to a file, or to stdout when no output path is given.

use crate::error::{SplitError, SplitResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;
use clap::ValueEnum;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses, or balances with --balances)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
    balances: bool,
) -> SplitResult<()> {
    if balances && format != ExportFormat::Csv {
        return Err(SplitError::Validation(
            "--balances only applies to CSV export; JSON and YAML always include balances"
                .to_string(),
        ));
    }

    match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                SplitError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, &mut writer, format, pretty, balances)?;
            writer.flush()?;
            println!("Exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, &mut writer, format, pretty, balances)?;
            writeln!(writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
    balances: bool,
) -> SplitResult<()> {
    match format {
        ExportFormat::Csv if balances => csv::export_balances_csv(storage, writer),
        ExportFormat::Csv => csv::export_expenses_csv(storage, writer),
        ExportFormat::Json => json::export_full_json(storage, writer, pretty),
        ExportFormat::Yaml => yaml::export_full_yaml(storage, writer),
    }
}

/// Replace the ledger with the contents of a JSON or YAML export
///
/// An existing non-empty ledger is only overwritten with `force`.
pub fn handle_import_command(storage: &Storage, input: &Path, force: bool) -> SplitResult<()> {
    let contents = fs::read_to_string(input).map_err(|e| {
        SplitError::Export(format!("Failed to read {}: {}", input.display(), e))
    })?;

    let is_yaml = matches!(
        input.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let export = if is_yaml {
        yaml::import_from_yaml(&contents)?
    } else {
        json::import_from_json(&contents)?
    };

    let current = storage.snapshot()?;
    if !force && (!current.participants.is_empty() || !current.expenses.is_empty()) {
        return Err(SplitError::Validation(
            "The ledger is not empty; use --force to replace it".to_string(),
        ));
    }

    let snapshot = export.into_snapshot();
    storage.save_snapshot(&snapshot)?;
    tracing::info!(
        participants = snapshot.participants.len(),
        expenses = snapshot.expenses.len(),
        source = %input.display(),
        "ledger restored from export"
    );

    println!(
        "Restored {} participants and {} expenses from {}",
        snapshot.participants.len(),
        snapshot.expenses.len(),
        input.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SplitPaths;
    use crate::services::{ExpenseService, ParticipantService};
    use tempfile::TempDir;

    fn create_test_storage(dir: &Path) -> Storage {
        let paths = SplitPaths::with_base_dir(dir.to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        storage
    }

    #[test]
    fn test_export_then_restore() {
        let temp_dir = TempDir::new().unwrap();
        let source = create_test_storage(&temp_dir.path().join("source"));
        ParticipantService::new(&source).add("A").unwrap();
        ParticipantService::new(&source).add("B").unwrap();
        ExpenseService::new(&source)
            .record("Rent", "900", "A", None)
            .unwrap();

        let export_path = temp_dir.path().join("ledger.yaml");
        handle_export_command(
            &source,
            ExportFormat::Yaml,
            Some(export_path.clone()),
            false,
            false,
        )
        .unwrap();

        let target = create_test_storage(&temp_dir.path().join("target"));
        handle_import_command(&target, &export_path, false).unwrap();
        assert_eq!(target.snapshot().unwrap(), source.snapshot().unwrap());

        // Second restore needs --force
        let err = handle_import_command(&target, &export_path, false).unwrap_err();
        assert!(err.is_validation());
        handle_import_command(&target, &export_path, true).unwrap();
    }

    #[test]
    fn test_balances_flag_requires_csv() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_test_storage(temp_dir.path());

        let err = handle_export_command(&storage, ExportFormat::Json, None, false, true)
            .unwrap_err();
        assert!(err.is_validation());
    }
}
