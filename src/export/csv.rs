//! CSV Export functionality
//!
//! Exports expenses and balances to spreadsheet-friendly CSV.

use crate::error::{SplitError, SplitResult};
use crate::services::{BalanceService, ExpenseService, ParticipantService};
use crate::storage::Storage;
use std::collections::BTreeSet;
use std::io::Write;

fn csv_err(e: csv::Error) -> SplitError {
    SplitError::Export(e.to_string())
}

/// Export every expense to CSV, one row per record in recording order
///
/// After the fixed columns there is one share column per name that appears
/// in any split. A blank cell means the name was not part of that expense.
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: W) -> SplitResult<()> {
    let expenses = ExpenseService::new(storage).list()?;
    let names: BTreeSet<&str> = expenses
        .iter()
        .flat_map(|e| e.split.keys().map(String::as_str))
        .collect();

    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec![
        "ID",
        "Created",
        "Name",
        "Payer",
        "Amount",
        "Payer Portion",
        "Attachment",
    ];
    header.extend(names.iter().copied());
    wtr.write_record(&header).map_err(csv_err)?;

    for expense in &expenses {
        let mut row = vec![
            expense.id.as_uuid().to_string(),
            expense.created_at.to_rfc3339(),
            expense.name.clone(),
            expense.payer.clone(),
            expense.amount.to_decimal_string(),
            expense.payer_portion().to_decimal_string(),
            expense.attachment.clone().unwrap_or_default(),
        ];
        row.extend(names.iter().map(|name| {
            expense
                .split
                .get(*name)
                .map(|share| share.to_decimal_string())
                .unwrap_or_default()
        }));
        wtr.write_record(&row).map_err(csv_err)?;
    }

    wtr.flush()?;
    tracing::debug!(rows = expenses.len(), "exported expenses csv");
    Ok(())
}

/// Export the current balances to CSV in display order
pub fn export_balances_csv<W: Write>(storage: &Storage, writer: W) -> SplitResult<()> {
    let active = ParticipantService::new(storage).list()?;
    let rows = BalanceService::new(storage).ordered()?;
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["Participant", "Balance", "Status"])
        .map_err(csv_err)?;

    for (name, balance) in &rows {
        let status = if active.iter().any(|p| &p.name == name) {
            "active"
        } else {
            "former"
        };
        wtr.write_record([name.as_str(), &balance.to_decimal_string(), status])
            .map_err(csv_err)?;
    }

    wtr.flush()?;
    Ok(())
}
