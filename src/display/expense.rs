//! Expense display formatting
//!
//! Provides the history table and the detail view of a single expense.

use crate::config::settings::Settings;
use crate::models::ExpenseRecord;

/// Format an expense history as a table
pub fn format_expense_list(expenses: &[ExpenseRecord], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let payer_width = expenses
        .iter()
        .map(|e| e.payer.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let dates: Vec<String> = expenses
        .iter()
        .map(|e| settings.format_timestamp(&e.created_at))
        .collect();
    let date_width = dates
        .iter()
        .map(|d| d.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<date_width$}  {:<24}  {:<payer_width$}  {:>12}  {}\n",
        "ID",
        "Date",
        "Name",
        "Payer",
        "Amount",
        "Bill",
        date_width = date_width,
        payer_width = payer_width,
    ));
    output.push_str(&"-".repeat(12 + date_width + 24 + payer_width + 12 + 4 + 10));
    output.push('\n');

    for (expense, date) in expenses.iter().zip(&dates) {
        output.push_str(&format!(
            "{:<12}  {:<date_width$}  {:<24}  {:<payer_width$}  {:>12}  {}\n",
            expense.id.to_string(),
            date,
            truncate(&expense.name, 24),
            expense.payer,
            expense.amount.format_with_symbol(&settings.currency_symbol),
            if expense.has_attachment() { "yes" } else { "" },
            date_width = date_width,
            payer_width = payer_width,
        ));
    }

    output
}

/// Format a single expense with its full split
pub fn format_expense_details(expense: &ExpenseRecord, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.id));
    output.push_str(&format!("  ID:       {}\n", expense.id.as_uuid()));
    if expense.name.is_empty() {
        output.push_str("  Name:     (unnamed)\n");
    } else {
        output.push_str(&format!("  Name:     {}\n", expense.name));
    }
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Paid by:  {}\n", expense.payer));
    output.push_str(&format!(
        "  Recorded: {}\n",
        settings.format_timestamp(&expense.created_at)
    ));
    if let Some(bill) = &expense.attachment {
        output.push_str(&format!("  Bill:     {}\n", bill));
    }

    output.push_str(&format!(
        "\nSplit between {} participants:\n",
        expense.participant_count()
    ));
    for (name, share) in &expense.split {
        let note = if *name == expense.payer {
            format!(
                "  (paid, covers {} themselves)",
                expense.payer_portion().format_with_symbol(symbol)
            )
        } else {
            String::new()
        };
        output.push_str(&format!(
            "  {:<20} {:>12}{}\n",
            name,
            share.format_with_symbol(symbol),
            note
        ));
    }

    output
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
