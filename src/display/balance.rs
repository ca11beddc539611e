//! Balance display formatting
//!
//! Positive balances are owed to the participant, negative ones are owed by
//! the participant.

use crate::models::{Money, Participant};

/// Describe a balance in words, e.g. "is owed $20.00"
pub fn describe_balance(balance: Money, currency_symbol: &str) -> String {
    if balance.is_positive() {
        format!("is owed {}", balance.format_with_symbol(currency_symbol))
    } else if balance.is_negative() {
        format!("owes {}", balance.abs().format_with_symbol(currency_symbol))
    } else {
        "is settled up".to_string()
    }
}

/// Format one participant's balance as a sentence
pub fn format_balance_line(name: &str, balance: Money, currency_symbol: &str) -> String {
    format!("{} {}", name, describe_balance(balance, currency_symbol))
}

/// Format balances as a table in display order
///
/// `rows` comes from [`crate::models::Balances::ordered`]. Names that are no
/// longer active participants are marked as former.
pub fn format_balances(
    rows: &[(String, Money)],
    participants: &[Participant],
    currency_symbol: &str,
) -> String {
    if rows.is_empty() {
        return "No participants yet.".to_string();
    }

    let label = |name: &str| {
        if participants.iter().any(|p| p.name == name) {
            name.to_string()
        } else {
            format!("{} (former)", name)
        }
    };

    let name_width = rows
        .iter()
        .map(|(name, _)| label(name).chars().count())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {}\n",
        "Participant",
        "Balance",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:-<20}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for (name, balance) in rows {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {}\n",
            label(name),
            balance.format_with_symbol(currency_symbol),
            describe_balance(*balance, currency_symbol),
            name_width = name_width,
        ));
    }

    let total: Money = rows.iter().map(|(_, balance)| *balance).sum();
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:-<20}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:>12}\n",
        "TOTAL",
        total.format_with_symbol(currency_symbol),
        name_width = name_width,
    ));

    output
}
