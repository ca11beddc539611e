//! Participant display formatting

use crate::models::{Balances, Participant};

/// Format the active participants with their current balances
pub fn format_participant_list(
    participants: &[Participant],
    balances: &Balances,
    currency_symbol: &str,
) -> String {
    if participants.is_empty() {
        return "No participants yet. Add one with `roomsplit participant add <name>`.".to_string();
    }

    let name_width = participants
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<10}  {:>12}\n",
        "Name",
        "Joined",
        "Balance",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<10}  {:->12}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for participant in participants {
        let balance = balances.get(&participant.name).unwrap_or_default();
        output.push_str(&format!(
            "{:<name_width$}  {:<10}  {:>12}\n",
            participant.name,
            participant.added_at.format("%Y-%m-%d"),
            balance.format_with_symbol(currency_symbol),
            name_width = name_width,
        ));
    }

    output
}
