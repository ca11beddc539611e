//! Balance CLI command

use crate::config::settings::Settings;
use crate::display::{format_balance_line, format_balances};
use crate::error::SplitResult;
use crate::services::{BalanceService, ParticipantService};
use crate::storage::Storage;

/// Show balances for everyone, or for a single participant
pub fn handle_balance_command(
    storage: &Storage,
    settings: &Settings,
    participant: Option<String>,
) -> SplitResult<()> {
    let service = BalanceService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match participant {
        Some(name) => {
            let name = name.trim();
            let balance = service.balance_of(name)?;
            println!("{}", format_balance_line(name, balance, symbol));
        }
        None => {
            let participants = ParticipantService::new(storage).list()?;
            let rows = service.ordered()?;
            print!("{}", format_balances(&rows, &participants, symbol));
        }
    }

    Ok(())
}
