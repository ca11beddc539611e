//! Participant CLI commands
//!
//! Implements CLI commands for managing the people sharing expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_participant_list;
use crate::error::SplitResult;
use crate::services::{BalanceService, ParticipantService};
use crate::storage::Storage;

/// Participant subcommands
#[derive(Subcommand, Debug)]
pub enum ParticipantCommands {
    /// Add a participant
    Add {
        /// Participant name (must be unique)
        name: String,
    },
    /// Remove a participant; their past expenses are kept
    #[command(alias = "rm")]
    Remove {
        /// Participant name
        name: String,
    },
    /// List participants with their balances
    #[command(alias = "ls")]
    List,
}

/// Handle a participant command
pub fn handle_participant_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ParticipantCommands,
) -> SplitResult<()> {
    let service = ParticipantService::new(storage).with_removal_policy(settings.removal_policy);

    match cmd {
        ParticipantCommands::Add { name } => {
            let participant = service.add(&name)?;
            println!("Added participant: {}", participant.name);
        }

        ParticipantCommands::Remove { name } => {
            let participant = service.remove(&name)?;
            println!("Removed participant: {}", participant.name);
        }

        ParticipantCommands::List => {
            let participants = service.list()?;
            let balances = BalanceService::new(storage).compute()?;
            println!(
                "{}",
                format_participant_list(&participants, &balances, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
