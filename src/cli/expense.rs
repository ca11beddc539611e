//! Expense CLI commands
//!
//! Implements CLI commands for recording and browsing expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::SplitResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense split equally among all participants
    Add {
        /// What the expense was for
        name: String,
        /// Amount paid (e.g., "30", "45.99" or "$12.50")
        amount: String,
        /// Participant who paid
        #[arg(short, long)]
        payer: String,
        /// Path to a bill or receipt to attach
        #[arg(short, long)]
        bill: Option<String>,
    },
    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show an expense and its split
    Show {
        /// Expense ID (full UUID or short form like exp-1a2b3c4d)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> SplitResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            payer,
            bill,
        } => {
            let record = service.record(&name, &amount, &payer, bill.as_deref())?;
            let symbol = settings.currency_symbol.as_str();

            println!("Recorded expense: {}", record.id);
            println!(
                "  {} paid {} for {}",
                record.payer,
                record.amount.format_with_symbol(symbol),
                if record.name.is_empty() { "(unnamed)" } else { record.name.as_str() }
            );
            for (name, share) in record.split.iter().filter(|(n, _)| **n != record.payer) {
                println!("  {} owes {}", name, share.format_with_symbol(symbol));
            }
            if let Some(bill) = &record.attachment {
                println!("  Bill saved as: {}", bill);
            }
        }

        ExpenseCommands::List { limit } => {
            let expenses = service.history(limit)?;
            print!("{}", format_expense_list(&expenses, settings));

            let total = service.count()?;
            if expenses.len() < total {
                println!("Showing {} of {} expenses.", expenses.len(), total);
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = service.find(&id)?;
            print!("{}", format_expense_details(&expense, settings));
        }
    }

    Ok(())
}
