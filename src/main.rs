use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use roomsplit::cli::{
    handle_audit_command, handle_balance_command, handle_config_command, handle_expense_command,
    handle_export_command, handle_import_command, handle_participant_command, ConfigUpdate,
    ExpenseCommands, ExportFormat, ParticipantCommands,
};
use roomsplit::config::{paths::SplitPaths, settings::Settings};
use roomsplit::logging::init_tracing;
use roomsplit::storage::Storage;

#[derive(Parser)]
#[command(
    name = "roomsplit",
    version,
    about = "Split shared household expenses between roommates",
    long_about = "roomsplit keeps a ledger of who paid for what, splits every expense \
                  equally among the current roommates, and tells you who owes whom."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Participant management commands
    #[command(subcommand, alias = "p")]
    Participant(ParticipantCommands),

    /// Expense commands
    #[command(subcommand, alias = "e")]
    Expense(ExpenseCommands),

    /// Show who owes whom
    #[command(alias = "b")]
    Balance {
        /// Only show this participant
        #[arg(short, long)]
        participant: Option<String>,
    },

    /// Export the ledger
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Output file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Export balances instead of expenses (CSV only)
        #[arg(long)]
        balances: bool,
    },

    /// Restore the ledger from a JSON or YAML export
    Import {
        /// Export file to restore from
        input: PathBuf,

        /// Replace a ledger that already has data
        #[arg(long)]
        force: bool,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    Config {
        /// Currency symbol used in output
        #[arg(long)]
        currency_symbol: Option<String>,

        /// Timestamp format (strftime)
        #[arg(long)]
        date_format: Option<String>,

        /// Participant removal policy (allow, require_settled)
        #[arg(long)]
        removal_policy: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = SplitPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Participant(cmd)) => {
            handle_participant_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Balance { participant }) => {
            handle_balance_command(&storage, &settings, participant)?;
        }
        Some(Commands::Export {
            format,
            output,
            pretty,
            balances,
        }) => {
            handle_export_command(&storage, format, output, pretty, balances)?;
        }
        Some(Commands::Import { input, force }) => {
            handle_import_command(&storage, &input, force)?;
        }
        Some(Commands::Audit { limit }) => {
            handle_audit_command(&storage, limit)?;
        }
        Some(Commands::Config {
            currency_symbol,
            date_format,
            removal_policy,
        }) => {
            let update = ConfigUpdate {
                currency_symbol,
                date_format,
                removal_policy,
            };
            handle_config_command(&paths, &mut settings, update)?;
        }
        None => {
            println!("roomsplit - split shared expenses between roommates");
            println!();
            println!("Run 'roomsplit --help' for usage information.");
        }
    }

    Ok(())
}
