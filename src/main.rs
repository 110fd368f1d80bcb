use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spendbook::cli::{
    handle_expense_command, handle_export_command, handle_income_command, handle_pull_command,
    handle_summary_command, ExpenseCommands, IncomeCommands,
};
use spendbook::config::{paths::SpendbookPaths, settings::Settings};
use spendbook::export::ExportFormat;
use spendbook::services::LedgerService;
use spendbook::storage::Store;

#[derive(Parser)]
#[command(
    name = "spendbook",
    author = "Kaylee Beyene",
    version,
    about = "Personal expense ledger",
    long_about = "spendbook is a single-user expense ledger. It records dated \
                  expenses against one income value, keeps running totals and \
                  the remaining balance, and can pull the whole ledger from a \
                  publicly shared spreadsheet."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Show the expense table and the ledger summary
    Summary,

    /// Export the ledger to a file
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output path; defaults to expenses_<date>.<ext> in the current directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the ledger with the contents of a published sheet
    Pull {
        /// Sheet URL; defaults to remote_sheet_url from config.json
        url: Option<String>,
    },

    /// Delete every expense, the income value, and the backing files
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage and hydrate the ledger
    let store = Store::new(paths.clone())?;
    let service = LedgerService::new(&store);
    let mut ledger = service.load();

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&store, &settings, &mut ledger, cmd)?;
        }
        Some(Commands::Income(cmd)) => {
            handle_income_command(&store, &settings, &mut ledger, cmd)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&settings, &ledger)?;
        }
        Some(Commands::Export { format, output }) => {
            handle_export_command(&settings, &ledger, format, output)?;
        }
        Some(Commands::Pull { url }) => {
            handle_pull_command(&store, &settings, &mut ledger, url)?;
        }
        Some(Commands::Clear { yes }) => {
            if yes {
                service.clear_all(&mut ledger)?;
                println!("All data cleared.");
            } else {
                println!("This deletes every expense, the income value, and the backing files.");
                println!("Re-run with --yes to confirm.");
            }
        }
        Some(Commands::Config) => {
            println!("spendbook Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!(
                "  Remote sheet:    {}",
                settings.remote_sheet_url.as_deref().unwrap_or("(not set)")
            );
            println!("  Fetch timeout:   {}s", settings.fetch_timeout_secs);
        }
        None => {
            println!("spendbook - personal expense ledger");
            println!();
            println!("Run 'spendbook --help' for usage information.");
            println!("Run 'spendbook summary' to see the current ledger.");
        }
    }

    Ok(())
}
