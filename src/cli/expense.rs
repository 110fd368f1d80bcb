//! Expense CLI commands
//!
//! Implements add, list, and grid-edit replacement of the expense table.

use std::fs::File;
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date_flexible, Ledger, Money};
use crate::services::{LedgerService, NewExpense};
use crate::storage::{read_expense_rows, Store};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Item name (e.g., "Milk")
        item: String,

        /// Price paid (e.g., "50" or "50.00")
        price: String,

        /// Expense date (YYYY-MM-DD); defaults to today
        #[arg(short, long)]
        date: Option<String>,

        /// Optional note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List recorded expenses
    List {
        /// Show only the most recent N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Replace the whole table from an edited CSV file
    Edit {
        /// Path to a CSV file with Date,Item,Price,Note columns
        file: PathBuf,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &Store,
    settings: &Settings,
    ledger: &mut Ledger,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    let service = LedgerService::new(store);

    match cmd {
        ExpenseCommands::Add {
            item,
            price,
            date,
            note,
        } => {
            let date = match date {
                Some(s) => parse_date_flexible(&s)
                    .ok_or_else(|| LedgerError::Validation(format!("Invalid date: {}", s)))?,
                None => Local::now().date_naive(),
            };
            let price = Money::parse(&price)
                .map_err(|e| LedgerError::Validation(format!("Invalid price: {}", e)))?;

            let record = service.add_expense(
                ledger,
                NewExpense {
                    date,
                    item,
                    price,
                    note,
                },
            )?;

            println!(
                "Added {} ({}) on {}",
                record.item,
                record.price.format_with_symbol(&settings.currency_symbol),
                record.date.format("%Y-%m-%d")
            );
            println!();
            print!(
                "{}",
                display::format_summary(
                    ledger,
                    &service.totals(ledger),
                    &settings.currency_symbol
                )
            );
        }

        ExpenseCommands::List { limit } => {
            let records = &ledger.records;
            let shown = match limit {
                Some(n) => &records[records.len().saturating_sub(n)..],
                None => &records[..],
            };

            println!(
                "{}",
                display::format_expense_table(shown, &settings.currency_symbol)
            );
            if shown.len() < records.len() {
                println!("(showing {} of {} entries)", shown.len(), records.len());
            }
        }

        ExpenseCommands::Edit { file } => {
            let handle = File::open(&file).map_err(|e| {
                LedgerError::Io(format!("Failed to open {}: {}", file.display(), e))
            })?;
            let records = read_expense_rows(handle)?;
            let count = records.len();

            service.replace_records(ledger, records)?;

            println!(
                "Replaced the expense table with {} rows from {}",
                count,
                file.display()
            );
        }
    }

    Ok(())
}
