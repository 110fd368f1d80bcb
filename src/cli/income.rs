//! Income CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{compute_totals, Ledger, Money};
use crate::services::LedgerService;
use crate::storage::Store;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the income value
    Set {
        /// Income amount (e.g., "1000" or "1000.00")
        amount: String,
    },

    /// Show the income value and the remaining balance
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    store: &Store,
    settings: &Settings,
    ledger: &mut Ledger,
    cmd: IncomeCommands,
) -> LedgerResult<()> {
    let service = LedgerService::new(store);
    let symbol = &settings.currency_symbol;

    match cmd {
        IncomeCommands::Set { amount } => {
            let amount = Money::parse(&amount)
                .map_err(|e| LedgerError::Validation(format!("Invalid amount: {}", e)))?;

            service.set_income(ledger, amount)?;

            let totals = service.totals(ledger);
            println!("Income set to {}", ledger.income.format_with_symbol(symbol));
            println!(
                "Remaining balance: {}",
                totals.remaining_balance.format_with_symbol(symbol)
            );
        }

        IncomeCommands::Show => {
            let totals = compute_totals(ledger);
            println!("Income:            {}", ledger.income.format_with_symbol(symbol));
            println!(
                "Total Expenses:    {}",
                totals.total_expenses.format_with_symbol(symbol)
            );
            println!(
                "Remaining Balance: {}",
                totals.remaining_balance.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
