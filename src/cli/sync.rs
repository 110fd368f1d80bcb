//! Remote sheet pull command
//!
//! Fetches a published sheet and replaces the local ledger with its
//! contents. Any failure leaves the prior state untouched.

use std::time::Duration;

use crate::config::settings::Settings;
use crate::display;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;
use crate::remote;
use crate::services::LedgerService;
use crate::storage::Store;

/// Handle a pull command
pub fn handle_pull_command(
    store: &Store,
    settings: &Settings,
    ledger: &mut Ledger,
    url: Option<String>,
) -> LedgerResult<()> {
    let url = url
        .or_else(|| settings.remote_sheet_url.clone())
        .ok_or_else(|| {
            LedgerError::Config(
                "no sheet URL given and remote_sheet_url is not set in config.json".into(),
            )
        })?;

    let timeout = Duration::from_secs(settings.fetch_timeout_secs);
    let import = remote::pull_sheet(&url, timeout)?;

    let service = LedgerService::new(store);
    let count = import.records.len();

    service.replace_records(ledger, import.records)?;
    if let Some(income) = import.income {
        service.set_income(ledger, income)?;
    }

    println!("Imported {} records from the remote sheet", count);
    println!();
    print!(
        "{}",
        display::format_summary(ledger, &service.totals(ledger), &settings.currency_symbol)
    );

    Ok(())
}
