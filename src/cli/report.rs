//! Summary and export CLI commands

use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::config::settings::Settings;
use crate::display;
use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_expenses_csv, export_text_report, export_workbook, ExportFormat};
use crate::models::{compute_totals, Ledger};

/// Print the full ledger view: table plus summary block
pub fn handle_summary_command(settings: &Settings, ledger: &Ledger) -> LedgerResult<()> {
    println!(
        "{}",
        display::format_expense_table(&ledger.records, &settings.currency_symbol)
    );
    print!(
        "{}",
        display::format_summary(ledger, &compute_totals(ledger), &settings.currency_symbol)
    );

    Ok(())
}

/// Write the ledger to a file in the requested format
pub fn handle_export_command(
    settings: &Settings,
    ledger: &Ledger,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let path = output.unwrap_or_else(|| {
        PathBuf::from(format!(
            "expenses_{}.{}",
            Local::now().format("%Y_%m_%d"),
            format.extension()
        ))
    });

    let payload = match format {
        ExportFormat::Csv => {
            let mut buf = Vec::new();
            export_expenses_csv(ledger, &mut buf)?;
            buf
        }
        ExportFormat::Text => {
            let mut buf = Vec::new();
            export_text_report(ledger, &settings.currency_symbol, &mut buf)?;
            buf
        }
        ExportFormat::Workbook => export_workbook(ledger)?,
    };

    fs::write(&path, payload)
        .map_err(|e| LedgerError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    println!("Exported {} records to {}", ledger.count(), path.display());

    Ok(())
}
