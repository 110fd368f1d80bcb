//! CSV export
//!
//! Writes the expense table in the same four-column shape as the backing
//! artifact, suitable for download or re-import.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;

/// Export all expense records to CSV
pub fn export_expenses_csv<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    writeln!(writer, "Date,Item,Price,Note")
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    for record in &ledger.records {
        writeln!(
            writer,
            "{},{},{},{}",
            record.date.format("%Y-%m-%d"),
            escape_csv(&record.item),
            record.price.to_decimal_string(),
            escape_csv(&record.note)
        )
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
