//! Spreadsheet workbook export
//!
//! Produces an XLSX byte stream with two sheets: `Expenses` (the four
//! record columns) and `Settings` (`Parameter,Value` pairs carrying the
//! income, totals, and a generation timestamp).

use chrono::Utc;
use rust_xlsxwriter::{Workbook, XlsxError};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{compute_totals, Ledger, Money};

/// Export the ledger as XLSX workbook bytes
pub fn export_workbook(ledger: &Ledger) -> LedgerResult<Vec<u8>> {
    build_workbook(ledger).map_err(|e| LedgerError::Export(e.to_string()))
}

fn build_workbook(ledger: &Ledger) -> Result<Vec<u8>, XlsxError> {
    let totals = compute_totals(ledger);
    let mut workbook = Workbook::new();

    let expenses = workbook.add_worksheet().set_name("Expenses")?;
    expenses.write_string(0, 0, "Date")?;
    expenses.write_string(0, 1, "Item")?;
    expenses.write_string(0, 2, "Price")?;
    expenses.write_string(0, 3, "Note")?;

    for (idx, record) in ledger.records.iter().enumerate() {
        let row = idx as u32 + 1;
        expenses.write_string(row, 0, record.date.format("%Y-%m-%d").to_string())?;
        expenses.write_string(row, 1, record.item.as_str())?;
        expenses.write_number(row, 2, as_units(record.price))?;
        expenses.write_string(row, 3, record.note.as_str())?;
    }

    let settings = workbook.add_worksheet().set_name("Settings")?;
    settings.write_string(0, 0, "Parameter")?;
    settings.write_string(0, 1, "Value")?;

    settings.write_string(1, 0, "Income")?;
    settings.write_number(1, 1, as_units(ledger.income))?;

    settings.write_string(2, 0, "Total_Expenses")?;
    settings.write_number(2, 1, as_units(totals.total_expenses))?;

    settings.write_string(3, 0, "Remaining_Balance")?;
    settings.write_number(3, 1, as_units(totals.remaining_balance))?;

    settings.write_string(4, 0, "Last_Updated")?;
    settings.write_string(4, 1, Utc::now().format("%Y-%m-%d %H:%M:%S").to_string())?;

    workbook.save_to_buffer()
}

/// Spreadsheet cells hold whole currency units, not minor units
fn as_units(amount: Money) -> f64 {
    amount.minor() as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;
    use chrono::NaiveDate;

    #[test]
    fn test_workbook_bytes_produced() {
        let mut ledger = Ledger::new();
        ledger.income = Money::from_minor(100_000);
        ledger.records.push(ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "milk",
            Money::from_minor(5000),
            "",
        ));

        let bytes = export_workbook(&ledger).unwrap();

        // XLSX is a zip archive; check the magic bytes
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_workbook_empty_ledger() {
        let bytes = export_workbook(&Ledger::new()).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
