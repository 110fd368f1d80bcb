//! Plain-text report export
//!
//! One block per record plus a summary footer, the shape of the original
//! downloadable expense report.

use std::io::Write;

use chrono::Utc;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{compute_totals, Ledger};

/// Export the ledger as a human-readable text report
pub fn export_text_report<W: Write>(
    ledger: &Ledger,
    currency_symbol: &str,
    writer: &mut W,
) -> LedgerResult<()> {
    let totals = compute_totals(ledger);

    let mut out = String::new();
    out.push_str("Personal Budget Tracker - Expenses Report\n");
    out.push_str(&format!(
        "Generated on: {}\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");

    for record in &ledger.records {
        out.push_str(&format!("Date: {}\n", record.date.format("%Y-%m-%d")));
        out.push_str(&format!("Item: {}\n", record.item));
        out.push_str(&format!(
            "Price: {}\n",
            record.price.format_with_symbol(currency_symbol)
        ));
        out.push_str(&format!("Note: {}\n", record.note));
        out.push_str(&"-".repeat(30));
        out.push('\n');
    }

    out.push_str("\nSummary:\n");
    out.push_str(&format!("Total Items: {}\n", totals.count));
    out.push_str(&format!(
        "Total Amount: {}\n",
        totals.total_expenses.format_with_symbol(currency_symbol)
    ));
    out.push_str(&format!(
        "Income: {}\n",
        ledger.income.format_with_symbol(currency_symbol)
    ));
    out.push_str(&format!(
        "Remaining Balance: {}\n",
        totals.remaining_balance.format_with_symbol(currency_symbol)
    ));

    writer
        .write_all(out.as_bytes())
        .map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_text_report() {
        let mut ledger = Ledger::new();
        ledger.income = Money::from_minor(100_000);
        ledger.records.push(ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "milk",
            Money::from_minor(5000),
            "daily",
        ));

        let mut output = Vec::new();
        export_text_report(&ledger, "₹", &mut output).unwrap();

        let report = String::from_utf8(output).unwrap();
        assert!(report.contains("Date: 2024-01-15"));
        assert!(report.contains("Item: Milk"));
        assert!(report.contains("Price: ₹50.00"));
        assert!(report.contains("Note: daily"));
        assert!(report.contains("Total Items: 1"));
        assert!(report.contains("Remaining Balance: ₹950.00"));
    }

    #[test]
    fn test_text_report_empty_ledger() {
        let mut output = Vec::new();
        export_text_report(&Ledger::new(), "$", &mut output).unwrap();

        let report = String::from_utf8(output).unwrap();
        assert!(report.contains("Total Items: 0"));
        assert!(report.contains("Total Amount: $0.00"));
    }
}
