//! Display formatting for terminal output
//!
//! Renders the expense table and the summary block for the CLI.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ExpenseRecord, Ledger, Totals};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Render expense records as a table
pub fn format_expense_table(records: &[ExpenseRecord], currency_symbol: &str) -> String {
    if records.is_empty() {
        return "No expenses found. Add your first expense with 'spendbook expense add'.\n"
            .to_string();
    }

    let rows: Vec<ExpenseRow> = records
        .iter()
        .map(|r| ExpenseRow {
            date: r.date.format("%Y-%m-%d").to_string(),
            item: r.item.clone(),
            price: r.price.format_with_symbol(currency_symbol),
            note: r.note.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}

/// Render the summary block: income, totals, and remaining balance
pub fn format_summary(ledger: &Ledger, totals: &Totals, currency_symbol: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Income:            {}\n",
        ledger.income.format_with_symbol(currency_symbol)
    ));
    out.push_str(&format!(
        "Total Expenses:    {}\n",
        totals.total_expenses.format_with_symbol(currency_symbol)
    ));
    out.push_str(&format!(
        "Remaining Balance: {}{}\n",
        totals.remaining_balance.format_with_symbol(currency_symbol),
        if totals.remaining_balance.is_negative() {
            " ⚠"
        } else {
            ""
        }
    ));
    out.push_str(&format!("Items:             {}\n", totals.count));
    out.push_str(&format!(
        "Average Price:     {}\n",
        totals.average_price.format_with_symbol(currency_symbol)
    ));
    out.push_str(&format!(
        "Highest Price:     {}\n",
        totals.max_price.format_with_symbol(currency_symbol)
    ));

    out
}
