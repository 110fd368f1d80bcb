//! Ledger model and derived totals
//!
//! The ledger is the in-memory pairing of the expense records with the
//! single income scalar. Totals are never stored; `compute_totals` is a
//! pure function of the current state.

use serde::{Deserialize, Serialize};

use super::expense::ExpenseRecord;
use super::money::Money;

/// In-memory ledger state: ordered expense records plus the income scalar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Expense records in insertion order
    #[serde(default)]
    pub records: Vec<ExpenseRecord>,

    /// Non-negative income, independent of the records
    #[serde(default)]
    pub income: Money,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Derived aggregates over a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Sum of all record prices
    pub total_expenses: Money,

    /// Income minus total expenses; may be negative
    pub remaining_balance: Money,

    /// Mean record price; zero for an empty ledger
    pub average_price: Money,

    /// Largest record price; zero for an empty ledger
    pub max_price: Money,

    /// Number of records
    pub count: usize,
}

/// Compute the derived totals for a ledger
///
/// Pure function: no state is read or written beyond the argument. An
/// empty ledger yields all-zero totals.
pub fn compute_totals(ledger: &Ledger) -> Totals {
    let count = ledger.records.len();
    let total_expenses: Money = ledger.records.iter().map(|r| r.price).sum();

    let average_price = if count == 0 {
        Money::zero()
    } else {
        Money::from_minor(total_expenses.minor() / count as i64)
    };

    let max_price = ledger
        .records
        .iter()
        .map(|r| r.price)
        .max()
        .unwrap_or_else(Money::zero);

    Totals {
        total_expenses,
        remaining_balance: ledger.income - total_expenses,
        average_price,
        max_price,
        count,
    }
}
