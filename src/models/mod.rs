//! Core data models
//!
//! The in-memory representation of the ledger: money amounts, expense
//! records, and the ledger with its derived totals.

pub mod expense;
pub mod ledger;
pub mod money;

pub use expense::{parse_date_flexible, title_case, ExpenseRecord, NOTE_PLACEHOLDER};
pub use ledger::{compute_totals, Ledger, Totals};
pub use money::{Money, MoneyParseError};
