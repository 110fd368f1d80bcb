//! Business logic layer
//!
//! Services sit between the CLI handlers and the storage repositories.

pub mod ledger;

pub use ledger::{LedgerService, NewExpense};
