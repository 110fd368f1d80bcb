//! Storage layer for spendbook
//!
//! Delimited-text file storage with atomic full-overwrite writes. Each
//! backing artifact gets its own repository; the `Store` aggregates them.

pub mod expenses;
pub mod file_io;
pub mod income;

pub use expenses::{read_expense_rows, ExpenseRepository};
pub use file_io::{read_text_optional, remove_file_if_exists, write_text_atomic};
pub use income::IncomeRepository;

use crate::config::paths::SpendbookPaths;
use crate::error::LedgerError;

/// Main storage coordinator that provides access to all repositories
pub struct Store {
    paths: SpendbookPaths,
    pub expenses: ExpenseRepository,
    pub income: IncomeRepository,
}

impl Store {
    /// Create a new Store instance
    pub fn new(paths: SpendbookPaths) -> Result<Self, LedgerError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            income: IncomeRepository::new(paths.income_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendbookPaths {
        &self.paths
    }

    /// Load all artifacts from disk
    pub fn load_all(&self) -> Result<(), LedgerError> {
        self.expenses.load()?;
        self.income.load()?;
        Ok(())
    }

    /// Save all artifacts to disk
    pub fn save_all(&self) -> Result<(), LedgerError> {
        self.expenses.save()?;
        self.income.save()?;
        Ok(())
    }

    /// Drop all state and delete every backing artifact
    pub fn clear_all(&self) -> Result<(), LedgerError> {
        self.expenses.clear()?;
        self.income.clear()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_store_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(store.load_all().is_ok());
    }

    #[test]
    fn test_clear_all_removes_artifacts() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Store::new(paths).unwrap();

        store.income.set(crate::models::Money::from_minor(1000)).unwrap();
        store.save_all().unwrap();
        assert!(store.paths().income_file().exists());
        assert!(store.paths().expenses_file().exists());

        store.clear_all().unwrap();
        assert!(!store.paths().income_file().exists());
        assert!(!store.paths().expenses_file().exists());
    }
}
