//! Income repository
//!
//! The income scalar lives in its own one-column, one-row artifact with
//! the header `Income`. It is deliberately independent of the expense
//! table; the two artifacts are not written transactionally.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;

use super::file_io::{read_text_optional, remove_file_if_exists, write_text_atomic};

/// Repository for the income artifact
pub struct IncomeRepository {
    path: PathBuf,
    income: RwLock<Money>,
}

impl IncomeRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            income: RwLock::new(Money::zero()),
        }
    }

    /// Path of the backing artifact
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the income value from disk; a missing artifact means zero
    pub fn load(&self) -> LedgerResult<()> {
        let loaded = match read_text_optional(&self.path)? {
            Some(contents) => parse_income_csv(&contents)?,
            None => Money::zero(),
        };

        let mut income = self
            .income
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *income = loaded;
        Ok(())
    }

    /// Save the income value to disk
    pub fn save(&self) -> LedgerResult<()> {
        let income = self
            .income
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let contents = format!("Income\n{}\n", income.to_decimal_string());
        write_text_atomic(&self.path, &contents)
    }

    /// Get the current income value
    pub fn get(&self) -> LedgerResult<Money> {
        let income = self
            .income
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(*income)
    }

    /// Set the income value
    pub fn set(&self, value: Money) -> LedgerResult<()> {
        let mut income = self
            .income
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *income = value;
        Ok(())
    }

    /// Reset to zero and delete the backing artifact
    pub fn clear(&self) -> LedgerResult<bool> {
        self.set(Money::zero())?;
        remove_file_if_exists(&self.path)
    }
}

/// Parse the one-row income artifact: header line, then the amount
fn parse_income_csv(contents: &str) -> LedgerResult<Money> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());

    for result in rdr.records() {
        let row = result?;
        if let Some(cell) = row.get(0) {
            if let Ok(value) = Money::parse(cell) {
                return Ok(value);
            }
        }
    }

    Err(LedgerError::Storage(format!(
        "No readable income value in artifact: {:?}",
        contents.lines().next().unwrap_or("")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("income.csv");

        {
            let repo = IncomeRepository::new(path.clone());
            repo.set(Money::from_minor(100_000)).unwrap();
            repo.save().unwrap();
        }

        {
            let repo = IncomeRepository::new(path);
            repo.load().unwrap();
            assert_eq!(repo.get().unwrap().minor(), 100_000);
        }
    }

    #[test]
    fn test_artifact_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("income.csv");

        let repo = IncomeRepository::new(path.clone());
        repo.set(Money::from_minor(100_000)).unwrap();
        repo.save().unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Income\n1000.00\n");
    }

    #[test]
    fn test_load_missing_file_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.csv"));

        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), Money::zero());
    }

    #[test]
    fn test_load_corrupt_artifact_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("income.csv");
        std::fs::write(&path, "Income\nnot-a-number\n").unwrap();

        let repo = IncomeRepository::new(path);
        assert!(repo.load().is_err());
    }

    #[test]
    fn test_clear_removes_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("income.csv");

        let repo = IncomeRepository::new(path.clone());
        repo.set(Money::from_minor(100_000)).unwrap();
        repo.save().unwrap();

        assert!(repo.clear().unwrap());
        assert!(!path.exists());
        assert_eq!(repo.get().unwrap(), Money::zero());
    }
}
