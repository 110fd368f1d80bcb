//! Expense table repository
//!
//! Persists the expense records as a four-column delimited table
//! (`Date,Item,Price,Note`) with one header row and ISO-formatted dates.
//! The whole table is rewritten on every mutation.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::warn;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date_flexible, ExpenseRecord, Money, NOTE_PLACEHOLDER};

use super::file_io::{read_text_optional, remove_file_if_exists, write_text_atomic};

const HEADERS: [&str; 4] = ["Date", "Item", "Price", "Note"];

/// Repository for the expense table artifact
pub struct ExpenseRepository {
    path: PathBuf,
    records: RwLock<Vec<ExpenseRecord>>,
}

impl ExpenseRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Path of the backing artifact
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load records from disk
    ///
    /// A missing artifact is an empty table. Individual rows are handled
    /// tolerantly: an unparseable price cell is coerced to zero and a row
    /// whose date cannot be read in any common format is skipped, both
    /// with a warning.
    pub fn load(&self) -> LedgerResult<()> {
        let loaded = match read_text_optional(&self.path)? {
            Some(contents) => read_expense_rows(contents.as_bytes())?,
            None => Vec::new(),
        };

        let mut records = self
            .records
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *records = loaded;
        Ok(())
    }

    /// Save records to disk, rewriting the whole artifact
    pub fn save(&self) -> LedgerResult<()> {
        let records = self
            .records
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_text_atomic(&self.path, &render_expense_csv(&records)?)
    }

    /// Get all records in insertion order
    pub fn get_all(&self) -> LedgerResult<Vec<ExpenseRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.clone())
    }

    /// Append one record
    pub fn append(&self, record: ExpenseRecord) -> LedgerResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.push(record);
        Ok(())
    }

    /// Replace the whole collection
    pub fn replace_all(&self, new_records: Vec<ExpenseRecord>) -> LedgerResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *records = new_records;
        Ok(())
    }

    /// Drop all records and delete the backing artifact
    pub fn clear(&self) -> LedgerResult<bool> {
        let mut records = self
            .records
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.clear();
        remove_file_if_exists(&self.path)
    }
}

/// Parse expense rows from delimited text
///
/// Shared by artifact loading and grid-edit replacement files. Columns are
/// resolved by header name when the header matches, positionally otherwise.
pub fn read_expense_rows<R: Read>(reader: R) -> LedgerResult<Vec<ExpenseRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // Resolve column positions from the header row; fall back to the
    // canonical order when a name is absent.
    let headers = rdr.headers()?.clone();
    let col = |name: &str, fallback: usize| -> usize {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .unwrap_or(fallback)
    };
    let date_col = col("Date", 0);
    let item_col = col("Item", 1);
    let price_col = col("Price", 2);
    let note_col = col("Note", 3);

    let mut records = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let row = result?;

        let date_cell = row.get(date_col).unwrap_or("").trim();
        let date = match parse_date_flexible(date_cell) {
            Some(date) => date,
            None => {
                warn!(row = idx + 1, cell = date_cell, "skipping row with unreadable date");
                continue;
            }
        };

        let item = row.get(item_col).unwrap_or("").trim();
        if item.is_empty() {
            warn!(row = idx + 1, "skipping row with blank item");
            continue;
        }

        let price_cell = row.get(price_col).unwrap_or("").trim();
        let price = Money::parse(price_cell).unwrap_or_else(|_| {
            warn!(row = idx + 1, cell = price_cell, "coercing unreadable price to zero");
            Money::zero()
        });

        let note = row.get(note_col).unwrap_or(NOTE_PLACEHOLDER);

        records.push(ExpenseRecord {
            date,
            item: item.to_string(),
            price,
            note: if note.trim().is_empty() {
                NOTE_PLACEHOLDER.to_string()
            } else {
                note.trim().to_string()
            },
        });
    }

    Ok(records)
}

/// Render records as the four-column artifact text
fn render_expense_csv(records: &[ExpenseRecord]) -> LedgerResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(HEADERS)?;
    for record in records {
        wtr.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.item.clone(),
            record.price.to_decimal_string(),
            record.note.clone(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| LedgerError::Storage(format!("Failed to flush table: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| LedgerError::Storage(format!("Table is not valid UTF-8: {}", e)))
}
