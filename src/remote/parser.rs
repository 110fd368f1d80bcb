//! Tolerant parser for published-sheet text
//!
//! A publicly shared sheet arrives as delimited text with no fixed shape:
//! people park their income in a labeled row near the top, name the
//! columns loosely, and sometimes not at all. The parser locates an
//! income cell and a header row by keyword scan, then resolves columns in
//! priority order: exact header name, fuzzy keyword containment,
//! positional fallback.

use csv::StringRecord;
use tracing::warn;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date_flexible, ExpenseRecord, Money, NOTE_PLACEHOLDER};

const INCOME_KEYWORDS: [&str; 3] = ["income", "salary", "earning"];
const HEADER_KEYWORDS: [&str; 4] = ["date", "item", "price", "amount"];

/// Result of parsing a remote sheet
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteImport {
    /// Expense rows found below the header
    pub records: Vec<ExpenseRecord>,
    /// Income located by keyword scan, if any row carried one
    pub income: Option<Money>,
}

/// Resolved column positions for the four record fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    date: Option<usize>,
    item: Option<usize>,
    price: Option<usize>,
    note: Option<usize>,
}

/// Parse sheet text into records and an optional income value
pub fn parse_sheet(text: &str) -> LedgerResult<RemoteImport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let rows: Vec<StringRecord> = rdr
        .records()
        .collect::<Result<_, _>>()
        .map_err(|e| LedgerError::SheetParse(format!("unreadable sheet text: {}", e)))?;

    let header_idx = rows.iter().position(|row| is_header_row(row)).ok_or_else(|| {
        LedgerError::SheetParse(
            "no header row containing date/item/price/amount was found".into(),
        )
    })?;

    // Only rows above the header can carry the income label; below it,
    // an expense item like "Salary Advance" would false-match.
    let income = find_income(&rows[..header_idx]);
    let map = map_columns(&rows[header_idx]);

    let mut records = Vec::new();
    for (offset, row) in rows[header_idx + 1..].iter().enumerate() {
        let row_number = header_idx + offset + 2;

        let date = match map.date.and_then(|c| row.get(c)).and_then(parse_date_flexible) {
            Some(date) => date,
            None => {
                warn!(row = row_number, "skipping sheet row with unreadable date");
                continue;
            }
        };

        let item = map.item.and_then(|c| row.get(c)).unwrap_or("").trim();
        if item.is_empty() {
            warn!(row = row_number, "skipping sheet row with blank item");
            continue;
        }

        let price_cell = map.price.and_then(|c| row.get(c)).unwrap_or("").trim();
        let price = Money::parse(price_cell).unwrap_or_else(|_| {
            warn!(row = row_number, cell = price_cell, "coercing unreadable price to zero");
            Money::zero()
        });

        let note = map.note.and_then(|c| row.get(c)).unwrap_or("").trim();

        records.push(ExpenseRecord {
            date,
            item: item.to_string(),
            price,
            note: if note.is_empty() {
                NOTE_PLACEHOLDER.to_string()
            } else {
                note.to_string()
            },
        });
    }

    Ok(RemoteImport { records, income })
}

/// Scan for a row labeled with an income keyword and return the first
/// numeric cell in it. Rows whose label matches but carry no readable
/// number are passed over.
fn find_income(rows: &[StringRecord]) -> Option<Money> {
    for row in rows {
        let labeled = row.iter().any(|cell| {
            let cell = cell.to_lowercase();
            INCOME_KEYWORDS.iter().any(|k| cell.contains(k))
        });
        if !labeled {
            continue;
        }

        for cell in row.iter() {
            // Cells with letters are labels ("Monthly Income"), not values
            if cell.chars().any(|c| c.is_ascii_alphabetic()) {
                continue;
            }
            if let Ok(value) = Money::parse(cell) {
                if !value.is_negative() {
                    return Some(value);
                }
            }
        }
    }

    None
}

/// A header row names a date column, or matches at least two distinct
/// keywords; a lone amount-like cell is not enough (income labels often
/// say "amount" too)
fn is_header_row(row: &StringRecord) -> bool {
    let cells: Vec<String> = row.iter().map(|c| c.trim().to_lowercase()).collect();

    if cells.iter().any(|c| c.contains("date")) {
        return true;
    }

    let matched = HEADER_KEYWORDS
        .iter()
        .filter(|k| cells.iter().any(|c| c.contains(*k)))
        .count();
    matched >= 2
}

/// Resolve column positions: exact names, then fuzzy keywords over
/// unclaimed columns, then the canonical positions 0..3
fn map_columns(header: &StringRecord) -> ColumnMap {
    let cells: Vec<String> = header.iter().map(|c| c.trim().to_lowercase()).collect();
    let mut claimed = vec![false; cells.len()];
    let mut map = ColumnMap {
        date: None,
        item: None,
        price: None,
        note: None,
    };

    // Tier 1: exact header names
    for (idx, cell) in cells.iter().enumerate() {
        let slot = match cell.as_str() {
            "date" => &mut map.date,
            "item" => &mut map.item,
            "price" => &mut map.price,
            "note" => &mut map.note,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(idx);
            claimed[idx] = true;
        }
    }

    // Tier 2: fuzzy keyword containment
    for (idx, cell) in cells.iter().enumerate() {
        if claimed[idx] {
            continue;
        }
        let slot = if cell.contains("date") {
            &mut map.date
        } else if ["item", "description", "particular"].iter().any(|k| cell.contains(k)) {
            &mut map.item
        } else if ["price", "amount", "cost"].iter().any(|k| cell.contains(k)) {
            &mut map.price
        } else if ["note", "memo", "remark", "detail"].iter().any(|k| cell.contains(k)) {
            &mut map.note
        } else {
            continue;
        };
        if slot.is_none() {
            *slot = Some(idx);
            claimed[idx] = true;
        }
    }

    // Tier 3: positional fallback for whatever is still unresolved
    let mut fallback = |slot: &mut Option<usize>, canonical: usize| {
        if slot.is_none() && canonical < cells.len() && !claimed[canonical] {
            *slot = Some(canonical);
            claimed[canonical] = true;
        }
    };
    fallback(&mut map.date, 0);
    fallback(&mut map.item, 1);
    fallback(&mut map.price, 2);
    fallback(&mut map.note, 3);

    map
}
