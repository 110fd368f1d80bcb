//! Expense record model
//!
//! A single ledger row: date, item name, price, and an optional note.
//! Item names are normalized to title case and blank notes are replaced
//! with a sentinel at construction time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Sentinel stored when a record has no note
pub const NOTE_PLACEHOLDER: &str = "N/A";

/// A single expense entry in the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// Display name of the purchased item, title-cased
    pub item: String,

    /// Non-negative amount paid
    pub price: Money,

    /// Free-text note; `"N/A"` when the user left it blank
    #[serde(default)]
    pub note: String,
}

impl ExpenseRecord {
    /// Create a record, normalizing the item to title case and substituting
    /// the note sentinel for blank notes
    pub fn new(date: NaiveDate, item: &str, price: Money, note: &str) -> Self {
        let note = note.trim();
        Self {
            date,
            item: title_case(item.trim()),
            price,
            note: if note.is_empty() {
                NOTE_PLACEHOLDER.to_string()
            } else {
                note.to_string()
            },
        }
    }

    /// Validate the invariants every stored record must satisfy
    ///
    /// Stored records may carry a zero price (corrupt cells are coerced to
    /// zero on load); a negative price or blank item is always rejected.
    pub fn validate(&self) -> LedgerResult<()> {
        if self.item.trim().is_empty() {
            return Err(LedgerError::blank_item());
        }
        if self.price.is_negative() {
            return Err(LedgerError::negative_amount("price"));
        }
        Ok(())
    }
}

/// Title-case a string: first letter of each whitespace-separated word
/// uppercased, the rest lowercased, words joined by single spaces
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a date cell, trying the configured ISO form first and then the
/// formats commonly produced by spreadsheet exports
pub fn parse_date_flexible(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%m-%d-%Y",
        "%d-%m-%Y",
    ];

    for format in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_new_normalizes_item() {
        let rec = ExpenseRecord::new(d(2024, 1, 1), "  milk  ", Money::from_minor(5000), "daily");
        assert_eq!(rec.item, "Milk");
        assert_eq!(rec.note, "daily");
    }

    #[test]
    fn test_new_substitutes_note_placeholder() {
        let rec = ExpenseRecord::new(d(2024, 1, 1), "milk", Money::from_minor(5000), "   ");
        assert_eq!(rec.note, NOTE_PLACEHOLDER);
    }

    #[test]
    fn test_validate() {
        let ok = ExpenseRecord::new(d(2024, 1, 1), "milk", Money::from_minor(5000), "");
        assert!(ok.validate().is_ok());

        let zero_price = ExpenseRecord::new(d(2024, 1, 1), "milk", Money::zero(), "");
        assert!(zero_price.validate().is_ok());

        let mut negative = ok.clone();
        negative.price = Money::from_minor(-1);
        assert!(negative.validate().is_err());

        let mut blank = ok;
        blank.item = "  ".to_string();
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("milk"), "Milk");
        assert_eq!(title_case("fresh milk"), "Fresh Milk");
        assert_eq!(title_case("MILK AND BREAD"), "Milk And Bread");
        assert_eq!(title_case("  spaced   out  "), "Spaced Out");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_parse_date_flexible() {
        assert_eq!(parse_date_flexible("2024-01-15"), Some(d(2024, 1, 15)));
        assert_eq!(parse_date_flexible("01/15/2024"), Some(d(2024, 1, 15)));
        assert_eq!(parse_date_flexible(" 2024/01/15 "), Some(d(2024, 1, 15)));
        assert_eq!(parse_date_flexible("not a date"), None);
    }
}
