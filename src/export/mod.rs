//! Export functionality
//!
//! Pure transformations of the ledger into downloadable payloads; no
//! export mutates state.

pub mod csv;
pub mod text;
pub mod workbook;

pub use csv::export_expenses_csv;
pub use text::export_text_report;
pub use workbook::export_workbook;

use clap::ValueEnum;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Delimited-text table (`Date,Item,Price,Note`)
    Csv,
    /// Plain-text report
    Text,
    /// XLSX workbook with `Expenses` and `Settings` sheets
    Workbook,
}

impl ExportFormat {
    /// Conventional file extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Text => "txt",
            Self::Workbook => "xlsx",
        }
    }
}
