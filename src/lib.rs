//! spendbook - personal expense ledger
//!
//! This library provides the core functionality for the spendbook CLI:
//! an ordered collection of expense records plus a single income scalar,
//! derived totals, delimited-text persistence, remote sheet import, and
//! CSV/text/workbook export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expense records, the ledger)
//! - `storage`: Delimited-text file storage layer
//! - `services`: Business logic layer
//! - `remote`: Published-sheet fetch and tolerant parsing
//! - `export`: CSV, text, and workbook payloads
//! - `display`: Terminal rendering
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendbook::config::{paths::SpendbookPaths, settings::Settings};
//! use spendbook::services::LedgerService;
//! use spendbook::storage::Store;
//!
//! let paths = SpendbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = Store::new(paths)?;
//! let ledger = LedgerService::new(&store).load();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod remote;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
