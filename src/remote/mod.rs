//! Remote sheet import
//!
//! Fetches a publicly shared spreadsheet as delimited text and feeds it
//! through the tolerant parser. The fetch is a single synchronous request
//! with a short fixed timeout; failure leaves the local ledger untouched.

pub mod parser;

pub use parser::{parse_sheet, RemoteImport};

use std::time::Duration;

use crate::error::{LedgerError, LedgerResult};

/// Rewrite a Google Sheets `/edit` URL into its CSV export form
///
/// Any other URL is returned unchanged and is expected to serve delimited
/// text directly.
pub fn export_url(url: &str) -> String {
    if url.contains("docs.google.com/spreadsheets") {
        if let Some(prefix) = url.split("/edit").next() {
            if prefix != url {
                return format!("{}/export?format=csv", prefix);
            }
        }
    }
    url.to_string()
}

/// Fetch the sheet body as text
pub fn fetch_sheet_text(url: &str, timeout: Duration) -> LedgerResult<String> {
    let url = export_url(url);

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LedgerError::RemoteFetch(format!("could not build HTTP client: {}", e)))?;

    let response = client.get(&url).send().map_err(|e| {
        if e.is_timeout() {
            LedgerError::RemoteFetch(format!(
                "timed out after {}s fetching {}",
                timeout.as_secs(),
                url
            ))
        } else {
            LedgerError::RemoteFetch(format!("could not reach {}: {}", url, e))
        }
    })?;

    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(LedgerError::RemoteFetch(format!(
            "the sheet is not shared publicly (HTTP {}) — enable link sharing and try again",
            status.as_u16()
        )));
    }
    if !status.is_success() {
        return Err(LedgerError::RemoteFetch(format!(
            "sheet returned HTTP {}",
            status.as_u16()
        )));
    }

    response
        .text()
        .map_err(|e| LedgerError::RemoteFetch(format!("could not read sheet body: {}", e)))
}

/// Fetch and parse a remote sheet in one step
pub fn pull_sheet(url: &str, timeout: Duration) -> LedgerResult<RemoteImport> {
    let text = fetch_sheet_text(url, timeout)?;
    parse_sheet(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_edit_url_rewritten() {
        let url = "https://docs.google.com/spreadsheets/d/abc123/edit#gid=0";
        assert_eq!(
            export_url(url),
            "https://docs.google.com/spreadsheets/d/abc123/export?format=csv"
        );
    }

    #[test]
    fn test_plain_url_passes_through() {
        let url = "https://example.com/budget.csv";
        assert_eq!(export_url(url), url);
    }

    #[test]
    fn test_google_export_url_passes_through() {
        let url = "https://docs.google.com/spreadsheets/d/abc123/export?format=csv";
        assert_eq!(export_url(url), url);
    }
}
