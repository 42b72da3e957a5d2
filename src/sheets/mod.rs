//! Spreadsheet access.
//!
//! Handlers only see [`SheetAppender`]; the Google implementation lives in
//! [`google`] and is constructed once at startup and shared across workers.

pub mod error;
pub mod google;
pub mod token;

use async_trait::async_trait;

pub use error::AppendFailure;
pub use google::GoogleSheetsClient;

/// Append-only access to one spreadsheet.
#[async_trait]
pub trait SheetAppender: Send + Sync {
    /// Append exactly one row to the end of `sheet`'s used range.
    /// Not idempotent: each call writes a new row.
    async fn append_row(&self, sheet: &str, values: Vec<String>) -> Result<(), AppendFailure>;

    /// Titles of every tab in the spreadsheet.
    async fn sheet_titles(&self) -> Result<Vec<String>, AppendFailure>;
}

/// A1 range covering `width` columns of `sheet`, e.g. `Contact Form!A:C`.
pub fn append_range(sheet: &str, width: usize) -> String {
    format!("{sheet}!A:{}", column_letter(width.max(1)))
}

/// 1-based column index to its A1 letter (1 → A, 27 → AA).
pub fn column_letter(mut index: usize) -> String {
    let mut letters = Vec::new();
    while index > 0 {
        let rem = (index - 1) % 26;
        letters.push(b'A' + rem as u8);
        index = (index - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
