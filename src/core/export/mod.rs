//! Admin CSV export
//!
//! Produces the spreadsheet download of screenings joined with patient
//! birth dates, for the whole history or a date range.

pub mod csv;

pub use self::csv::{render_csv, thai_date};

use crate::adapters::database::ScreeningStore;
use crate::domain::{DateRange, Result, Session};

/// Default download name when the export is not bounded on both sides
pub const DEFAULT_FILENAME: &str = "eare-data.csv";

/// A rendered export ready to be sent or written
#[derive(Debug, Clone)]
pub struct CsvExport {
    /// Suggested attachment filename
    pub filename: String,

    /// BOM, header and rows
    pub body: Vec<u8>,

    /// Number of data rows
    pub row_count: usize,
}

/// Attachment filename for the range
///
/// `eare-data-<start>-to-<end>.csv` when both bounds are present, otherwise
/// [`DEFAULT_FILENAME`].
pub fn export_filename(range: &DateRange) -> String {
    match (range.start(), range.end()) {
        (Some(start), Some(end)) => format!("eare-data-{start}-to-{end}.csv"),
        _ => DEFAULT_FILENAME.to_string(),
    }
}

/// Exports screenings in the range; admin only
///
/// # Errors
///
/// `Forbidden` for non-admin sessions, or any store error.
pub async fn export_csv(
    store: &dyn ScreeningStore,
    session: &Session,
    range: &DateRange,
) -> Result<CsvExport> {
    session.require_admin()?;

    let rows = store.export_rows(range).await?;
    let body = render_csv(&rows)?;

    tracing::info!(
        count = rows.len(),
        user = %session.user.username,
        bytes = body.len(),
        "CSV export generated"
    );

    Ok(CsvExport {
        filename: export_filename(range),
        body,
        row_count: rows.len(),
    })
}
