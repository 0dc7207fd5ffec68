//! CSV rendering for screening exports
//!
//! The output is meant to open directly in spreadsheet software used by the
//! clinic: a UTF-8 byte-order mark, a fixed Thai header line, and every data
//! field quoted. Dates use the Thai short form with the Buddhist-era year.

use crate::domain::{ExportRow, HearscreenError, Result};
use chrono::{Datelike, NaiveDate};
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Byte-order mark prefixed to every export
pub const BOM: &str = "\u{FEFF}";

/// Header line, written verbatim
pub const HEADER: &str = "HN,วันเกิด,วันที่ตรวจ,หูซ้าย,หูขวา";

/// Placeholder for a missing birth date
const MISSING_DATE: &str = "-";

/// Offset from the Gregorian to the Buddhist-era year
const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Formats a date as `d/m/yyyy` with the Buddhist-era year, no zero padding
pub fn thai_date(date: NaiveDate) -> String {
    format!(
        "{}/{}/{}",
        date.day(),
        date.month(),
        date.year() + BUDDHIST_ERA_OFFSET
    )
}

/// Renders rows into the export byte stream
///
/// Zero rows produce the BOM and header line only.
pub fn render_csv(rows: &[ExportRow]) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(64 + rows.len() * 48);
    buffer.extend_from_slice(BOM.as_bytes());
    buffer.extend_from_slice(HEADER.as_bytes());
    buffer.push(b'\n');

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buffer);

    for row in rows {
        let birth_date = row
            .birth_date
            .map(thai_date)
            .unwrap_or_else(|| MISSING_DATE.to_string());
        writer.write_record([
            row.hn.as_str(),
            birth_date.as_str(),
            thai_date(row.exam_date).as_str(),
            row.left_ear_result.as_str(),
            row.right_ear_result.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| HearscreenError::Io(format!("Failed to flush CSV output: {}", e.error())))
}
