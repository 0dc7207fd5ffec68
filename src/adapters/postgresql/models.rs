//! PostgreSQL row models
//!
//! Rows come back from `tokio_postgres` untyped; these structures read the
//! columns by name and convert them into domain types. A stored value that
//! no longer parses (e.g. a result outside PASS/FAIL written by another
//! tool) surfaces as a database error rather than a panic.

use crate::domain::screening::EarResult;
use crate::domain::{ExportRow, HearscreenError, Hn, Result, ResultCounts, Screening};
use chrono::NaiveDate;
use tokio_postgres::Row;

/// Screening row as stored in `chackear_hearing_screenings`
#[derive(Debug, Clone)]
pub struct PostgreSQLScreening {
    pub id: i64,
    pub hn: String,
    pub exam_date: NaiveDate,
    pub left_ear_result: String,
    pub right_ear_result: String,
}

impl PostgreSQLScreening {
    /// Read the screening columns from a row
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            id: column(row, "id")?,
            hn: column(row, "hn")?,
            exam_date: column(row, "exam_date")?,
            left_ear_result: column(row, "left_ear_result")?,
            right_ear_result: column(row, "right_ear_result")?,
        })
    }

    /// Convert to the domain screening
    pub fn to_domain(&self) -> Result<Screening> {
        Ok(Screening {
            id: self.id,
            hn: stored_hn(&self.hn)?,
            exam_date: self.exam_date,
            left_ear_result: stored_result(&self.left_ear_result)?,
            right_ear_result: stored_result(&self.right_ear_result)?,
        })
    }
}

/// Screening joined with its patient's birth date
#[derive(Debug, Clone)]
pub struct PostgreSQLExportRow {
    pub screening: PostgreSQLScreening,
    pub birth_date: Option<NaiveDate>,
}

impl PostgreSQLExportRow {
    pub fn from_row(row: &Row) -> Result<Self> {
        Ok(Self {
            screening: PostgreSQLScreening::from_row(row)?,
            birth_date: column(row, "birth_date")?,
        })
    }

    pub fn to_domain(&self) -> Result<ExportRow> {
        let screening = self.screening.to_domain()?;
        Ok(ExportRow {
            id: screening.id,
            hn: screening.hn,
            birth_date: self.birth_date,
            exam_date: screening.exam_date,
            left_ear_result: screening.left_ear_result,
            right_ear_result: screening.right_ear_result,
        })
    }
}

/// Reads the single-row output of the aggregate counts query
pub fn counts_from_row(row: &Row) -> Result<ResultCounts> {
    Ok(ResultCounts {
        total: column(row, "total")?,
        both_pass: column(row, "both_pass")?,
        left_pass: column(row, "left_pass")?,
        left_fail: column(row, "left_fail")?,
        right_pass: column(row, "right_pass")?,
        right_fail: column(row, "right_fail")?,
    })
}

fn column<'a, T>(row: &'a Row, name: &str) -> Result<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get(name).map_err(|e| {
        HearscreenError::Database(format!("Failed to read column '{}': {}", name, e))
    })
}

fn stored_hn(value: &str) -> Result<Hn> {
    Hn::new(value).map_err(|e| HearscreenError::Database(format!("Stored HN is invalid: {e}")))
}

fn stored_result(value: &str) -> Result<EarResult> {
    value
        .parse()
        .map_err(|e| HearscreenError::Database(format!("Stored ear result is invalid: {e}")))
}
