//! Screening domain models
//!
//! A screening is one OAE exam for one patient: a PASS or FAIL result per ear
//! on a given exam date. Patients are keyed by [`Hn`] and carry only a birth
//! date.

use super::errors::HearscreenError;
use super::ids::Hn;
use super::result::Result;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire format for calendar dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of an OAE test for one ear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EarResult {
    /// Emissions detected
    Pass,
    /// Refer for re-test
    Fail,
}

impl EarResult {
    /// Returns the stored/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            EarResult::Pass => "PASS",
            EarResult::Fail => "FAIL",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, EarResult::Pass)
    }
}

impl fmt::Display for EarResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EarResult {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PASS" => Ok(EarResult::Pass),
            "FAIL" => Ok(EarResult::Fail),
            other => Err(format!("Invalid ear result '{other}'. Must be PASS or FAIL")),
        }
    }
}

/// A stored screening record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screening {
    /// Auto-incremented identifier
    pub id: i64,

    /// Patient hospital number
    pub hn: Hn,

    /// Date the exam took place
    pub exam_date: NaiveDate,

    /// Left ear outcome
    pub left_ear_result: EarResult,

    /// Right ear outcome
    pub right_ear_result: EarResult,
}

impl Screening {
    /// Both ears passed
    pub fn is_pass(&self) -> bool {
        self.left_ear_result.is_pass() && self.right_ear_result.is_pass()
    }
}

/// A validated screening submission
///
/// Saving one upserts the patient (`hn`, `birth_date`) and inserts the exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewScreening {
    pub hn: Hn,
    pub birth_date: NaiveDate,
    pub exam_date: NaiveDate,
    pub left_ear_result: EarResult,
    pub right_ear_result: EarResult,
}

/// Replacement values for an existing screening
///
/// The HN of a screening never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningUpdate {
    pub exam_date: NaiveDate,
    pub left_ear_result: EarResult,
    pub right_ear_result: EarResult,
}

/// A screening joined with its patient, as exported to CSV
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub id: i64,
    pub hn: Hn,
    /// Absent only if the patient row is missing
    pub birth_date: Option<NaiveDate>,
    pub exam_date: NaiveDate,
    pub left_ear_result: EarResult,
    pub right_ear_result: EarResult,
}

/// Parses a required date field
///
/// Accepts `YYYY-MM-DD`, and RFC 3339 timestamps (clients echo records back
/// with whatever the browser produced), keeping only the calendar date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(HearscreenError::Validation(format!("{field} is required")));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .map_err(|_| {
            HearscreenError::Validation(format!(
                "{field} must be a date in YYYY-MM-DD format, got '{value}'"
            ))
        })
}

/// Parses a required ear-result field
pub fn parse_ear_result(field: &str, value: &str) -> Result<EarResult> {
    if value.trim().is_empty() {
        return Err(HearscreenError::Validation(format!("{field} is required")));
    }
    value
        .parse()
        .map_err(|e: String| HearscreenError::Validation(format!("{field}: {e}")))
}
