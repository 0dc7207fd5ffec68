//! Inclusive exam-date ranges
//!
//! Used by the dashboard and the CSV export. Either bound may be omitted, in
//! which case the range is open on that side.

use super::errors::HearscreenError;
use super::result::Result;
use super::screening::parse_date;
use chrono::NaiveDate;

/// Inclusive range over exam dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    /// Range matching every date
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Creates a range, rejecting `start > end`
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(HearscreenError::Validation(format!(
                    "startDate ({s}) must not be after endDate ({e})"
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// Builds a range from raw query-string values
    ///
    /// Blank values count as absent.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        let start = non_blank(start)
            .map(|s| parse_date("startDate", s))
            .transpose()?;
        let end = non_blank(end).map(|e| parse_date("endDate", e)).transpose()?;
        Self::new(start, end)
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Whether both bounds are present
    pub fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Whether `date` falls within the range, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 31))).unwrap();
        assert!(range.contains(date(2024, 1, 1)));
        assert!(range.contains(date(2024, 1, 31)));
        assert!(!range.contains(date(2023, 12, 31)));
        assert!(!range.contains(date(2024, 2, 1)));
        assert!(range.is_bounded());
    }

    #[test]
    fn test_open_ended() {
        let range = DateRange::new(Some(date(2024, 1, 1)), None).unwrap();
        assert!(range.contains(date(2030, 1, 1)));
        assert!(!range.contains(date(2023, 1, 1)));
        assert!(!range.is_bounded());
        assert!(DateRange::unbounded().contains(date(1990, 5, 5)));
    }

    #[test]
    fn test_reversed_range_rejected() {
        let result = DateRange::new(Some(date(2024, 2, 1)), Some(date(2024, 1, 1)));
        assert!(matches!(result, Err(HearscreenError::Validation(_))));
    }

    #[test]
    fn test_parse_blank_is_absent() {
        let range = DateRange::parse(Some(""), Some("  ")).unwrap();
        assert_eq!(range, DateRange::unbounded());

        let range = DateRange::parse(Some("2024-01-01"), None).unwrap();
        assert_eq!(range.start(), Some(date(2024, 1, 1)));
        assert_eq!(range.end(), None);
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(DateRange::parse(Some("yesterday"), None).is_err());
    }
}
