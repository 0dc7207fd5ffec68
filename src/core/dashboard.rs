//! Dashboard aggregation
//!
//! Counters and the activity list are fetched concurrently from the store and
//! assembled into the shape the dashboard renders.

use crate::adapters::database::ScreeningStore;
use crate::domain::{DateRange, Result, ResultCounts, Screening};
use serde::Serialize;

/// Aggregated results for a date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub summary: Summary,
    pub ear_stats: EarStats,
    /// Every matching screening, newest exam first
    pub recent_activity: Vec<Screening>,
}

/// Screenings in range, split by whether both ears passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: i64,
    pub pass: i64,
    /// At least one ear not passing
    pub fail: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EarStats {
    pub left: PassFail,
    pub right: PassFail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassFail {
    pub pass: i64,
    pub fail: i64,
}

impl DashboardStats {
    pub fn from_parts(counts: ResultCounts, recent_activity: Vec<Screening>) -> Self {
        Self {
            summary: Summary {
                total: counts.total,
                pass: counts.both_pass,
                fail: counts.at_least_one_fail(),
            },
            ear_stats: EarStats {
                left: PassFail {
                    pass: counts.left_pass,
                    fail: counts.left_fail,
                },
                right: PassFail {
                    pass: counts.right_pass,
                    fail: counts.right_fail,
                },
            },
            recent_activity,
        }
    }
}

/// Computes dashboard statistics for the range
///
/// # Errors
///
/// Returns the first store error if either query fails.
pub async fn dashboard_stats(
    store: &dyn ScreeningStore,
    range: &DateRange,
) -> Result<DashboardStats> {
    let (counts, recent) = futures::try_join!(
        store.count_results(range),
        store.list_screenings(range)
    )?;

    tracing::debug!(
        total = counts.total,
        listed = recent.len(),
        bounded = range.is_bounded(),
        "Dashboard statistics computed"
    );

    Ok(DashboardStats::from_parts(counts, recent))
}
