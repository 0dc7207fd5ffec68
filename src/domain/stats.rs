//! Raw result counters over a set of screenings

use super::screening::{EarResult, Screening};

/// Counters produced by one aggregation pass
///
/// The PostgreSQL adapter fills this from a single `COUNT(*) FILTER` query;
/// in-process stores use [`ResultCounts::tally`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResultCounts {
    pub total: i64,
    pub both_pass: i64,
    pub left_pass: i64,
    pub left_fail: i64,
    pub right_pass: i64,
    pub right_fail: i64,
}

impl ResultCounts {
    /// Counts the given screenings
    pub fn tally<'a>(screenings: impl IntoIterator<Item = &'a Screening>) -> Self {
        screenings
            .into_iter()
            .fold(Self::default(), |mut counts, screening| {
                counts.total += 1;
                if screening.is_pass() {
                    counts.both_pass += 1;
                }
                match screening.left_ear_result {
                    EarResult::Pass => counts.left_pass += 1,
                    EarResult::Fail => counts.left_fail += 1,
                }
                match screening.right_ear_result {
                    EarResult::Pass => counts.right_pass += 1,
                    EarResult::Fail => counts.right_fail += 1,
                }
                counts
            })
    }

    /// Screenings with at least one ear not passing
    ///
    /// Defined by subtraction, so `both_pass + at_least_one_fail == total`.
    pub fn at_least_one_fail(&self) -> i64 {
        self.total - self.both_pass
    }
}
