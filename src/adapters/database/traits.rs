//! Database abstraction traits
//!
//! This module defines the trait that storage adapters must implement to back
//! the screening API.

use crate::domain::{
    DateRange, ExportRow, NewScreening, Result, ResultCounts, Screening, ScreeningUpdate,
};
use async_trait::async_trait;

/// Storage for patients and screenings
///
/// Implementations report uniqueness collisions as
/// [`HearscreenError::Duplicate`](crate::domain::HearscreenError::Duplicate)
/// and never expose driver error types.
#[async_trait]
pub trait ScreeningStore: Send + Sync {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    /// Test the database connection
    ///
    /// # Errors
    ///
    /// Returns an error if the connection test fails.
    async fn test_connection(&self) -> Result<()>;

    /// Create tables and indexes if they are missing
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    async fn ensure_schema(&self) -> Result<()>;

    /// Upsert the patient (insert-or-ignore on HN), then insert the screening
    ///
    /// The two statements are independent; a failure between them leaves
    /// only the patient row behind.
    ///
    /// # Errors
    ///
    /// Returns `Duplicate` if a screening already exists for the HN and exam date.
    async fn save_screening(&self, screening: &NewScreening) -> Result<Screening>;

    /// Fetch one screening
    async fn get_screening(&self, id: i64) -> Result<Option<Screening>>;

    /// Replace the exam date and results of a screening
    ///
    /// Returns `None` when no screening has this id.
    async fn update_screening(&self, id: i64, update: &ScreeningUpdate)
        -> Result<Option<Screening>>;

    /// Delete a screening, returning whether a row was removed
    async fn delete_screening(&self, id: i64) -> Result<bool>;

    /// Case-insensitive substring search on HN
    ///
    /// Ordered by exam date descending, then id descending.
    async fn search_by_hn(&self, fragment: &str) -> Result<Vec<Screening>>;

    /// Aggregate result counters for screenings in the range
    async fn count_results(&self, range: &DateRange) -> Result<ResultCounts>;

    /// All screenings in the range, exam date descending then id descending
    async fn list_screenings(&self, range: &DateRange) -> Result<Vec<Screening>>;

    /// Screenings in the range joined with patient birth dates
    ///
    /// Ordered by exam date descending, then id descending.
    async fn export_rows(&self, range: &DateRange) -> Result<Vec<ExportRow>>;
}
