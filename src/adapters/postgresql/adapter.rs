//! PostgreSQL adapter implementing the screening store trait

use crate::adapters::database::traits::ScreeningStore;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::adapters::postgresql::models::{
    counts_from_row, PostgreSQLExportRow, PostgreSQLScreening,
};
use crate::domain::{
    DateRange, ExportRow, NewScreening, Result, ResultCounts, Screening, ScreeningUpdate,
};
use async_trait::async_trait;
use std::sync::Arc;

const SCREENING_COLUMNS: &str = "id, hn, exam_date, left_ear_result, right_ear_result";

/// Inclusive, optionally open-ended exam date filter on `$1` / `$2`
const RANGE_PREDICATE: &str =
    "($1::date IS NULL OR exam_date >= $1::date) AND ($2::date IS NULL OR exam_date <= $2::date)";

/// PostgreSQL implementation of [`ScreeningStore`]
pub struct PostgreSQLAdapter {
    client: Arc<PostgreSQLClient>,
}

impl PostgreSQLAdapter {
    /// Create a new PostgreSQL adapter
    pub fn new(client: PostgreSQLClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Get a reference to the underlying client
    pub fn client(&self) -> &Arc<PostgreSQLClient> {
        &self.client
    }
}

#[async_trait]
impl ScreeningStore for PostgreSQLAdapter {
    fn backend_name(&self) -> &'static str {
        "postgresql"
    }

    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.client.ensure_schema().await
    }

    async fn save_screening(&self, screening: &NewScreening) -> Result<Screening> {
        // Existing patients keep their recorded birth date
        self.client
            .execute(
                "INSERT INTO chackear (hn, birth_date) VALUES ($1, $2) \
                 ON CONFLICT (hn) DO NOTHING",
                &[&screening.hn.as_str(), &screening.birth_date],
            )
            .await?;

        let row = self
            .client
            .query_one(
                &format!(
                    "INSERT INTO chackear_hearing_screenings \
                     (hn, exam_date, left_ear_result, right_ear_result) \
                     VALUES ($1, $2, $3, $4) RETURNING {SCREENING_COLUMNS}"
                ),
                &[
                    &screening.hn.as_str(),
                    &screening.exam_date,
                    &screening.left_ear_result.as_str(),
                    &screening.right_ear_result.as_str(),
                ],
            )
            .await?;

        let saved = PostgreSQLScreening::from_row(&row)?.to_domain()?;
        tracing::debug!(id = saved.id, hn = %saved.hn, "Inserted screening");
        Ok(saved)
    }

    async fn get_screening(&self, id: i64) -> Result<Option<Screening>> {
        let row = self
            .client
            .query_opt(
                &format!(
                    "SELECT {SCREENING_COLUMNS} FROM chackear_hearing_screenings WHERE id = $1"
                ),
                &[&id],
            )
            .await?;

        row.map(|r| PostgreSQLScreening::from_row(&r)?.to_domain())
            .transpose()
    }

    async fn update_screening(
        &self,
        id: i64,
        update: &ScreeningUpdate,
    ) -> Result<Option<Screening>> {
        let row = self
            .client
            .query_opt(
                &format!(
                    "UPDATE chackear_hearing_screenings \
                     SET exam_date = $1, left_ear_result = $2, right_ear_result = $3 \
                     WHERE id = $4 RETURNING {SCREENING_COLUMNS}"
                ),
                &[
                    &update.exam_date,
                    &update.left_ear_result.as_str(),
                    &update.right_ear_result.as_str(),
                    &id,
                ],
            )
            .await?;

        row.map(|r| PostgreSQLScreening::from_row(&r)?.to_domain())
            .transpose()
    }

    async fn delete_screening(&self, id: i64) -> Result<bool> {
        let affected = self
            .client
            .execute(
                "DELETE FROM chackear_hearing_screenings WHERE id = $1",
                &[&id],
            )
            .await?;
        Ok(affected > 0)
    }

    async fn search_by_hn(&self, hn: &str) -> Result<Vec<Screening>> {
        let pattern = format!("%{}%", escape_like(hn));
        let rows = self
            .client
            .query(
                &format!(
                    "SELECT {SCREENING_COLUMNS} FROM chackear_hearing_screenings \
                     WHERE hn ILIKE $1 ESCAPE '\\' \
                     ORDER BY exam_date DESC, id DESC"
                ),
                &[&pattern],
            )
            .await?;

        rows.iter()
            .map(|r| PostgreSQLScreening::from_row(r)?.to_domain())
            .collect()
    }

    async fn count_results(&self, range: &DateRange) -> Result<ResultCounts> {
        let row = self
            .client
            .query_one(
                &format!(
                    "SELECT \
                       COUNT(*) AS total, \
                       COUNT(*) FILTER (WHERE left_ear_result = 'PASS' AND right_ear_result = 'PASS') AS both_pass, \
                       COUNT(*) FILTER (WHERE left_ear_result = 'PASS') AS left_pass, \
                       COUNT(*) FILTER (WHERE left_ear_result = 'FAIL') AS left_fail, \
                       COUNT(*) FILTER (WHERE right_ear_result = 'PASS') AS right_pass, \
                       COUNT(*) FILTER (WHERE right_ear_result = 'FAIL') AS right_fail \
                     FROM chackear_hearing_screenings WHERE {RANGE_PREDICATE}"
                ),
                &[&range.start(), &range.end()],
            )
            .await?;

        counts_from_row(&row)
    }

    async fn list_screenings(&self, range: &DateRange) -> Result<Vec<Screening>> {
        let rows = self
            .client
            .query(
                &format!(
                    "SELECT {SCREENING_COLUMNS} FROM chackear_hearing_screenings \
                     WHERE {RANGE_PREDICATE} ORDER BY exam_date DESC, id DESC"
                ),
                &[&range.start(), &range.end()],
            )
            .await?;

        rows.iter()
            .map(|r| PostgreSQLScreening::from_row(r)?.to_domain())
            .collect()
    }

    async fn export_rows(&self, range: &DateRange) -> Result<Vec<ExportRow>> {
        let rows = self
            .client
            .query(
                &format!(
                    "SELECT s.id, s.hn, s.exam_date, s.left_ear_result, s.right_ear_result, \
                            p.birth_date \
                     FROM chackear_hearing_screenings s \
                     LEFT JOIN chackear p ON p.hn = s.hn \
                     WHERE {} ORDER BY s.exam_date DESC, s.id DESC",
                    RANGE_PREDICATE.replace("exam_date", "s.exam_date")
                ),
                &[&range.start(), &range.end()],
            )
            .await?;

        rows.iter()
            .map(|r| PostgreSQLExportRow::from_row(r)?.to_domain())
            .collect()
    }
}

/// Escapes LIKE metacharacters so user input matches literally
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
