//! In-process screening store
//!
//! Holds patients and screenings in memory behind a tokio `RwLock`. Used by
//! the test suite and by `database_target = "memory"` for local demos; data
//! is lost on restart.

use crate::adapters::database::traits::ScreeningStore;
use crate::domain::{
    DateRange, ExportRow, HearscreenError, Hn, NewScreening, Result, ResultCounts, Screening,
    ScreeningUpdate,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tables {
    /// Patient birth dates keyed by HN
    patients: BTreeMap<Hn, NaiveDate>,
    screenings: BTreeMap<i64, Screening>,
    next_id: i64,
}

impl Tables {
    fn collides(&self, hn: &Hn, exam_date: NaiveDate, except: Option<i64>) -> bool {
        self.screenings
            .values()
            .any(|s| Some(s.id) != except && &s.hn == hn && s.exam_date == exam_date)
    }

    /// Matching screenings, newest exam first, ties by id descending
    fn sorted<'a>(&'a self, mut keep: impl FnMut(&Screening) -> bool) -> Vec<&'a Screening> {
        let mut rows: Vec<&Screening> = self.screenings.values().filter(|s| keep(*s)).collect();
        rows.sort_by(|a, b| b.exam_date.cmp(&a.exam_date).then(b.id.cmp(&a.id)));
        rows
    }
}

/// Memory-backed [`ScreeningStore`]
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a patient without a screening, or overwrite its birth date
    pub async fn put_patient(&self, hn: Hn, birth_date: NaiveDate) {
        self.tables.write().await.patients.insert(hn, birth_date);
    }

    /// Remove a patient row, leaving its screenings in place
    pub async fn remove_patient(&self, hn: &Hn) -> bool {
        self.tables.write().await.patients.remove(hn).is_some()
    }
}

fn duplicate(hn: &Hn, exam_date: NaiveDate) -> HearscreenError {
    HearscreenError::Duplicate(format!(
        "a screening for HN {hn} on {exam_date} already exists"
    ))
}

#[async_trait]
impl ScreeningStore for InMemoryStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn save_screening(&self, screening: &NewScreening) -> Result<Screening> {
        let mut tables = self.tables.write().await;

        tables
            .patients
            .entry(screening.hn.clone())
            .or_insert(screening.birth_date);

        if tables.collides(&screening.hn, screening.exam_date, None) {
            return Err(duplicate(&screening.hn, screening.exam_date));
        }

        tables.next_id += 1;
        let saved = Screening {
            id: tables.next_id,
            hn: screening.hn.clone(),
            exam_date: screening.exam_date,
            left_ear_result: screening.left_ear_result,
            right_ear_result: screening.right_ear_result,
        };
        tables.screenings.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn get_screening(&self, id: i64) -> Result<Option<Screening>> {
        Ok(self.tables.read().await.screenings.get(&id).cloned())
    }

    async fn update_screening(
        &self,
        id: i64,
        update: &ScreeningUpdate,
    ) -> Result<Option<Screening>> {
        let mut tables = self.tables.write().await;

        let hn = match tables.screenings.get(&id) {
            Some(existing) => existing.hn.clone(),
            None => return Ok(None),
        };
        if tables.collides(&hn, update.exam_date, Some(id)) {
            return Err(duplicate(&hn, update.exam_date));
        }

        Ok(tables.screenings.get_mut(&id).map(|screening| {
            screening.exam_date = update.exam_date;
            screening.left_ear_result = update.left_ear_result;
            screening.right_ear_result = update.right_ear_result;
            screening.clone()
        }))
    }

    async fn delete_screening(&self, id: i64) -> Result<bool> {
        Ok(self.tables.write().await.screenings.remove(&id).is_some())
    }

    async fn search_by_hn(&self, fragment: &str) -> Result<Vec<Screening>> {
        let needle = fragment.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .sorted(|s| s.hn.as_str().to_lowercase().contains(&needle))
            .into_iter()
            .cloned()
            .collect())
    }

    async fn count_results(&self, range: &DateRange) -> Result<ResultCounts> {
        let tables = self.tables.read().await;
        Ok(ResultCounts::tally(
            tables
                .screenings
                .values()
                .filter(|s| range.contains(s.exam_date)),
        ))
    }

    async fn list_screenings(&self, range: &DateRange) -> Result<Vec<Screening>> {
        let tables = self.tables.read().await;
        Ok(tables
            .sorted(|s| range.contains(s.exam_date))
            .into_iter()
            .cloned()
            .collect())
    }

    async fn export_rows(&self, range: &DateRange) -> Result<Vec<ExportRow>> {
        let tables = self.tables.read().await;
        Ok(tables
            .sorted(|s| range.contains(s.exam_date))
            .into_iter()
            .map(|s| ExportRow {
                id: s.id,
                hn: s.hn.clone(),
                birth_date: tables.patients.get(&s.hn).copied(),
                exam_date: s.exam_date,
                left_ear_result: s.left_ear_result,
                right_ear_result: s.right_ear_result,
            })
            .collect())
    }
}
