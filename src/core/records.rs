//! Screening record operations
//!
//! Request bodies arrive with every field optional so that a missing field
//! is reported as a validation error naming the field, rather than as a
//! generic deserialization failure.

use crate::adapters::database::ScreeningStore;
use crate::domain::screening::{parse_date, parse_ear_result};
use crate::domain::{
    HearscreenError, Hn, NewScreening, Result, Screening, ScreeningUpdate, Session,
};
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /api/save-screening`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveScreeningRequest {
    pub hn: Option<String>,
    pub birth_date: Option<String>,
    pub exam_date: Option<String>,
    pub left_result: Option<String>,
    pub right_result: Option<String>,
}

impl SaveScreeningRequest {
    /// Validates every field, trimming the HN
    pub fn validate(&self) -> Result<NewScreening> {
        let hn = required("hn", &self.hn)?;
        Ok(NewScreening {
            hn: Hn::new(hn).map_err(HearscreenError::Validation)?,
            birth_date: parse_date("birthDate", required("birthDate", &self.birth_date)?)?,
            exam_date: parse_date("examDate", required("examDate", &self.exam_date)?)?,
            left_ear_result: parse_ear_result(
                "leftResult",
                required("leftResult", &self.left_result)?,
            )?,
            right_ear_result: parse_ear_result(
                "rightResult",
                required("rightResult", &self.right_result)?,
            )?,
        })
    }
}

/// Body of `PUT /api/exams/:id`
///
/// Clients send the whole record back; fields other than these are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScreeningRequest {
    pub exam_date: Option<String>,
    pub left_ear_result: Option<String>,
    pub right_ear_result: Option<String>,
}

impl UpdateScreeningRequest {
    pub fn validate(&self) -> Result<ScreeningUpdate> {
        Ok(ScreeningUpdate {
            exam_date: parse_date("exam_date", required("exam_date", &self.exam_date)?)?,
            left_ear_result: parse_ear_result(
                "left_ear_result",
                required("left_ear_result", &self.left_ear_result)?,
            )?,
            right_ear_result: parse_ear_result(
                "right_ear_result",
                required("right_ear_result", &self.right_ear_result)?,
            )?,
        })
    }
}

fn required<'a>(field: &str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(HearscreenError::Validation(format!("{field} is required"))),
    }
}

/// Create, read, update, delete and search operations on screenings
#[derive(Clone)]
pub struct ScreeningService {
    store: Arc<dyn ScreeningStore>,
}

impl ScreeningService {
    pub fn new(store: Arc<dyn ScreeningStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ScreeningStore> {
        &self.store
    }

    /// Validates and stores a new screening
    ///
    /// # Errors
    ///
    /// `Validation` for bad input, `Duplicate` if the patient already has a
    /// screening on that exam date.
    pub async fn save(&self, request: &SaveScreeningRequest) -> Result<Screening> {
        let screening = request.validate()?;
        let saved = self.store.save_screening(&screening).await?;
        tracing::info!(id = saved.id, hn = %saved.hn, "Screening saved");
        Ok(saved)
    }

    /// Fetches one screening
    pub async fn get(&self, id: i64) -> Result<Screening> {
        self.store
            .get_screening(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replaces the exam date and results of a screening
    pub async fn update(&self, id: i64, request: &UpdateScreeningRequest) -> Result<Screening> {
        let update = request.validate()?;
        let updated = self
            .store
            .update_screening(id, &update)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(id, hn = %updated.hn, "Screening updated");
        Ok(updated)
    }

    /// Deletes a screening; admin only
    pub async fn delete(&self, session: &Session, id: i64) -> Result<()> {
        session.require_admin()?;
        if !self.store.delete_screening(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(id, user = %session.user.username, "Screening deleted");
        Ok(())
    }

    /// Case-insensitive partial match on HN
    pub async fn search_by_hn(&self, fragment: &str) -> Result<Vec<Screening>> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Err(HearscreenError::Validation(
                "hn search term is required".to_string(),
            ));
        }
        let found = self.store.search_by_hn(fragment).await?;
        tracing::debug!(query = fragment, count = found.len(), "HN search");
        Ok(found)
    }
}

fn not_found(id: i64) -> HearscreenError {
    HearscreenError::NotFound(format!("screening {id} not found"))
}
