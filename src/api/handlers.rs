//! HTTP handlers
//!
//! Thin wrappers: extract, call into [`crate::core`], wrap in the envelope.

use super::response::{ApiResponse, ApiResult};
use super::session::AdminSession;
use super::AppState;
use crate::core::auth::{LoginRequest, LoginResponse};
use crate::core::dashboard::{dashboard_stats, DashboardStats};
use crate::core::export::export_csv;
use crate::core::records::{SaveScreeningRequest, UpdateScreeningRequest};
use crate::domain::{DateRange, Screening};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// `startDate` / `endDate` query parameters, both optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl RangeQuery {
    fn range(&self) -> crate::domain::Result<DateRange> {
        DateRange::parse(self.start_date.as_deref(), self.end_date.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub backend: &'static str,
    pub version: &'static str,
}

pub async fn save_screening(
    State(state): State<AppState>,
    body: Result<Json<SaveScreeningRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<Screening>> {
    let Json(request) = body?;
    let saved = state.records.save(&request).await?;
    Ok(ApiResponse::ok(saved))
}

pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> ApiResult<ApiResponse<DashboardStats>> {
    let Query(query) = query?;
    let range = query.range()?;
    let stats = dashboard_stats(state.records.store().as_ref(), &range).await?;
    Ok(ApiResponse::ok(stats))
}

pub async fn get_exam(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<ApiResponse<Screening>> {
    let Path(id) = id?;
    Ok(ApiResponse::ok(state.records.get(id).await?))
}

pub async fn update_exam(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateScreeningRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<Screening>> {
    let Path(id) = id?;
    let Json(request) = body?;
    let updated = state.records.update(id, &request).await?;
    Ok(ApiResponse::ok(updated).with_message("บันทึกสำเร็จ"))
}

pub async fn search_exams_by_hn(
    State(state): State<AppState>,
    Path(hn): Path<String>,
) -> ApiResult<ApiResponse<Vec<Screening>>> {
    Ok(ApiResponse::ok(state.records.search_by_hn(&hn).await?))
}

pub async fn delete_exam(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<ApiResponse<()>> {
    let Path(id) = id?;
    state.records.delete(&session, id).await?;
    Ok(ApiResponse::message("ลบข้อมูลสำเร็จ"))
}

pub async fn export_csv_file(
    State(state): State<AppState>,
    AdminSession(session): AdminSession,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;
    let range = query.range()?;
    let export = export_csv(state.records.store().as_ref(), &session, &range).await?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename={}", export.filename),
            ),
        ],
        export.body,
    )
        .into_response())
}

pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<ApiResponse<LoginResponse>> {
    let Json(request) = body?;
    Ok(ApiResponse::ok(state.auth.login(&request)?))
}

pub async fn health(State(state): State<AppState>) -> ApiResult<ApiResponse<Health>> {
    let store = state.records.store();
    store.test_connection().await?;
    Ok(ApiResponse::ok(Health {
        status: "ok",
        backend: store.backend_name(),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
