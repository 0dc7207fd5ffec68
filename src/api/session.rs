//! Bearer token extractors
//!
//! Handlers that need an identity take [`AuthSession`] or [`AdminSession`]
//! as an argument; the session is then an explicit value rather than
//! request-scoped state.

use super::response::ApiError;
use super::AppState;
use crate::domain::{HearscreenError, Session};
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// Any authenticated caller
#[derive(Debug, Clone)]
pub struct AuthSession(pub Session);

/// Authenticated caller with the admin role
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

/// Pulls the token out of an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: Option<&str>) -> Result<&str, HearscreenError> {
    let header = header
        .ok_or_else(|| HearscreenError::Unauthorized("missing bearer token".to_string()))?;

    match header.split_once(' ') {
        Some((scheme, token))
            if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
        {
            Ok(token.trim())
        }
        _ => Err(HearscreenError::Unauthorized(
            "malformed Authorization header".to_string(),
        )),
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .map(|value| {
                value.to_str().map_err(|_| {
                    HearscreenError::Unauthorized("malformed Authorization header".to_string())
                })
            })
            .transpose()?;

        let token = bearer_token(header)?;
        Ok(AuthSession(state.auth.verify(token)?))
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthSession(session) = AuthSession::from_request_parts(parts, state).await?;
        session.require_admin()?;
        Ok(AdminSession(session))
    }
}
