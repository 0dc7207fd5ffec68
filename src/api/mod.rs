//! HTTP API
//!
//! An axum router over the core services. Routes keep the paths the
//! screening frontend already calls.
//!
//! | Method | Path | Auth |
//! |---|---|---|
//! | POST | `/api/save-screening` | none |
//! | GET | `/api/dashboard-stats` | none |
//! | GET/PUT | `/api/exams/:id` | none |
//! | DELETE | `/api/exams/:id` | admin |
//! | GET | `/api/exams-by-hn/:hn` | none |
//! | GET | `/api/export-csv` | admin |
//! | POST | `/api/login` | none |
//! | GET | `/api/health` | none |

pub mod handlers;
pub mod response;
pub mod session;

use crate::adapters::database::ScreeningStore;
use crate::config::schema::{AuthConfig, ServerConfig};
use crate::core::auth::Authenticator;
use crate::core::records::ScreeningService;
use anyhow::Context;
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub records: ScreeningService,
    pub auth: Arc<Authenticator>,
}

impl AppState {
    pub fn new(store: Arc<dyn ScreeningStore>, auth: &AuthConfig) -> Self {
        Self {
            records: ScreeningService::new(store),
            auth: Arc::new(Authenticator::new(auth)),
        }
    }
}

/// Builds the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .route("/api/save-screening", post(handlers::save_screening))
        .route("/api/dashboard-stats", get(handlers::get_dashboard_stats))
        .route(
            "/api/exams/:id",
            get(handlers::get_exam)
                .put(handlers::update_exam)
                .delete(handlers::delete_exam),
        )
        .route("/api/exams-by-hn/:hn", get(handlers::search_exams_by_hn))
        .route("/api/export-csv", get(handlers::export_csv_file))
        .route("/api/login", post(handlers::login))
        .route("/api/health", get(handlers::health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serves the API until `shutdown` resolves
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(
    server: &ServerConfig,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to address: {}", addr))?;

    tracing::info!(address = %addr, "Hearscreen API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    tracing::info!("Hearscreen API stopped");
    Ok(())
}
