// Hearscreen - Newborn Hearing Screening Records Service
// Copyright (c) 2025 Hearscreen Contributors
// Licensed under the MIT License

//! # Hearscreen - Newborn Hearing Screening Records
//!
//! Hearscreen is the backend for recording newborn otoacoustic-emission (OAE)
//! hearing screenings. Clinic staff record a PASS/FAIL result per ear for a
//! patient identified by hospital number (HN); supervisors review aggregate
//! statistics and administrators edit, delete and export records.
//!
//! ## Architecture
//!
//! Hearscreen follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`api`] - HTTP routes, JSON envelope and bearer-token extractors
//! - [`core`] - Business logic (records, dashboard, CSV export, auth)
//! - [`adapters`] - Storage backends (PostgreSQL, in-memory)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hearscreen::adapters::database::create_screening_store;
//! use hearscreen::api::{router, AppState};
//! use hearscreen::config::load_config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("hearscreen.toml")?;
//!     let store = create_screening_store(&config)?;
//!     store.ensure_schema().await?;
//!
//!     let app = router(AppState::new(store, &config.auth));
//!     let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`domain::Result`], whose error type
//! [`domain::HearscreenError`] classifies itself into an
//! [`ErrorKind`](domain::ErrorKind). The API maps kinds onto HTTP statuses;
//! internal failures are logged and reported to clients without detail.
//!
//! ```rust
//! use hearscreen::domain::{DateRange, ErrorKind};
//!
//! let err = DateRange::parse(Some("2024-02-01"), Some("2024-01-01")).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::ValidationFailed);
//! ```

pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
