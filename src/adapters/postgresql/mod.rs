//! PostgreSQL database integration
//!
//! This module stores patients and screenings in PostgreSQL, the production
//! backend for Hearscreen.

pub mod adapter;
pub mod client;
pub mod models;

pub use adapter::PostgreSQLAdapter;
pub use client::PostgreSQLClient;
pub use models::{PostgreSQLExportRow, PostgreSQLScreening};
