//! Core business logic for Hearscreen.
//!
//! # Modules
//!
//! - [`records`] - Save, fetch, update, delete and search screenings
//! - [`dashboard`] - Aggregate statistics over a date range
//! - [`export`] - Admin CSV export
//! - [`auth`] - Login and bearer token verification
//!
//! Everything here works against the
//! [`ScreeningStore`](crate::adapters::database::ScreeningStore) trait, so the
//! same logic runs on PostgreSQL and on the in-memory store.
//!
//! # Example
//!
//! ```rust,no_run
//! use hearscreen::adapters::database::create_screening_store;
//! use hearscreen::config::load_config;
//! use hearscreen::core::dashboard::dashboard_stats;
//! use hearscreen::domain::DateRange;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("hearscreen.toml")?;
//! let store = create_screening_store(&config)?;
//!
//! let range = DateRange::parse(Some("2024-01-01"), Some("2024-01-31"))?;
//! let stats = dashboard_stats(store.as_ref(), &range).await?;
//!
//! println!("Total: {}", stats.summary.total);
//! println!("Pass: {}", stats.summary.pass);
//! println!("Refer: {}", stats.summary.fail);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod dashboard;
pub mod export;
pub mod records;
