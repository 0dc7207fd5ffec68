//! Storage backends for Hearscreen.
//!
//! - [`database`] - the [`ScreeningStore`](database::ScreeningStore) trait and factory
//! - [`postgresql`] - PostgreSQL implementation (production)
//! - [`memory`] - in-process implementation for tests and demos
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing without a database. Handlers and services only see the
//! trait object, and adapters translate driver failures into
//! [`HearscreenError`](crate::domain::HearscreenError) values.
//!
//! ```rust,no_run
//! use hearscreen::adapters::database::create_screening_store;
//! use hearscreen::config::load_config;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("hearscreen.toml")?;
//! let store = create_screening_store(&config)?;
//! store.test_connection().await?;
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod memory;
pub mod postgresql;
