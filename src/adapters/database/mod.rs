//! Database abstraction layer
//!
//! This module provides a trait-based abstraction over screening storage,
//! allowing Hearscreen to run against PostgreSQL or an in-memory store.

pub mod factory;
pub mod traits;

pub use factory::create_screening_store;
pub use traits::ScreeningStore;
