//! Screening store factory
//!
//! This module creates the storage backend selected by configuration.

use crate::adapters::database::traits::ScreeningStore;
use crate::adapters::memory::InMemoryStore;
use crate::adapters::postgresql::adapter::PostgreSQLAdapter;
use crate::adapters::postgresql::client::PostgreSQLClient;
use crate::config::schema::{DatabaseTarget, HearscreenConfig};
use crate::domain::{HearscreenError, Result};
use std::sync::Arc;

/// Create a screening store based on the configuration
///
/// This examines `database_target` and builds the matching implementation.
/// No connection is opened here; callers decide whether to test it.
///
/// # Errors
///
/// Returns an error if PostgreSQL is selected without a `[postgresql]`
/// section, or the connection pool cannot be built.
pub fn create_screening_store(config: &HearscreenConfig) -> Result<Arc<dyn ScreeningStore>> {
    match config.database_target {
        DatabaseTarget::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                HearscreenError::Configuration(
                    "database_target is postgresql but [postgresql] is not configured"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL screening store");
            let client = PostgreSQLClient::new(pg_config.clone())?;
            Ok(Arc::new(PostgreSQLAdapter::new(client)))
        }
        DatabaseTarget::Memory => {
            tracing::warn!("Using in-memory screening store; data is lost on restart");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_target() {
        let config = HearscreenConfig {
            database_target: DatabaseTarget::Memory,
            ..Default::default()
        };
        let store = create_screening_store(&config).unwrap();
        assert_eq!(store.backend_name(), "memory");
    }

    #[test]
    fn test_postgresql_target_requires_section() {
        let config = HearscreenConfig {
            database_target: DatabaseTarget::PostgreSQL,
            postgresql: None,
            ..Default::default()
        };
        assert!(matches!(
            create_screening_store(&config),
            Err(HearscreenError::Configuration(_))
        ));
    }
}
