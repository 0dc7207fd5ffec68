//! Migrate command implementation
//!
//! Applies the bundled schema. Every statement uses `IF NOT EXISTS`, so the
//! command is safe to run on each deploy.

use crate::adapters::database::create_screening_store;
use crate::config::load_config;
use clap::Args;

/// Arguments for the migrate command
#[derive(Args, Debug)]
pub struct MigrateArgs {}

impl MigrateArgs {
    /// Execute the migrate command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting migrate command");

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let store = create_screening_store(&config)?;
        store.test_connection().await?;
        store.ensure_schema().await?;

        println!("✅ Schema is up to date ({})", store.backend_name());
        Ok(0)
    }
}
