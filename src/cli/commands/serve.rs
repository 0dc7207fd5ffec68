//! Serve command implementation
//!
//! This module implements the `serve` command, which runs the HTTP API until
//! a shutdown signal arrives.

use crate::adapters::database::create_screening_store;
use crate::api::{self, AppState};
use crate::config::load_config;
use clap::Args;
use tokio::sync::watch;

/// Arguments for the serve command
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the listen address from configuration
    #[arg(long)]
    pub host: Option<String>,

    /// Override the listen port from configuration
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting serve command");

        let mut config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(host) = &self.host {
            tracing::info!(host = %host, "Overriding listen host from CLI");
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            tracing::info!(port, "Overriding listen port from CLI");
            config.server.port = port;
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2);
        }

        let store = create_screening_store(&config)?;
        store.test_connection().await?;

        tracing::info!(
            backend = store.backend_name(),
            environment = ?config.environment,
            "Screening store ready"
        );

        let state = AppState::new(store, &config.auth);
        api::serve(&config.server, state, wait_for_shutdown(shutdown_signal)).await?;

        Ok(0)
    }
}

/// Resolves once the shutdown flag is set or its sender is dropped
async fn wait_for_shutdown(mut shutdown_signal: watch::Receiver<bool>) {
    while !*shutdown_signal.borrow() {
        if shutdown_signal.changed().await.is_err() {
            break;
        }
    }
    tracing::info!("Shutdown requested, draining connections");
}
