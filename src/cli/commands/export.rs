//! Export command implementation
//!
//! This module implements the `export` command, which writes the admin CSV
//! export to a file without going through the HTTP API.

use crate::adapters::database::create_screening_store;
use crate::config::load_config;
use crate::core::export::{export_csv, export_filename};
use crate::domain::{DateRange, Role, Session, UserInfo};
use crate::log_export_written;
use clap::Args;
use std::fs;

/// Arguments for the export command
#[derive(Args, Debug, Default)]
pub struct ExportArgs {
    /// First exam date to include (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Last exam date to include (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Output file; defaults to the download name for the range
    #[arg(short, long)]
    pub output: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let range = match DateRange::parse(self.start.as_deref(), self.end.as_deref()) {
            Ok(range) => range,
            Err(e) => {
                eprintln!("Invalid date range: {e}");
                return Ok(2);
            }
        };

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let store = create_screening_store(&config)?;
        let export = export_csv(store.as_ref(), &operator_session(), &range).await?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| export_filename(&range));
        fs::write(&output, &export.body)?;

        log_export_written!(export.row_count, output);
        println!("✅ Exported {} screenings to {}", export.row_count, output);
        Ok(0)
    }
}

/// Session for the local operator, who has shell access to the config
fn operator_session() -> Session {
    Session::new(UserInfo {
        id: 0,
        username: "cli".to_string(),
        role: Role::Admin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inverted_range_is_usage_error() {
        let args = ExportArgs {
            start: Some("2024-02-01".to_string()),
            end: Some("2024-01-01".to_string()),
            output: None,
        };
        assert_eq!(args.execute("unused.toml").await.unwrap(), 2);
    }

    #[test]
    fn test_operator_is_admin() {
        assert!(operator_session().is_admin());
    }
}
