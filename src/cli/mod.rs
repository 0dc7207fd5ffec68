//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Hearscreen using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Hearscreen - Newborn hearing screening records service
#[derive(Parser, Debug)]
#[command(name = "hearscreen")]
#[command(version, about, long_about = None)]
#[command(author = "Hearscreen Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "hearscreen.toml", env = "HEARSCREEN_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "HEARSCREEN_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API
    Serve(commands::serve::ServeArgs),

    /// Create database tables and indexes
    Migrate(commands::migrate::MigrateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Write screenings to a CSV file
    Export(commands::export::ExportArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_serve() {
        let cli = Cli::parse_from(["hearscreen", "serve"]);
        assert_eq!(cli.config, "hearscreen.toml");
        assert!(matches!(cli.command, Commands::Serve(_)));
    }

    #[test]
    fn test_cli_parse_serve_overrides() {
        let cli = Cli::parse_from([
            "hearscreen",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
        ]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
                assert_eq!(args.port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["hearscreen", "--config", "custom.toml", "migrate"]);
        assert_eq!(cli.config, "custom.toml");
        assert!(matches!(cli.command, Commands::Migrate(_)));
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["hearscreen", "--log-level", "debug", "serve"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["hearscreen", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["hearscreen", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_export_range() {
        let cli = Cli::parse_from([
            "hearscreen",
            "export",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-31",
            "-o",
            "jan.csv",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.start.as_deref(), Some("2024-01-01"));
                assert_eq!(args.output.as_deref(), Some("jan.csv"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
