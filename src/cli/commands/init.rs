//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "hearscreen.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Hearscreen configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Create a .env file with DATABASE_URL and JWT_SECRET");
                println!("  3. Replace the demo admin account under [[auth.users]]");
                println!("  4. Validate configuration: hearscreen validate-config");
                println!("  5. Create tables: hearscreen migrate");
                println!("  6. Start the API: hearscreen serve");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Hearscreen Configuration File
# Newborn OAE hearing screening records

environment = "development"
database_target = "postgresql"  # postgresql | memory

[application]
log_level = "info"

[server]
host = "0.0.0.0"
port = 3001

[postgresql]
connection_string = "${DATABASE_URL}"
ssl_mode = "require"

[auth]
jwt_secret = "${JWT_SECRET}"
token_ttl_hours = 24

[[auth.users]]
id = 1
username = "admin"
password = "${HEARSCREEN_ADMIN_PASSWORD}"
role = "admin"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Hearscreen Configuration File
# Newborn OAE hearing screening records
#
# Values of the form ${VAR} are read from the environment (or .env).
# Any setting can also be overridden with HEARSCREEN_<SECTION>_<KEY>,
# e.g. HEARSCREEN_SERVER_PORT=8080. DATABASE_URL, JWT_SECRET and PORT are
# honoured as well.

# ============================================================================
# Runtime
# ============================================================================
# development | staging | production
# Production refuses the demo account, the default token secret and the
# in-memory store.
environment = "development"

# postgresql | memory
# "memory" keeps everything in process and loses it on restart.
database_target = "postgresql"

[application]
# Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
log_level = "info"

# ============================================================================
# HTTP
# ============================================================================
[server]
host = "0.0.0.0"
port = 3001

# ============================================================================
# PostgreSQL
# ============================================================================
[postgresql]
connection_string = "${DATABASE_URL}"

# Pool size (1-100)
max_connections = 10

connection_timeout_seconds = 30
statement_timeout_seconds = 60

# disable | prefer | require | verify-full
# "require" encrypts but accepts any server certificate, as hosted
# providers commonly need; use verify-full where the CA is trusted.
ssl_mode = "require"

# ============================================================================
# Authentication
# ============================================================================
[auth]
# HS256 signing secret; at least 32 bytes in production
jwt_secret = "${JWT_SECRET}"

# Issued tokens expire after this many hours
token_ttl_hours = 24

# Admins may delete records and export CSV; staff may not.
[[auth.users]]
id = 1
username = "admin"
password = "${HEARSCREEN_ADMIN_PASSWORD}"
role = "admin"

# [[auth.users]]
# id = 2
# username = "nurse"
# password = "${HEARSCREEN_NURSE_PASSWORD}"
# role = "staff"

# ============================================================================
# Logging
# ============================================================================
[logging]
# JSON log files in addition to console output
local_enabled = false
local_path = "/var/log/hearscreen"

# daily | hourly
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{DatabaseTarget, HearscreenConfig};
    use crate::domain::Role;
    use tempfile::TempDir;

    #[test]
    fn test_init_args_defaults() {
        let args = InitArgs {
            output: "hearscreen.toml".to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.output, "hearscreen.toml");
        assert!(!args.with_examples);
    }

    #[test]
    fn test_generate_minimal_config() {
        let config: HearscreenConfig =
            toml::from_str(&InitArgs::generate_minimal_config()).unwrap();
        assert_eq!(config.database_target, DatabaseTarget::PostgreSQL);
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.auth.users[0].role, Role::Admin);
    }

    #[test]
    fn test_generate_config_with_examples() {
        let config: HearscreenConfig =
            toml::from_str(&InitArgs::generate_config_with_examples()).unwrap();
        assert_eq!(config.auth.users.len(), 1);
        assert_eq!(config.postgresql.unwrap().max_connections, 10);
    }

    #[tokio::test]
    async fn test_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hearscreen.toml");
        fs::write(&path, "# existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# existing");

        let forced = InitArgs { force: true, ..args };
        assert_eq!(forced.execute().await.unwrap(), 0);
        assert!(fs::read_to_string(&path).unwrap().contains("[postgresql]"));
    }
}
