//! Configuration management for Hearscreen.
//!
//! Hearscreen uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `HEARSCREEN_*` environment overrides, plus `DATABASE_URL`, `JWT_SECRET`
//!   and `PORT` for platform deployments
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hearscreen::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("hearscreen.toml")?;
//! println!("Listening on {}", config.server.bind_address());
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "production"
//! database_target = "postgresql"
//!
//! [application]
//! log_level = "info"
//!
//! [server]
//! port = 3001
//!
//! [postgresql]
//! connection_string = "${DATABASE_URL}"
//! ssl_mode = "require"
//!
//! [auth]
//! jwt_secret = "${JWT_SECRET}"
//! token_ttl_hours = 24
//!
//! [[auth.users]]
//! id = 1
//! username = "audiology"
//! password = "${HEARSCREEN_ADMIN_PASSWORD}"
//! role = "admin"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, AuthConfig, DatabaseTarget, Environment, HearscreenConfig, LoggingConfig,
    PostgreSQLConfig, ServerConfig, UserAccountConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
