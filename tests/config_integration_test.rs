//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` so they do not
//! interfere with each other.

use hearscreen::config::{load_config, DatabaseTarget, Environment};
use hearscreen::domain::Role;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in [
        "HEARSCREEN_APPLICATION_LOG_LEVEL",
        "HEARSCREEN_ENVIRONMENT",
        "HEARSCREEN_DATABASE_TARGET",
        "HEARSCREEN_SERVER_HOST",
        "HEARSCREEN_SERVER_PORT",
        "HEARSCREEN_POSTGRESQL_CONNECTION_STRING",
        "HEARSCREEN_POSTGRESQL_MAX_CONNECTIONS",
        "HEARSCREEN_POSTGRESQL_SSL_MODE",
        "HEARSCREEN_AUTH_JWT_SECRET",
        "HEARSCREEN_AUTH_TOKEN_TTL_HOURS",
        "HEARSCREEN_LOGGING_LOCAL_ENABLED",
        "HEARSCREEN_LOGGING_LOCAL_PATH",
        "DATABASE_URL",
        "JWT_SECRET",
        "PORT",
        "TEST_HEARSCREEN_ADMIN_PASSWORD",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

const PRODUCTION_CONFIG: &str = r#"
environment = "production"
database_target = "postgresql"

[application]
log_level = "warn"

[server]
host = "0.0.0.0"
port = 8080

[postgresql]
connection_string = "postgresql://hearscreen:pw@db.internal:5432/hearscreen"
max_connections = 20
ssl_mode = "require"

[auth]
jwt_secret = "a-production-secret-of-sufficient-length"
token_ttl_hours = 12

[[auth.users]]
id = 1
username = "audiology"
password = "${TEST_HEARSCREEN_ADMIN_PASSWORD}"
role = "admin"

[[auth.users]]
id = 2
username = "ward7"
password = "ward7-password"

[logging]
local_enabled = true
local_path = "/var/log/hearscreen"
local_rotation = "hourly"
"#;

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_HEARSCREEN_ADMIN_PASSWORD", "s3cret");

    let file = write_config(PRODUCTION_CONFIG);
    let config = load_config(file.path()).expect("Failed to load config");

    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.database_target, DatabaseTarget::PostgreSQL);
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.server.bind_address(), "0.0.0.0:8080");

    let pg = config.postgresql.as_ref().unwrap();
    assert_eq!(pg.max_connections, 20);
    assert_eq!(pg.ssl_mode, "require");

    assert_eq!(config.auth.token_ttl_hours, 12);
    assert_eq!(config.auth.users.len(), 2);
    assert_eq!(config.auth.users[0].password.expose_secret().as_str(), "s3cret");
    assert_eq!(config.auth.users[0].role, Role::Admin);
    // Role defaults to staff
    assert_eq!(config.auth.users[1].role, Role::Staff);

    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");

    cleanup_env_vars();
}

#[test]
fn test_minimal_memory_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("database_target = \"memory\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.server.port, 3001);
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.auth.token_ttl_hours, 24);
    assert!(config.auth.uses_demo_credentials());
    assert!(config.postgresql.is_none());
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(PRODUCTION_CONFIG);
    let err = load_config(file.path()).unwrap_err();
    assert!(
        err.to_string().contains("TEST_HEARSCREEN_ADMIN_PASSWORD"),
        "{err}"
    );
}

#[test]
fn test_prefixed_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("HEARSCREEN_APPLICATION_LOG_LEVEL", "debug");
    std::env::set_var("HEARSCREEN_SERVER_PORT", "4000");
    std::env::set_var("HEARSCREEN_AUTH_TOKEN_TTL_HOURS", "2");
    std::env::set_var("HEARSCREEN_LOGGING_LOCAL_PATH", "/tmp/hearscreen-logs");

    let file = write_config("database_target = \"memory\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.server.port, 4000);
    assert_eq!(config.auth.token_ttl_hours, 2);
    assert_eq!(config.logging.local_path, "/tmp/hearscreen-logs");

    cleanup_env_vars();
}

#[test]
fn test_platform_env_vars() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("DATABASE_URL", "postgres://u:p@host:5432/screening");
    std::env::set_var("JWT_SECRET", "from-the-platform");
    std::env::set_var("PORT", "5005");

    // No [postgresql] section at all; DATABASE_URL supplies it
    let file = write_config("");
    let config = load_config(file.path()).unwrap();

    let pg = config.postgresql.as_ref().unwrap();
    assert_eq!(
        pg.connection_string.expose_secret().as_str(),
        "postgres://u:p@host:5432/screening"
    );
    assert_eq!(pg.max_connections, 10);
    assert_eq!(config.auth.jwt_secret.expose_secret().as_str(), "from-the-platform");
    assert_eq!(config.server.port, 5005);

    cleanup_env_vars();
}

#[test]
fn test_prefixed_var_wins_over_platform_var() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PORT", "5005");
    std::env::set_var("HEARSCREEN_SERVER_PORT", "6006");

    let file = write_config("database_target = \"memory\"\n");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.server.port, 6006);

    cleanup_env_vars();
}

#[test]
fn test_invalid_port_override_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PORT", "not-a-port");

    let file = write_config("database_target = \"memory\"\n");
    assert!(load_config(file.path()).is_err());

    cleanup_env_vars();
}

#[test]
fn test_production_rejects_default_secret() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
environment = "production"

[postgresql]
connection_string = "postgresql://u:p@localhost/hearscreen"

[[auth.users]]
id = 1
username = "audiology"
password = "not-the-demo"
role = "admin"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("jwt_secret"), "{err}");
}

#[test]
fn test_production_rejects_demo_account() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("JWT_SECRET", "a-production-secret-of-sufficient-length");

    let file = write_config(
        r#"
environment = "production"

[postgresql]
connection_string = "postgresql://u:p@localhost/hearscreen"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("demo admin"), "{err}");

    cleanup_env_vars();
}

#[test]
fn test_production_rejects_memory_store() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("HEARSCREEN_ENVIRONMENT", "production");
    std::env::set_var("JWT_SECRET", "a-production-secret-of-sufficient-length");

    let file = write_config(
        r#"
database_target = "memory"

[[auth.users]]
id = 1
username = "audiology"
password = "not-the-demo"
role = "admin"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("memory"), "{err}");

    cleanup_env_vars();
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/hearscreen.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
