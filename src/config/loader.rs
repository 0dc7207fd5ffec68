//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HearscreenConfig;
use super::secret::secret_string;
use crate::domain::errors::HearscreenError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into HearscreenConfig
/// 4. Applies environment variable overrides (HEARSCREEN_* prefix, plus
///    `DATABASE_URL`, `JWT_SECRET` and `PORT`)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, a referenced
/// variable is unset, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use hearscreen::config::loader::load_config;
///
/// let config = load_config("hearscreen.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HearscreenConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HearscreenError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HearscreenError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: HearscreenConfig = toml::from_str(&contents)
        .map_err(|e| HearscreenError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        HearscreenError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| HearscreenError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    String::new()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(HearscreenError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides
///
/// Variables follow the pattern `HEARSCREEN_<SECTION>_<KEY>`, e.g.
/// `HEARSCREEN_SERVER_PORT`. The deployment variables `DATABASE_URL`,
/// `JWT_SECRET` and `PORT` are honoured too; the prefixed form wins when
/// both are set.
fn apply_env_overrides(config: &mut HearscreenConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("HEARSCREEN_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("HEARSCREEN_ENVIRONMENT") {
        config.environment = parse_enum("HEARSCREEN_ENVIRONMENT", &val)?;
    }
    if let Ok(val) = std::env::var("HEARSCREEN_DATABASE_TARGET") {
        config.database_target = parse_enum("HEARSCREEN_DATABASE_TARGET", &val)?;
    }

    // Server overrides
    if let Ok(val) = std::env::var("HEARSCREEN_SERVER_HOST") {
        config.server.host = val;
    }
    if let Some(val) = env_either("HEARSCREEN_SERVER_PORT", "PORT") {
        config.server.port = val.parse().map_err(|e| {
            HearscreenError::Configuration(format!("Invalid port '{val}': {e}"))
        })?;
    }

    // PostgreSQL overrides (only if PostgreSQL is configured, or a URL is given)
    if let Some(val) = env_either("HEARSCREEN_POSTGRESQL_CONNECTION_STRING", "DATABASE_URL") {
        match config.postgresql {
            Some(ref mut pg) => pg.connection_string = secret_string(val),
            None => {
                config.postgresql = Some(toml::from_str(&format!(
                    "connection_string = {}",
                    toml::Value::String(val)
                ))?);
            }
        }
    }
    if let Some(ref mut pg) = config.postgresql {
        if let Ok(val) = std::env::var("HEARSCREEN_POSTGRESQL_MAX_CONNECTIONS") {
            if let Ok(max) = val.parse() {
                pg.max_connections = max;
            }
        }
        if let Ok(val) = std::env::var("HEARSCREEN_POSTGRESQL_SSL_MODE") {
            pg.ssl_mode = val;
        }
    }

    // Auth overrides
    if let Some(val) = env_either("HEARSCREEN_AUTH_JWT_SECRET", "JWT_SECRET") {
        config.auth.jwt_secret = secret_string(val);
    }
    if let Ok(val) = std::env::var("HEARSCREEN_AUTH_TOKEN_TTL_HOURS") {
        if let Ok(hours) = val.parse() {
            config.auth.token_ttl_hours = hours;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("HEARSCREEN_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("HEARSCREEN_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn env_either(primary: &str, fallback: &str) -> Option<String> {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .ok()
}

fn parse_enum<T: serde::de::DeserializeOwned>(var: &str, value: &str) -> Result<T> {
    serde_json::from_value(serde_json::Value::String(value.to_lowercase())).map_err(|e| {
        HearscreenError::Configuration(format!("Invalid value '{value}' for {var}: {e}"))
    })
}
