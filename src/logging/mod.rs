//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output for operators
//! - JSON-formatted, rotated log files
//! - Configurable log levels, overridable with `RUST_LOG`
//!
//! # Example
//!
//! ```no_run
//! use hearscreen::logging::init_logging;
//! use hearscreen::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use hearscreen::log_error_with_context;
/// use hearscreen::domain::HearscreenError;
///
/// let error = HearscreenError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

/// Log the outcome of a CSV export
///
/// # Example
///
/// ```no_run
/// use hearscreen::log_export_written;
///
/// log_export_written!(12, "eare-data.csv");
/// ```
#[macro_export]
macro_rules! log_export_written {
    ($count:expr, $destination:expr) => {
        tracing::info!(
            count = $count,
            destination = %$destination,
            "CSV export written"
        );
    };
}
