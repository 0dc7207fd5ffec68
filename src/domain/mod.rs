//! Domain models and types for Hearscreen.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`Hn`])
//! - **Screening models** ([`Screening`], [`NewScreening`], [`ScreeningUpdate`], [`ExportRow`])
//! - **Filters and counters** ([`DateRange`], [`ResultCounts`])
//! - **Auth types** ([`Role`], [`Session`], [`UserInfo`])
//! - **Error types** ([`HearscreenError`], [`ErrorKind`]) and the [`Result`] alias
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, HearscreenError>`]. Each error
//! maps to an [`ErrorKind`], which is the only thing clients branch on:
//!
//! ```rust
//! use hearscreen::domain::{ErrorKind, HearscreenError};
//!
//! let err = HearscreenError::Duplicate("66001 on 2024-01-02".to_string());
//! assert_eq!(err.kind(), ErrorKind::DuplicateResult);
//! ```

pub mod auth;
pub mod errors;
pub mod ids;
pub mod range;
pub mod result;
pub mod screening;
pub mod stats;

// Re-export commonly used types for convenience
pub use auth::{Role, Session, UserInfo};
pub use errors::{ErrorKind, HearscreenError};
pub use ids::Hn;
pub use range::DateRange;
pub use result::Result;
pub use screening::{EarResult, ExportRow, NewScreening, Screening, ScreeningUpdate};
pub use stats::ResultCounts;
