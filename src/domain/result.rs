//! Result type alias for Hearscreen

use super::errors::HearscreenError;

/// Result type alias for Hearscreen operations
///
/// # Examples
///
/// ```
/// use hearscreen::domain::result::Result;
/// use hearscreen::domain::errors::HearscreenError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(HearscreenError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, HearscreenError>;
