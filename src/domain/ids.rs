//! Domain identifier types with validation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hospital number (HN) newtype wrapper
///
/// Identifies a patient. Surrounding whitespace is trimmed on construction,
/// and an HN is never empty.
///
/// # Examples
///
/// ```
/// use hearscreen::domain::ids::Hn;
/// use std::str::FromStr;
///
/// let hn = Hn::from_str(" 66001 ").unwrap();
/// assert_eq!(hn.as_str(), "66001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hn(String);

impl Hn {
    /// Creates a new Hn from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(Hn)` if the trimmed value is non-empty, `Err` otherwise
    pub fn new(hn: impl Into<String>) -> Result<Self, String> {
        let hn = hn.into();
        let trimmed = hn.trim();
        if trimmed.is_empty() {
            return Err("HN cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the HN as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Hn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Hn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Hn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hn_valid() {
        let hn = Hn::new("66001").unwrap();
        assert_eq!(hn.as_str(), "66001");
        assert_eq!(hn.to_string(), "66001");
    }

    #[test]
    fn test_hn_trimmed() {
        assert_eq!(Hn::new("  HN-12 \t").unwrap().into_inner(), "HN-12");
    }

    #[test]
    fn test_hn_empty() {
        assert!(Hn::new("").is_err());
        assert!(Hn::new("   ").is_err());
    }

    #[test]
    fn test_hn_serializes_as_plain_string() {
        let hn = Hn::new("66001").unwrap();
        assert_eq!(serde_json::to_string(&hn).unwrap(), "\"66001\"");
    }
}
