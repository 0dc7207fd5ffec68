//! Secret configuration values
//!
//! Database connection strings, the token signing secret and account
//! passwords are held as [`SecretString`]: zeroed on drop, redacted in
//! `Debug`, and only readable through `expose_secret()`.
//!
//! ```rust
//! use hearscreen::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let secret = secret_string("admin123".to_string());
//! assert_eq!(secret.expose_secret().as_str(), "admin123");
//! assert!(!format!("{secret:?}").contains("admin123"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String payload of a [`SecretString`]
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl PartialEq<str> for SecretValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Borrow the secret as a plain string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Secret string held in configuration
pub type SecretString = Secret<SecretValue>;

/// Wraps a plain string as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("postgresql://u:hunter2@db/hearscreen".to_string());
        let debug_output = format!("{secret:?}");
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_secret_value_debug_redacted() {
        let value = SecretValue::from("hunter2".to_string());
        assert_eq!(format!("{value:?}"), "[REDACTED]");
    }

    #[test]
    fn test_secret_toml_roundtrip() {
        #[derive(Serialize, Deserialize)]
        struct Auth {
            jwt_secret: SecretString,
        }

        let parsed: Auth = toml::from_str("jwt_secret = \"s3cret\"").unwrap();
        assert_eq!(parsed.jwt_secret.expose_secret().as_str(), "s3cret");
        assert!(parsed.jwt_secret.expose_secret().starts_with("s3"));
    }
}
