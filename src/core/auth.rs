//! Login and bearer token verification
//!
//! Accounts come from `[auth]` configuration. Successful logins receive an
//! HS256 JWT carrying the account's id, username and role; the token is the
//! only session state, there is no server-side store.

use crate::config::schema::{AuthConfig, DEFAULT_JWT_SECRET};
use crate::config::UserAccountConfig;
use crate::domain::{HearscreenError, Result, Role, Session, UserInfo};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Data returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub username: String,
    pub role: Role,
    /// Issued at, seconds since the epoch
    pub iat: i64,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// Checks credentials and issues/verifies tokens
pub struct Authenticator {
    users: Vec<UserAccountConfig>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl_secs: i64,
}

impl Authenticator {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.expose_secret();

        if secret.as_str() == DEFAULT_JWT_SECRET {
            tracing::warn!("auth.jwt_secret is the built-in default; set JWT_SECRET");
        }
        if config.uses_demo_credentials() {
            tracing::warn!("Demo account admin/admin123 is enabled; configure [[auth.users]]");
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);

        Self {
            users: config.users.clone(),
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_ttl_secs: i64::try_from(config.token_ttl_hours.saturating_mul(3600))
                .unwrap_or(i64::MAX),
        }
    }

    /// Exchanges a username and password for a token
    ///
    /// # Errors
    ///
    /// `Validation` if either field is missing, `InvalidCredentials` on any
    /// mismatch.
    pub fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let (username, password) = match (&request.username, &request.password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
            _ => {
                return Err(HearscreenError::Validation(
                    "username and password are required".to_string(),
                ))
            }
        };

        let account = self
            .users
            .iter()
            .find(|a| {
                &a.username == username && a.password.expose_secret().as_str() == password
            })
            .ok_or_else(|| {
                tracing::warn!(username = %username, "Login rejected");
                HearscreenError::InvalidCredentials
            })?;

        let user = UserInfo {
            id: account.id,
            username: account.username.clone(),
            role: account.role,
        };
        let token = self.issue_token(&user)?;
        tracing::info!(
            id = user.id,
            username = %user.username,
            role = %user.role,
            "Login succeeded"
        );

        Ok(LoginResponse { token, user })
    }

    /// Signs a token for the user, valid for the configured lifetime
    pub fn issue_token(&self, user: &UserInfo) -> Result<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
            iat,
            exp: iat.saturating_add(self.token_ttl_secs),
        };
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| HearscreenError::Other(format!("Failed to encode token: {}", e)))
    }

    /// Verifies signature and expiry, returning the session
    ///
    /// # Errors
    ///
    /// `Unauthorized` for any malformed, tampered or expired token.
    pub fn verify(&self, token: &str) -> Result<Session> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            HearscreenError::Unauthorized("invalid or expired token".to_string())
        })?;

        let claims = data.claims;
        Ok(Session::new(UserInfo {
            id: claims.id,
            username: claims.username,
            role: claims.role,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use crate::domain::ErrorKind;

    fn config() -> AuthConfig {
        let mut config = AuthConfig::default();
        config.jwt_secret = secret_string("test-secret-that-is-long-enough-0123".to_string());
        config.users.push(UserAccountConfig {
            id: 2,
            username: "nurse".to_string(),
            password: secret_string("ward7".to_string()),
            role: Role::Staff,
        });
        config
    }

    fn login(auth: &Authenticator, username: &str, password: &str) -> Result<LoginResponse> {
        auth.login(&LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        })
    }

    #[test]
    fn test_demo_admin_login() {
        let auth = Authenticator::new(&config());
        let response = login(&auth, "admin", "admin123").unwrap();
        assert_eq!(response.user.id, 1);
        assert_eq!(response.user.role, Role::Admin);

        let session = auth.verify(&response.token).unwrap();
        assert!(session.is_admin());
        assert_eq!(session.user, response.user);
    }

    #[test]
    fn test_wrong_password_rejected() {
        let auth = Authenticator::new(&config());
        let err = login(&auth, "admin", "nope").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
        let err = login(&auth, "ghost", "admin123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCredentials);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let auth = Authenticator::new(&config());
        let err = auth.login(&LoginRequest::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    }

    #[test]
    fn test_staff_token_is_not_admin() {
        let auth = Authenticator::new(&config());
        let response = login(&auth, "nurse", "ward7").unwrap();
        let session = auth.verify(&response.token).unwrap();
        assert!(!session.is_admin());
    }

    #[test]
    fn test_token_lifetime_matches_config() {
        let auth = Authenticator::new(&config());
        let response = login(&auth, "admin", "admin123").unwrap();
        let claims = decode::<Claims>(&response.token, &auth.decoding_key, &auth.validation)
            .unwrap()
            .claims;
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let auth = Authenticator::new(&config());
        let now = Utc::now().timestamp();
        let token = auth
            .sign(&Claims {
                id: 1,
                username: "admin".to_string(),
                role: Role::Admin,
                iat: now - 2 * 86_400,
                exp: now - 86_400,
            })
            .unwrap();
        let err = auth.verify(&token).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let auth = Authenticator::new(&config());
        let mut other_config = config();
        other_config.jwt_secret = secret_string("another-secret-entirely-0123456789".to_string());
        let other = Authenticator::new(&other_config);

        let token = login(&other, "admin", "admin123").unwrap().token;
        assert_eq!(
            auth.verify(&token).unwrap_err().kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            auth.verify("not.a.token").unwrap_err().kind(),
            ErrorKind::Unauthorized
        );
    }
}
