//! Session token handling
//!
//! The session cookie carries an HS256 JWT. The subject encodes which account
//! table the user lives in, e.g. `employee:12` or `customer:7`.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SecurityConfig;
use crate::domain::UserType;

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token lifetime in hours
    pub expiration_hours: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self::from(&SecurityConfig::default())
    }
}

impl From<&SecurityConfig> for JwtConfig {
    fn from(cfg: &SecurityConfig) -> Self {
        Self {
            secret: cfg.jwt_secret.clone(),
            expiration_hours: cfg.session_hours,
            issuer: "spa-booking".to_string(),
        }
    }
}

impl JwtConfig {
    pub fn expires_in_seconds(&self) -> i64 {
        self.expiration_hours * 3600
    }
}

/// Claims stored in the session token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// `employee:{id}` or `customer:{id}`
    pub sub: String,
    pub username: String,
    pub email: String,
    /// `"Employee"` or `"Customer"`
    pub user_type: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
}

impl SessionClaims {
    pub fn new(
        user_type: UserType,
        account_id: i32,
        username: &str,
        email: &str,
        config: &JwtConfig,
    ) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(config.expiration_hours);

        Self {
            sub: format!("{}:{}", user_type.as_str().to_lowercase(), account_id),
            username: username.to_string(),
            email: email.to_string(),
            user_type: user_type.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Account table and primary key named by the subject, if well formed
    /// and consistent with `user_type`.
    pub fn account(&self) -> Option<(UserType, i32)> {
        let (prefix, id) = self.sub.split_once(':')?;
        let kind = UserType::parse(&self.user_type)?;
        if prefix != kind.as_str().to_lowercase() {
            return None;
        }
        Some((kind, id.parse().ok()?))
    }
}

/// Create a signed session token
pub fn create_token(
    claims: &SessionClaims,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify and decode a session token
pub fn verify_token(
    token: &str,
    config: &JwtConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_token() {
        let config = JwtConfig::default();
        let claims = SessionClaims::new(UserType::Employee, 12, "ana", "ana@spa.test", &config);
        let token = create_token(&claims, &config).unwrap();

        let decoded = verify_token(&token, &config).unwrap();
        assert_eq!(decoded.sub, "employee:12");
        assert_eq!(decoded.username, "ana");
        assert_eq!(decoded.account(), Some((UserType::Employee, 12)));
        assert!(!decoded.is_expired());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let config = JwtConfig::default();
        let claims = SessionClaims::new(UserType::Customer, 3, "bea", "bea@mail.test", &config);
        let token = create_token(&claims, &config).unwrap();

        let other = JwtConfig {
            secret: "another-secret".into(),
            ..JwtConfig::default()
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn invalid_token() {
        assert!(verify_token("invalid-token", &JwtConfig::default()).is_err());
    }

    #[test]
    fn mismatched_subject_has_no_account() {
        let config = JwtConfig::default();
        let mut claims = SessionClaims::new(UserType::Customer, 3, "bea", "b@x", &config);
        claims.sub = "employee:3".into();
        assert_eq!(claims.account(), None);
        claims.sub = "customer:abc".into();
        assert_eq!(claims.account(), None);
    }
}
