use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::SecurityConfig;

pub mod password;

/// Session token claims. Tokens are stateless: nothing about them is stored
/// server-side, so validity is the signature plus `exp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: Uuid, email: impl Into<String>, ttl_secs: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::seconds(ttl_secs as i64)).timestamp();

        Self {
            sub: user_id.to_string(),
            email: email.into(),
            exp,
            iat: now.timestamp(),
        }
    }

    pub fn user_id(&self) -> Result<Uuid, JwtError> {
        Uuid::parse_str(&self.sub).map_err(|_| JwtError::InvalidSubject)
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Session token has expired")]
    Expired,

    #[error("Invalid session token: {0}")]
    Invalid(String),

    #[error("Session token subject is not a user id")]
    InvalidSubject,
}

pub fn generate_jwt(claims: &Claims, security: &SecurityConfig) -> Result<String, JwtError> {
    let secret = &security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Check signature and expiry, returning the claims of a valid token.
pub fn decode_jwt(token: &str, security: &SecurityConfig) -> Result<Claims, JwtError> {
    let secret = &security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => JwtError::Expired,
            _ => JwtError::Invalid(e.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn security() -> SecurityConfig {
        let mut security = AppConfig::development().security;
        security.jwt_secret = "unit-test-secret".to_string();
        security
    }

    #[test]
    fn round_trips_claims() {
        let security = security();
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id, "ola@example.com", 3600);

        let token = generate_jwt(&claims, &security).unwrap();
        let decoded = decode_jwt(&token, &security).unwrap();

        assert_eq!(decoded, claims);
        assert_eq!(decoded.user_id().unwrap(), user_id);
        assert!(decoded.exp > Utc::now().timestamp());
        assert_eq!(decoded.exp - decoded.iat, 3600);
    }

    #[test]
    fn refuses_to_sign_without_a_secret() {
        let mut security = security();
        security.jwt_secret.clear();
        let claims = Claims::new(Uuid::new_v4(), "ola@example.com", 3600);
        assert!(matches!(generate_jwt(&claims, &security), Err(JwtError::InvalidSecret)));
    }

    #[test]
    fn rejects_tokens_signed_with_another_secret() {
        let claims = Claims::new(Uuid::new_v4(), "ola@example.com", 3600);
        let token = generate_jwt(&claims, &security()).unwrap();

        let mut other = security();
        other.jwt_secret = "someone-else".to_string();
        assert!(matches!(decode_jwt(&token, &other), Err(JwtError::Invalid(_))));
    }

    #[test]
    fn rejects_expired_tokens() {
        let security = security();
        let mut claims = Claims::new(Uuid::new_v4(), "ola@example.com", 3600);
        claims.iat -= 7200;
        claims.exp = claims.iat + 60;

        let token = generate_jwt(&claims, &security).unwrap();
        assert!(matches!(decode_jwt(&token, &security), Err(JwtError::Expired)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(decode_jwt("not.a.jwt", &security()), Err(JwtError::Invalid(_))));
    }
}
