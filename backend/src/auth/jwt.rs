//! Session token issuance and validation
//!
//! Tokens are HS256 JWTs carrying the subject's id and username. Keys are
//! derived once from the configured secret and shared behind `Arc`.

use auth_gate_shared::Identity;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Session token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject id
    pub id: String,
    /// Subject username
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            username: self.username.clone(),
        }
    }
}

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token signing secret is not configured")]
    MissingSecret,

    #[error("Token lifetime out of range: {0} seconds")]
    InvalidExpiry(i64),

    #[error("Failed to sign token: {0}")]
    Encode(jsonwebtoken::errors::Error),

    #[error("Invalid token: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

/// Pre-computed JWT keys for efficient token operations
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Issues signed, time-limited session tokens
///
/// Call [`TokenIssuer::new`] once at startup and keep it in `AppState`;
/// cloning is cheap.
#[derive(Clone)]
pub struct TokenIssuer {
    keys: JwtKeys,
    expiry_secs: i64,
}

impl TokenIssuer {
    /// Longest accepted token lifetime (30 days)
    pub const MAX_EXPIRY_SECS: i64 = 30 * 24 * 60 * 60;

    /// Create an issuer. An empty secret or a lifetime outside
    /// `1..=MAX_EXPIRY_SECS` is a configuration error.
    pub fn new(secret: &str, expiry_secs: i64) -> Result<Self, TokenError> {
        if secret.trim().is_empty() {
            return Err(TokenError::MissingSecret);
        }
        if !(1..=Self::MAX_EXPIRY_SECS).contains(&expiry_secs) {
            return Err(TokenError::InvalidExpiry(expiry_secs));
        }

        Ok(Self {
            keys: JwtKeys::new(secret),
            expiry_secs,
        })
    }

    /// Issue a token for a verified identity, expiring `expiry_secs` from now
    #[inline]
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, TokenError> {
        let exp = now + Duration::seconds(self.expiry_secs);

        let claims = Claims {
            id: identity.id.clone(),
            username: identity.username.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(TokenError::Encode)
    }

    /// Validate signature and expiry and return the claims
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        let token_data =
            decode::<Claims>(token, self.keys.decoding(), &validation).map_err(TokenError::Invalid)?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Identity {
        Identity {
            id: "42".to_string(),
            username: "alice".to_string(),
        }
    }

    fn create_test_issuer() -> TokenIssuer {
        TokenIssuer::new("test-secret", 3600).unwrap()
    }

    #[test]
    fn test_issue_and_decode() {
        let issuer = create_test_issuer();
        let before = Utc::now().timestamp();

        let token = issuer.issue(&alice()).unwrap();
        let claims = issuer.decode(&token).unwrap();

        assert_eq!(claims.identity(), alice());
        assert!(claims.exp - before >= 3600);
        assert!(claims.exp - before <= 3605);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_test_issuer().issue(&alice()).unwrap();
        let other = TokenIssuer::new("another-secret", 3600).unwrap();

        assert!(matches!(other.decode(&token), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = create_test_issuer();
        let token = issuer
            .issue_at(&alice(), Utc::now() - Duration::hours(3))
            .unwrap();

        assert!(issuer.decode(&token).is_err());
    }

    #[test]
    fn test_same_instant_same_token() {
        let issuer = create_test_issuer();
        let now = Utc::now();

        let a = issuer.issue_at(&alice(), now).unwrap();
        let b = issuer.issue_at(&alice(), now).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        assert!(matches!(
            TokenIssuer::new("", 3600),
            Err(TokenError::MissingSecret)
        ));
        assert!(matches!(
            TokenIssuer::new("   ", 3600),
            Err(TokenError::MissingSecret)
        ));
    }

    #[test]
    fn test_out_of_range_lifetime_is_rejected() {
        for expiry in [0, -60, TokenIssuer::MAX_EXPIRY_SECS + 1, i64::MAX] {
            assert!(matches!(
                TokenIssuer::new("test-secret", expiry),
                Err(TokenError::InvalidExpiry(e)) if e == expiry
            ));
        }
        assert!(TokenIssuer::new("test-secret", TokenIssuer::MAX_EXPIRY_SECS).is_ok());
    }

    #[test]
    fn test_invalid_token_rejected() {
        assert!(create_test_issuer().decode("invalid.token.here").is_err());
    }

    #[test]
    fn test_issuer_is_clone_cheap() {
        let issuer = create_test_issuer();
        let cloned = issuer.clone();

        let token = issuer.issue(&alice()).unwrap();
        assert_eq!(cloned.decode(&token).unwrap().username, "alice");
    }
}
