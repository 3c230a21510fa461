//! Access Token Service
//!
//! Issues and verifies the signed, time-limited tokens that gate the
//! donation and admin surfaces. Tokens are stateless; nothing is persisted.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::AuthResult;

/// Claim keys that are always set by the service itself
const RESERVED_CLAIMS: [&str; 5] = ["sub", "email", "iat", "exp", "iss"];

/// Identity payload carried inside a signed access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the identity email)
    pub sub: String,
    /// Identity email, duplicated for callers that read it by name
    pub email: String,
    /// Issued-at timestamp (seconds)
    pub iat: i64,
    /// Expiration timestamp (seconds)
    pub exp: i64,
    /// Issuer
    pub iss: String,
    /// Any further caller-supplied identity fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Access token service - issues and verifies signed tokens
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl_secs: i64,
}

impl TokenService {
    /// Create the service from auth configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            issuer: config.token_issuer.clone(),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Issue a token for the given identity email
    ///
    /// The email is not checked against the user store; possession of a
    /// token only proves that the holder requested one for that email.
    /// Extra payload fields travel along inside the token, except the
    /// registered claims, which always come from the service.
    pub fn issue(
        &self,
        email: &str,
        mut extra: serde_json::Map<String, serde_json::Value>,
    ) -> AuthResult<String> {
        for key in RESERVED_CLAIMS {
            extra.remove(key);
        }

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: email.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
            iss: self.issuer.clone(),
            extra,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;

        tracing::debug!(email = %email, "Access token issued");

        Ok(token)
    }

    /// Verify a token's signature, expiry, and issuer
    ///
    /// Pure and side-effect-free; failure carries no state to roll back.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        Ok(data.claims)
    }
}
