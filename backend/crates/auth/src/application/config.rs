//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Process-wide token signing secret
    pub token_secret: String,
    /// Issuer claim stamped into every token
    pub token_issuer: String,
    /// Token lifetime (1 hour)
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            token_issuer: "fundflow-api".to_string(),
            token_ttl: Duration::from_secs(3600),
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn new(token_secret: impl Into<String>) -> Self {
        Self {
            token_secret: token_secret.into(),
            ..Default::default()
        }
    }

    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}
