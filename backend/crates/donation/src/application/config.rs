//! Application Configuration
//!
//! Configuration for the Donation application layer.

use std::time::Duration;

/// Donation application configuration
#[derive(Debug, Clone)]
pub struct DonationConfig {
    /// Settlement currency for payment intents
    pub currency: String,
    /// Upper bound on a single processor call
    pub processor_timeout: Duration,
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            currency: "usd".to_string(),
            processor_timeout: Duration::from_secs(10),
        }
    }
}
