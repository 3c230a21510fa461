//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{DonorIntent, Payment};
use crate::error::DonationResult;

/// Donor intent repository trait
#[trait_variant::make(DonorIntentRepository: Send)]
pub trait LocalDonorIntentRepository {
    /// Record a new donor intent
    async fn create(&self, intent: &DonorIntent) -> DonationResult<()>;

    /// List pending intents for an email, store-native order
    async fn list_by_email(&self, email: &str) -> DonationResult<Vec<DonorIntent>>;

    /// Delete every pending intent for an email, returning the count
    async fn delete_by_email(&self, email: &str) -> DonationResult<u64>;
}

/// Payment repository trait
#[trait_variant::make(PaymentRepository: Send)]
pub trait LocalPaymentRepository {
    /// Record a settled payment
    async fn create(&self, payment: &Payment) -> DonationResult<()>;

    /// List settlements for an email, store-native order
    async fn list_by_email(&self, email: &str) -> DonationResult<Vec<Payment>>;
}
