//! Payment Processor Seam
//!
//! Trait boundary for the external card processor. The real client lives
//! in the infrastructure layer; tests substitute a stub.

use crate::error::DonationResult;

/// A payment intent created at the processor
///
/// Ephemeral: handed to the client as a secret, never persisted here.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    /// Processor-side intent identifier
    pub id: String,
    /// Client-usable secret for completing the card payment
    pub client_secret: String,
}

/// Payment processor trait
#[trait_variant::make(PaymentProcessor: Send)]
pub trait LocalPaymentProcessor {
    /// Create a card-payable intent for the given amount and currency
    async fn create_intent(
        &self,
        amount_cents: i64,
        currency: &str,
    ) -> DonationResult<PaymentIntent>;
}
