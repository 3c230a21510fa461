//! Create Payment Intent Use Case
//!
//! Requests a card-payable intent from the processor. Has no persistent
//! side effect of its own; a failure leaves nothing to roll back.

use std::sync::Arc;

use crate::application::config::DonationConfig;
use crate::domain::processor::PaymentProcessor;
use crate::error::{DonationError, DonationResult};

/// Create payment intent use case
pub struct CreatePaymentIntentUseCase<P>
where
    P: PaymentProcessor,
{
    processor: Arc<P>,
    config: Arc<DonationConfig>,
}

impl<P> CreatePaymentIntentUseCase<P>
where
    P: PaymentProcessor,
{
    pub fn new(processor: Arc<P>, config: Arc<DonationConfig>) -> Self {
        Self { processor, config }
    }

    /// Validate the amount, then delegate to the processor
    ///
    /// The amount check runs before any external call; an absent or
    /// non-positive amount never reaches the processor.
    pub async fn execute(&self, amount_in_cents: Option<i64>) -> DonationResult<String> {
        let amount = amount_in_cents
            .filter(|a| *a > 0)
            .ok_or(DonationError::AmountRequired)?;

        let intent = self
            .processor
            .create_intent(amount, &self.config.currency)
            .await?;

        tracing::info!(
            intent_id = %intent.id,
            amount_cents = amount,
            currency = %self.config.currency,
            "Payment intent created"
        );

        Ok(intent.client_secret)
    }
}
