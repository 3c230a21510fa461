//! Stripe Payment Processor Client
//!
//! Thin reqwest client over the Stripe payment-intents endpoint. The
//! request timeout is set on the underlying client, so a hung processor
//! call surfaces as `ProcessorUnavailable` instead of stalling a handler.

use serde::Deserialize;
use std::time::Duration;

use crate::domain::processor::{PaymentIntent, PaymentProcessor};
use crate::error::{DonationError, DonationResult};

const STRIPE_API_BASE: &str = "https://api.stripe.com";

/// Stripe-backed payment processor
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    secret_key: String,
    base_url: String,
}

impl StripeClient {
    /// Create a client with the account secret key and a call timeout
    pub fn new(secret_key: impl Into<String>, timeout: Duration) -> DonationResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            secret_key: secret_key.into(),
            base_url: STRIPE_API_BASE.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct PaymentIntentBody {
    id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

impl PaymentProcessor for StripeClient {
    async fn create_intent(
        &self,
        amount_cents: i64,
        currency: &str,
    ) -> DonationResult<PaymentIntent> {
        let params = [
            ("amount", amount_cents.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http
            .post(format!("{}/v1/payment_intents", self.base_url))
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| format!("processor returned {}", status));

            return Err(DonationError::Processor(message));
        }

        let body = response.json::<PaymentIntentBody>().await?;

        tracing::debug!(intent_id = %body.id, "Processor accepted payment intent");

        Ok(PaymentIntent {
            id: body.id,
            client_secret: body.client_secret,
        })
    }
}
