//! Donation History Use Case
//!
//! Read-through queries over pending intents and settled payments.

use std::sync::Arc;

use crate::domain::entities::{DonorIntent, Payment};
use crate::domain::repository::{DonorIntentRepository, PaymentRepository};
use crate::error::DonationResult;

/// Donation history use case
pub struct DonationHistoryUseCase<P, D>
where
    P: PaymentRepository,
    D: DonorIntentRepository,
{
    payment_repo: Arc<P>,
    intent_repo: Arc<D>,
}

impl<P, D> DonationHistoryUseCase<P, D>
where
    P: PaymentRepository,
    D: DonorIntentRepository,
{
    pub fn new(payment_repo: Arc<P>, intent_repo: Arc<D>) -> Self {
        Self {
            payment_repo,
            intent_repo,
        }
    }

    /// Pending intents for an email; a materialized snapshot, not a cursor
    pub async fn pending_for(&self, email: &str) -> DonationResult<Vec<DonorIntent>> {
        self.intent_repo.list_by_email(email).await
    }

    /// Settled payments for an email
    pub async fn settled_for(&self, email: &str) -> DonationResult<Vec<Payment>> {
        self.payment_repo.list_by_email(email).await
    }
}
