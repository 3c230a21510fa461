//! Finalize Payment Use Case
//!
//! Writes the settlement record, then clears every pending intent for the
//! payment's email.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Payment;
use crate::domain::repository::{DonorIntentRepository, PaymentRepository};
use crate::error::DonationResult;

/// Finalize payment input
///
/// Taken from the caller's payment payload as-is; the email selects which
/// pending intents are cleared.
pub struct FinalizePaymentInput {
    pub email: String,
    pub amount: i64,
    pub transaction_id: Option<String>,
}

/// Finalize payment output
pub struct FinalizeOutput {
    pub payment_id: Uuid,
    pub cleared_intents: u64,
}

/// Finalize payment use case
pub struct FinalizePaymentUseCase<P, D>
where
    P: PaymentRepository,
    D: DonorIntentRepository,
{
    payment_repo: Arc<P>,
    intent_repo: Arc<D>,
}

impl<P, D> FinalizePaymentUseCase<P, D>
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

    /// Insert one payment row, then bulk-delete the email's pending intents
    ///
    /// The two statements are not atomic. If the delete fails after the
    /// insert, the settlement stands, the stale intents remain, and the
    /// error surfaces to the caller.
    pub async fn execute(&self, input: FinalizePaymentInput) -> DonationResult<FinalizeOutput> {
        let payment = Payment::new(input.email, input.amount, input.transaction_id);

        self.payment_repo.create(&payment).await?;

        let cleared = self.intent_repo.delete_by_email(&payment.email).await?;

        tracing::info!(
            payment_id = %payment.id,
            email = %payment.email,
            amount = payment.amount,
            cleared_intents = cleared,
            "Payment finalized"
        );

        Ok(FinalizeOutput {
            payment_id: payment.id.into_uuid(),
            cleared_intents: cleared,
        })
    }
}
