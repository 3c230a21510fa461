//! Record Intent Use Case
//!
//! Stores a donor's intent to give. Token verification happens at the
//! router; by the time this runs the caller is authenticated.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::DonorIntent;
use crate::domain::repository::DonorIntentRepository;
use crate::error::DonationResult;

/// Record intent input
pub struct RecordIntentInput {
    pub email: String,
    pub amount: i64,
    pub campaign_id: Uuid,
}

/// Record intent use case
pub struct RecordIntentUseCase<D>
where
    D: DonorIntentRepository,
{
    intent_repo: Arc<D>,
}

impl<D> RecordIntentUseCase<D>
where
    D: DonorIntentRepository,
{
    pub fn new(intent_repo: Arc<D>) -> Self {
        Self { intent_repo }
    }

    /// Append one pending intent; repeated calls for the same email stack up
    pub async fn execute(&self, input: RecordIntentInput) -> DonationResult<DonorIntent> {
        let intent = DonorIntent::new(input.email, input.amount, input.campaign_id);

        self.intent_repo.create(&intent).await?;

        tracing::info!(
            intent_id = %intent.id,
            email = %intent.email,
            amount = intent.amount,
            campaign_id = %intent.campaign_id,
            "Donor intent recorded"
        );

        Ok(intent)
    }
}
