//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{DonorIntentId, PaymentId};
use uuid::Uuid;

/// A donor's recorded intent to give, awaiting settlement
///
/// The email is stored as supplied by the caller; multiple intents per
/// email are expected and never deduplicated.
#[derive(Debug, Clone)]
pub struct DonorIntent {
    pub id: DonorIntentId,
    pub email: String,
    pub amount: i64,
    pub campaign_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl DonorIntent {
    pub fn new(email: String, amount: i64, campaign_id: Uuid) -> Self {
        Self {
            id: DonorIntentId::new(),
            email,
            amount,
            campaign_id,
            created_at: Utc::now(),
        }
    }
}

/// Durable record of a completed payment
///
/// Append-only; rows are never updated or deleted.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: PaymentId,
    pub email: String,
    pub amount: i64,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(email: String, amount: i64, transaction_id: Option<String>) -> Self {
        Self {
            id: PaymentId::new(),
            email,
            amount,
            transaction_id,
            created_at: Utc::now(),
        }
    }
}
