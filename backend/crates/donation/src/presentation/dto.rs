//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::receipt::{DeleteReceipt, InsertReceipt};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{DonorIntent, Payment};

// ============================================================================
// Donor Intent
// ============================================================================

/// Request for POST /donar-info
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordIntentRequest {
    pub email: String,
    pub amount: i64,
    pub campaign_id: Uuid,
}

/// One pending intent in GET /donar-info/{email}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorIntentResponse {
    pub id: Uuid,
    pub email: String,
    pub amount: i64,
    pub campaign_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<DonorIntent> for DonorIntentResponse {
    fn from(intent: DonorIntent) -> Self {
        Self {
            id: intent.id.into_uuid(),
            email: intent.email,
            amount: intent.amount,
            campaign_id: intent.campaign_id,
            created_at: intent.created_at,
        }
    }
}

// ============================================================================
// Payment Intent
// ============================================================================

/// Request for POST /create-payment-intent
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    /// Absent and zero are both rejected before the processor is called
    #[serde(default)]
    pub amount_in_cents: Option<i64>,
}

/// Response for POST /create-payment-intent
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub client_secret: String,
}

// ============================================================================
// Settlement
// ============================================================================

/// Request for POST /payment
///
/// Unknown fields in the caller's payment payload are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizePaymentRequest {
    pub email: String,
    pub amount: i64,
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// Response for POST /payment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalizePaymentResponse {
    pub insert_result: InsertReceipt,
    pub delete_result: DeleteReceipt,
}

/// One settlement in GET /payment/{email}
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: Uuid,
    pub email: String,
    pub amount: i64,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id.into_uuid(),
            email: payment.email,
            amount: payment.amount,
            transaction_id: payment.transaction_id,
            created_at: payment.created_at,
        }
    }
}
