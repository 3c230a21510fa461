//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{DonorIntent, Payment};
use crate::domain::repository::{DonorIntentRepository, PaymentRepository};
use crate::error::DonationResult;

/// PostgreSQL-backed donation repository
#[derive(Clone)]
pub struct PgDonationRepository {
    pool: PgPool,
}

impl PgDonationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl DonorIntentRepository for PgDonationRepository {
    async fn create(&self, intent: &DonorIntent) -> DonationResult<()> {
        sqlx::query(
            r#"
            INSERT INTO donor_intents (
                donor_intent_id,
                email,
                amount,
                campaign_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(intent.id.as_uuid())
        .bind(&intent.email)
        .bind(intent.amount)
        .bind(intent.campaign_id)
        .bind(intent.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_email(&self, email: &str) -> DonationResult<Vec<DonorIntent>> {
        // No ORDER BY: callers get store-native order
        let rows = sqlx::query_as::<_, DonorIntentRow>(
            r#"
            SELECT donor_intent_id, email, amount, campaign_id, created_at
            FROM donor_intents
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(DonorIntentRow::into_intent).collect())
    }

    async fn delete_by_email(&self, email: &str) -> DonationResult<u64> {
        let deleted = sqlx::query("DELETE FROM donor_intents WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(email = %email, deleted = deleted, "Pending intents cleared");

        Ok(deleted)
    }
}

impl PaymentRepository for PgDonationRepository {
    async fn create(&self, payment: &Payment) -> DonationResult<()> {
        sqlx::query(
            r#"
            INSERT INTO payments (
                payment_id,
                email,
                amount,
                transaction_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(payment.id.as_uuid())
        .bind(&payment.email)
        .bind(payment.amount)
        .bind(payment.transaction_id.as_deref())
        .bind(payment.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(
            payment_id = %payment.id,
            email = %payment.email,
            "Payment recorded"
        );

        Ok(())
    }

    async fn list_by_email(&self, email: &str) -> DonationResult<Vec<Payment>> {
        let rows = sqlx::query_as::<_, PaymentRow>(
            r#"
            SELECT payment_id, email, amount, transaction_id, created_at
            FROM payments
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PaymentRow::into_payment).collect())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct DonorIntentRow {
    donor_intent_id: Uuid,
    email: String,
    amount: i64,
    campaign_id: Uuid,
    created_at: DateTime<Utc>,
}

impl DonorIntentRow {
    fn into_intent(self) -> DonorIntent {
        DonorIntent {
            id: self.donor_intent_id.into(),
            email: self.email,
            amount: self.amount,
            campaign_id: self.campaign_id,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PaymentRow {
    payment_id: Uuid,
    email: String,
    amount: i64,
    transaction_id: Option<String>,
    created_at: DateTime<Utc>,
}

impl PaymentRow {
    fn into_payment(self) -> Payment {
        Payment {
            id: self.payment_id.into(),
            email: self.email,
            amount: self.amount,
            transaction_id: self.transaction_id,
            created_at: self.created_at,
        }
    }
}
