//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Campaign, Review};
use crate::domain::repository::{CampaignRepository, ReviewRepository};
use crate::error::CatalogResult;

/// PostgreSQL-backed catalog repository
#[derive(Clone)]
pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CampaignRepository for PgCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<Campaign>> {
        let rows = sqlx::query_as::<_, CampaignRow>(
            r#"
            SELECT campaign_id, title, description, goal_amount,
                   image_url, deadline, created_at
            FROM campaigns
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CampaignRow::into_campaign).collect())
    }

    async fn find_by_id(&self, campaign_id: Uuid) -> CatalogResult<Option<Campaign>> {
        let row = sqlx::query_as::<_, CampaignRow>(
            r#"
            SELECT campaign_id, title, description, goal_amount,
                   image_url, deadline, created_at
            FROM campaigns
            WHERE campaign_id = $1
            "#,
        )
        .bind(campaign_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CampaignRow::into_campaign))
    }
}

impl ReviewRepository for PgCatalogRepository {
    async fn list(&self) -> CatalogResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT review_id, reviewer_name, reviewer_email, rating, comment, created_at
            FROM reviews
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ReviewRow::into_review).collect())
    }

    async fn create(&self, review: &Review) -> CatalogResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reviews (
                review_id,
                reviewer_name,
                reviewer_email,
                rating,
                comment,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(review.id.as_uuid())
        .bind(&review.reviewer_name)
        .bind(review.reviewer_email.as_deref())
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(review_id = %review.id, "Review stored");

        Ok(())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct CampaignRow {
    campaign_id: Uuid,
    title: String,
    description: String,
    goal_amount: i64,
    image_url: Option<String>,
    deadline: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl CampaignRow {
    fn into_campaign(self) -> Campaign {
        Campaign {
            id: self.campaign_id.into(),
            title: self.title,
            description: self.description,
            goal_amount: self.goal_amount,
            image_url: self.image_url,
            deadline: self.deadline,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewRow {
    review_id: Uuid,
    reviewer_name: String,
    reviewer_email: Option<String>,
    rating: i16,
    comment: String,
    created_at: DateTime<Utc>,
}

impl ReviewRow {
    fn into_review(self) -> Review {
        Review {
            id: self.review_id.into(),
            reviewer_name: self.reviewer_name,
            reviewer_email: self.reviewer_email,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}
