//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Campaign, Review};

/// One campaign in GET /campaigns
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub goal_amount: i64,
    pub image_url: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id.into_uuid(),
            title: campaign.title,
            description: campaign.description,
            goal_amount: campaign.goal_amount,
            image_url: campaign.image_url,
            deadline: campaign.deadline,
            created_at: campaign.created_at,
        }
    }
}

/// Request for POST /reviews
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub rating: i16,
    pub comment: String,
}

/// One review in GET /reviews
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.into_uuid(),
            name: review.reviewer_name,
            email: review.reviewer_email,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}
