//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{CampaignId, ReviewId};

/// Fundraising campaign
///
/// Seeded outside this service; this core only reads campaigns.
#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub description: String,
    pub goal_amount: i64,
    pub image_url: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Platform review left by a visitor
#[derive(Debug, Clone)]
pub struct Review {
    pub id: ReviewId,
    pub reviewer_name: String,
    pub reviewer_email: Option<String>,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        reviewer_name: String,
        reviewer_email: Option<String>,
        rating: i16,
        comment: String,
    ) -> Self {
        Self {
            id: ReviewId::new(),
            reviewer_name,
            reviewer_email,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }
}
