//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Campaign, Review};
use crate::error::CatalogResult;
use uuid::Uuid;

/// Campaign repository trait
#[trait_variant::make(CampaignRepository: Send)]
pub trait LocalCampaignRepository {
    /// List all campaigns, store-native order
    async fn list(&self) -> CatalogResult<Vec<Campaign>>;

    /// Find one campaign by id
    async fn find_by_id(&self, campaign_id: Uuid) -> CatalogResult<Option<Campaign>>;
}

/// Review repository trait
#[trait_variant::make(ReviewRepository: Send)]
pub trait LocalReviewRepository {
    /// List all reviews, store-native order
    async fn list(&self) -> CatalogResult<Vec<Review>>;

    /// Store a new review
    async fn create(&self, review: &Review) -> CatalogResult<()>;
}
