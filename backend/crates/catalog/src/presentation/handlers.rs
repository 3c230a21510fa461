//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use kernel::receipt::InsertReceipt;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Review;
use crate::domain::repository::{CampaignRepository, ReviewRepository};
use crate::error::{CatalogError, CatalogResult};
use crate::presentation::dto::{CampaignResponse, CreateReviewRequest, ReviewResponse};

/// Shared state for catalog handlers
#[derive(Clone)]
pub struct CatalogAppState<R>
where
    R: CampaignRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /campaigns
pub async fn list_campaigns<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<CampaignResponse>>>
where
    R: CampaignRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let campaigns = CampaignRepository::list(state.repo.as_ref()).await?;

    Ok(Json(
        campaigns.into_iter().map(CampaignResponse::from).collect(),
    ))
}

/// GET /campaigns/{id}
pub async fn get_campaign<R>(
    State(state): State<CatalogAppState<R>>,
    Path(id): Path<Uuid>,
) -> CatalogResult<Json<CampaignResponse>>
where
    R: CampaignRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let campaign = state
        .repo
        .find_by_id(id)
        .await?
        .ok_or(CatalogError::CampaignNotFound)?;

    Ok(Json(CampaignResponse::from(campaign)))
}

/// GET /reviews
pub async fn list_reviews<R>(
    State(state): State<CatalogAppState<R>>,
) -> CatalogResult<Json<Vec<ReviewResponse>>>
where
    R: CampaignRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let reviews = ReviewRepository::list(state.repo.as_ref()).await?;

    Ok(Json(reviews.into_iter().map(ReviewResponse::from).collect()))
}

/// POST /reviews
pub async fn create_review<R>(
    State(state): State<CatalogAppState<R>>,
    Json(req): Json<CreateReviewRequest>,
) -> CatalogResult<Json<InsertReceipt>>
where
    R: CampaignRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let review = Review::new(req.name, req.email, req.rating, req.comment);

    state.repo.create(&review).await?;

    Ok(Json(InsertReceipt::new(review.id.into_uuid())))
}
