//! Catalog Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::{CampaignRepository, ReviewRepository};
use crate::infra::postgres::PgCatalogRepository;
use crate::presentation::handlers::{self, CatalogAppState};

/// Create the Catalog router with PostgreSQL repository
pub fn catalog_router(repo: PgCatalogRepository) -> Router {
    catalog_router_generic(repo)
}

/// Create a generic Catalog router for any repository implementation
pub fn catalog_router_generic<R>(repo: R) -> Router
where
    R: CampaignRepository + ReviewRepository + Clone + Send + Sync + 'static,
{
    let state = CatalogAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/campaigns", get(handlers::list_campaigns::<R>))
        .route("/campaigns/{id}", get(handlers::get_campaign::<R>))
        .route("/reviews", get(handlers::list_reviews::<R>))
        .route("/reviews", post(handlers::create_review::<R>))
        .with_state(state)
}
