//! Donation Router

use auth::application::token::TokenService;
use auth::presentation::middleware::{TokenVerifierState, require_token};
use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::DonationConfig;
use crate::domain::processor::PaymentProcessor;
use crate::domain::repository::{DonorIntentRepository, PaymentRepository};
use crate::infra::postgres::PgDonationRepository;
use crate::infra::stripe::StripeClient;
use crate::presentation::handlers::{self, DonationAppState};

/// Create the Donation router with PostgreSQL repository and Stripe client
pub fn donation_router(
    repo: PgDonationRepository,
    processor: StripeClient,
    tokens: TokenService,
    config: DonationConfig,
) -> Router {
    donation_router_generic(repo, processor, tokens, config)
}

/// Create a generic Donation router for any repository and processor
pub fn donation_router_generic<R, P>(
    repo: R,
    processor: P,
    tokens: TokenService,
    config: DonationConfig,
) -> Router
where
    R: DonorIntentRepository + PaymentRepository + Clone + Send + Sync + 'static,
    P: PaymentProcessor + Clone + Send + Sync + 'static,
{
    let state = DonationAppState {
        repo: Arc::new(repo),
        processor: Arc::new(processor),
        config: Arc::new(config),
    };

    let verifier = TokenVerifierState {
        tokens: Arc::new(tokens),
    };

    Router::new()
        .route(
            "/donar-info",
            post(handlers::record_intent::<R, P>)
                .layer(from_fn_with_state(verifier, require_token)),
        )
        .route("/donar-info/{email}", get(handlers::list_pending::<R, P>))
        .route(
            "/create-payment-intent",
            post(handlers::create_payment_intent::<R, P>),
        )
        .route("/payment", post(handlers::finalize_payment::<R, P>))
        .route("/payment/{email}", get(handlers::list_payments::<R, P>))
        .with_state(state)
}
