//! Auth Router

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{
    AdminGateState, TokenVerifierState, require_admin, require_token,
};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        tokens: Arc::new(TokenService::new(&config)),
        config: Arc::new(config),
    };

    let verifier = TokenVerifierState {
        tokens: state.tokens.clone(),
    };
    let gate = AdminGateState {
        repo: state.repo.clone(),
    };

    Router::new()
        .route("/jwt", post(handlers::issue_token::<R>))
        .route("/users", post(handlers::register_user::<R>))
        .route(
            "/users",
            // Token verification must wrap the admin gate so the claims
            // are present when the gate runs
            get(handlers::list_users::<R>)
                .layer(from_fn_with_state(gate, require_admin::<R>))
                .layer(from_fn_with_state(verifier, require_token)),
        )
        .with_state(state)
}
