//! Auth Middleware
//!
//! Middleware gating routes on verified tokens and the admin role.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::require_admin::RequireAdminUseCase;
use crate::application::token::{Claims, TokenService};
use crate::domain::repository::UserRepository;
use crate::error::AuthError;

/// State for token verification middleware
#[derive(Clone)]
pub struct TokenVerifierState {
    pub tokens: Arc<TokenService>,
}

/// Middleware that requires a valid bearer token
///
/// On success the decoded claims are stored in request extensions for
/// downstream gates and handlers; on failure the request is rejected with
/// 401 before any handler logic runs.
pub async fn require_token(
    State(state): State<TokenVerifierState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(req.headers())
        .ok_or_else(|| AuthError::MissingToken.into_response())?;

    let claims = state
        .tokens
        .verify(&token)
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

/// State for the admin gate middleware
#[derive(Clone)]
pub struct AdminGateState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// Middleware that requires the verified identity to hold the admin role
///
/// Must be layered inside `require_token`: it reads the claims that
/// middleware stored in request extensions.
pub async fn require_admin<R>(
    State(state): State<AdminGateState<R>>,
    req: Request,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let claims = req
        .extensions()
        .get::<Claims>()
        .cloned()
        .ok_or_else(|| AuthError::MissingToken.into_response())?;

    let use_case = RequireAdminUseCase::new(state.repo.clone());

    use_case
        .execute(&claims.email)
        .await
        .map_err(|e| e.into_response())?;

    Ok(next.run(req).await)
}
