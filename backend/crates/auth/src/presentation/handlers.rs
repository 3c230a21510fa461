//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use kernel::receipt::InsertReceipt;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::register_user::{RegisterUserInput, RegisterUserUseCase};
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{RegisterUserRequest, TokenRequest, TokenResponse, UserResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Token Issuance
// ============================================================================

/// POST /jwt
///
/// Signs whatever identity payload the caller provides. The email is not
/// checked against the user store.
pub async fn issue_token<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<TokenRequest>,
) -> AuthResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = state.tokens.issue(&req.email, req.extra)?;

    Ok(Json(TokenResponse { token }))
}

// ============================================================================
// User Registration
// ============================================================================

/// POST /users
pub async fn register_user<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterUserRequest>,
) -> AuthResult<Json<InsertReceipt>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUserUseCase::new(state.repo.clone());

    let input = RegisterUserInput {
        email: req.email,
        display_name: req.display_name,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(InsertReceipt::new(output.user_id)))
}

// ============================================================================
// User Listing (admin gated at the router)
// ============================================================================

/// GET /users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let users = state.repo.list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
