//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Token Issuance
// ============================================================================

/// Request for POST /jwt
///
/// Only the email is required; any further fields ride along as token
/// claims.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRequest {
    pub email: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response for POST /jwt
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// User Registration
// ============================================================================

/// Request for POST /users
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

// ============================================================================
// User Listing (admin)
// ============================================================================

/// One user in the GET /users listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub email: String,
    pub display_name: Option<String>,
    pub user_role: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            email: user.email.to_string(),
            display_name: user.display_name,
            user_role: user.user_role.code().to_string(),
            created_at: user.created_at,
        }
    }
}
