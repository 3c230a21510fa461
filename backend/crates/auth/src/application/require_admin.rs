//! Require Admin Use Case
//!
//! Resolves whether a verified identity holds the admin role. One store
//! read per invocation, never cached; callers must run this after token
//! verification since the email is trusted.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Require admin use case
pub struct RequireAdminUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> RequireAdminUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    /// Fail with `AdminRequired` unless the email maps to an admin user
    pub async fn execute(&self, email: &str) -> AuthResult<User> {
        let email = Email::new(email).map_err(|_| AuthError::AdminRequired)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::AdminRequired)?;

        if !user.is_admin() {
            tracing::warn!(email = %user.email, "Admin access denied");
            return Err(AuthError::AdminRequired);
        }

        Ok(user)
    }
}
