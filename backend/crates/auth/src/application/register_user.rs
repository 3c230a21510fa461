//! Register User Use Case
//!
//! Stores a new user record keyed by email.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Register user input
pub struct RegisterUserInput {
    pub email: String,
    pub display_name: Option<String>,
}

/// Register user output
#[derive(Debug)]
pub struct RegisterUserOutput {
    pub user_id: Uuid,
}

/// Register user use case
pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> AuthResult<RegisterUserOutput> {
        let email = Email::new(input.email)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        // Role is always Member here; escalation never happens through
        // registration
        let user = User::new(email, input.display_name);

        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(RegisterUserOutput {
            user_id: user.user_id.into_uuid(),
        })
    }
}
