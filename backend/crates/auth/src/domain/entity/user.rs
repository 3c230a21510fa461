//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_role::UserRole};

/// Registered platform user
///
/// The email is the external identifier; the role gates privileged
/// operations.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Email (unique, used as the identity claim in tokens)
    pub email: Email,
    /// Optional display name supplied at registration
    pub display_name: Option<String>,
    /// Role (Member, Admin)
    pub user_role: UserRole,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the default Member role
    pub fn new(email: Email, display_name: Option<String>) -> Self {
        Self {
            user_id: UserId::new(),
            email,
            display_name,
            user_role: UserRole::default(),
            created_at: Utc::now(),
        }
    }

    /// Check whether this user holds the admin role
    pub fn is_admin(&self) -> bool {
        self.user_role.is_admin()
    }
}
