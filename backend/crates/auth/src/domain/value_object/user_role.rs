use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
pub enum UserRole {
    #[default]
    Member = 0,
    Admin = 1,
}

impl UserRole {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Member => "member",
            UserRole::Admin => "admin",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Map a stored role id back to a role; unknown ids fall back to Member
    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            1 => UserRole::Admin,
            0 => UserRole::Member,
            _ => {
                tracing::error!(role_id = id, "Unknown user role id, treating as member");
                UserRole::Member
            }
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Self {
        match code {
            "admin" => UserRole::Admin,
            _ => UserRole::Member,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
