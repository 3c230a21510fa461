//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod register_user;
pub mod require_admin;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use register_user::{RegisterUserInput, RegisterUserOutput, RegisterUserUseCase};
pub use require_admin::RequireAdminUseCase;
pub use token::{Claims, TokenService};
