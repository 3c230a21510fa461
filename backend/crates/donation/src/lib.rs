//! Donation Backend Module
//!
//! Manages the life of a donation from recorded intent to settled payment.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits, processor trait
//! - `application/` - Use cases
//! - `infra/` - Database and payment-processor implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Lifecycle
//! `Intent (recorded)` → `PaymentIntentIssued (ephemeral, never persisted)`
//! → `Settled`. Intents accumulate per email with no deduplication;
//! settlement writes one payment row and clears every pending intent for
//! that email. The two settlement steps are separate statements and do not
//! run in a transaction; a concurrent intent insert may or may not be
//! observed by the clearing step.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::DonationConfig;
pub use error::{DonationError, DonationResult};
pub use infra::postgres::PgDonationRepository;
pub use infra::stripe::StripeClient;
pub use presentation::router::donation_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::processor::PaymentIntent;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgDonationRepository as DonationStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

#[cfg(test)]
mod tests;
