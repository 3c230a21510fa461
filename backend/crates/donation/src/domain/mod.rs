//! Domain Layer
//!
//! Entities, repository traits, and the payment processor seam.

pub mod entities;
pub mod processor;
pub mod repository;

// Re-exports
pub use entities::{DonorIntent, Payment};
pub use processor::{PaymentIntent, PaymentProcessor};
pub use repository::{DonorIntentRepository, PaymentRepository};
