//! Application Layer
//!
//! Use cases for the donation lifecycle.

pub mod config;
pub mod create_payment_intent;
pub mod finalize_payment;
pub mod history;
pub mod record_intent;

// Re-exports
pub use config::DonationConfig;
pub use create_payment_intent::CreatePaymentIntentUseCase;
pub use finalize_payment::{FinalizeOutput, FinalizePaymentInput, FinalizePaymentUseCase};
pub use history::DonationHistoryUseCase;
pub use record_intent::{RecordIntentInput, RecordIntentUseCase};
