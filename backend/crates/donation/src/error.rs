//! Donation Error Types
//!
//! This module provides donation-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Donation-specific result type alias
pub type DonationResult<T> = Result<T, DonationError>;

/// Donation-specific error variants
#[derive(Debug, Error)]
pub enum DonationError {
    /// Payment-intent request without a usable amount
    #[error("Amount is required")]
    AmountRequired,

    /// The processor rejected the request (declined, rate-limited, ...)
    #[error("Payment processor error: {0}")]
    Processor(String),

    /// The processor could not be reached (network failure, timeout)
    #[error("Payment processor request failed: {0}")]
    ProcessorUnavailable(#[from] reqwest::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DonationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DonationError::AmountRequired => StatusCode::BAD_REQUEST,
            DonationError::Processor(_)
            | DonationError::ProcessorUnavailable(_)
            | DonationError::Database(_)
            | DonationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DonationError::AmountRequired => ErrorKind::BadRequest,
            DonationError::Processor(_)
            | DonationError::ProcessorUnavailable(_)
            | DonationError::Database(_)
            | DonationError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DonationError::Database(e) => {
                tracing::error!(error = %e, "Donation database error");
            }
            DonationError::Processor(msg) => {
                tracing::error!(message = %msg, "Payment processor rejected request");
            }
            DonationError::ProcessorUnavailable(e) => {
                tracing::error!(error = %e, "Payment processor unreachable");
            }
            DonationError::Internal(msg) => {
                tracing::error!(message = %msg, "Donation internal error");
            }
            DonationError::AmountRequired => {
                tracing::debug!("Payment intent requested without an amount");
            }
        }
    }
}

impl IntoResponse for DonationError {
    fn into_response(self) -> Response {
        self.log();
        // The payment routes answer with the legacy `{"error": ...}` shape
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
