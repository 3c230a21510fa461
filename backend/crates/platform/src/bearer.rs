//! Bearer Credential Extraction
//!
//! Common handling for `Authorization: Bearer <token>` request headers.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from the Authorization header
///
/// Returns `None` when the header is absent, not valid UTF-8, uses a
/// different scheme, or carries an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
