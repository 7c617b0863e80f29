// Handlers are organized by security tier, as routed in main.rs:
// public (no session required) and protected (session cookie required),
// plus the browser-facing page shells.
pub mod pages;
pub mod protected;
pub mod public;

use crate::error::ApiError;

/// Shared method fallback so wrong-method requests answer 405 in the same
/// error envelope as every other failure (axum's default 405 has no body).
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("HTTP method not supported on this route")
}
