use axum::http::header;
use axum::response::IntoResponse;

use crate::auth;
use crate::middleware::response::ApiResponse;

/// POST /api/auth/logout - clear the session cookie
///
/// Always answers 200, whether or not a valid session was presented; the
/// cookie is expired either way.
pub async fn logout_post() -> impl IntoResponse {
    (
        [(header::SET_COOKIE, auth::clear_session_cookie())],
        ApiResponse::new("Logged out"),
    )
}
