use axum::Extension;
use serde_json::json;

use crate::middleware::auth::AuthUser;
use crate::middleware::response::ApiResponse;

/// GET /api/auth/session - report the currently authenticated user.
///
/// The guard has already verified the cookie; an invalid or missing session
/// never reaches this handler.
pub async fn session_get(Extension(user): Extension<AuthUser>) -> ApiResponse {
    ApiResponse::new("Session active").with("user", json!({ "user_id": user.user_id }))
}
