use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::{self, Claims, SESSION_COOKIE};
use crate::error::ApiError;

/// Authenticated user context extracted from the session cookie
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
        }
    }
}

/// Guard for API routes: missing or invalid session answers 401 JSON.
pub async fn require_session_api(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user =
        session_user(&headers).ok_or_else(|| ApiError::unauthorized("Not authenticated"))?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Guard for page routes: missing or invalid session redirects to the login
/// page instead of answering a status code.
pub async fn require_session_page(headers: HeaderMap, mut request: Request, next: Next) -> Response {
    match session_user(&headers) {
        Some(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}

/// Single authorization decision point shared by both adapters. Missing
/// cookie, expired token, and bad signature all land in the same None.
fn session_user(headers: &HeaderMap) -> Option<AuthUser> {
    let token = extract_session_cookie(headers)?;
    auth::verify_session_token(&token).ok().map(AuthUser::from)
}

/// Extract the session token from the Cookie header
fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        if name == SESSION_COOKIE && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}
