use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;

/// Name of the session cookie carried by browsers after login.
pub const SESSION_COOKIE: &str = "session_token";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Owner identity, opaque to this service
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        let ttl_hours = config::config().security.session_ttl_hours;
        let exp = (now + Duration::hours(ttl_hours as i64)).timestamp();

        Self {
            sub: user_id.into(),
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum SessionTokenError {
    /// Covers missing, expired, tampered, and wrong-secret tokens alike.
    /// Callers must not be able to tell these apart.
    InvalidToken,
    TokenGeneration(String),
}

impl std::fmt::Display for SessionTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionTokenError::InvalidToken => write!(f, "Invalid session token"),
            SessionTokenError::TokenGeneration(msg) => {
                write!(f, "Session token generation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SessionTokenError {}

/// Sign a session token for the given claims.
pub fn issue_session_token(claims: &Claims) -> Result<String, SessionTokenError> {
    let secret = &config::config().security.session_secret;

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, claims, &encoding_key)
        .map_err(|e| SessionTokenError::TokenGeneration(e.to_string()))
}

/// Verify a session token and return its claims.
///
/// Every decode failure collapses to `InvalidToken`; the underlying reason
/// is logged at debug level only.
pub fn verify_session_token(token: &str) -> Result<Claims, SessionTokenError> {
    let secret = &config::config().security.session_secret;

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    match decode::<Claims>(token, &decoding_key, &validation) {
        Ok(token_data) => Ok(token_data.claims),
        Err(e) => {
            tracing::debug!("Session token rejected: {}", e);
            Err(SessionTokenError::InvalidToken)
        }
    }
}

/// Set-Cookie value that expires the session cookie immediately.
pub fn clear_session_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0",
        SESSION_COOKIE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips() {
        let claims = Claims::new("user-1");
        let token = issue_session_token(&claims).unwrap();
        let decoded = verify_session_token(&token).unwrap();
        assert_eq!(decoded.sub, "user-1");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn expired_token_is_invalid() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "user-1".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = issue_session_token(&claims).unwrap();
        assert!(matches!(
            verify_session_token(&token),
            Err(SessionTokenError::InvalidToken)
        ));
    }

    #[test]
    fn tampered_token_is_invalid() {
        let token = issue_session_token(&Claims::new("user-1")).unwrap();
        // Corrupt the signature segment
        let mut tampered = token;
        let replacement = if tampered.ends_with('x') { 'y' } else { 'x' };
        tampered.pop();
        tampered.push(replacement);
        assert!(matches!(
            verify_session_token(&tampered),
            Err(SessionTokenError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_invalid() {
        assert!(matches!(
            verify_session_token("not-a-jwt"),
            Err(SessionTokenError::InvalidToken)
        ));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie();
        assert!(cookie.starts_with("session_token=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("HttpOnly"));
    }
}
