use axum::response::Html;
use axum::Extension;

use crate::middleware::auth::AuthUser;

/// GET /journal - shell for the journal client. Entry data loads through the
/// /api routes; an unauthenticated request never reaches this handler (the
/// page guard redirects to /login first).
pub async fn journal_page(Extension(user): Extension<AuthUser>) -> Html<String> {
    Html(format!(
        "<!doctype html>\n<html>\n<head><title>Journal</title></head>\n\
         <body data-user-id=\"{}\"><div id=\"app\"></div></body>\n</html>",
        user.user_id
    ))
}

/// GET /login - login page shell; token issuance itself happens at the
/// identity provider, not in this service.
pub async fn login_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\n<html>\n<head><title>Sign in</title></head>\n\
         <body><div id=\"login\"></div></body>\n</html>",
    )
}
