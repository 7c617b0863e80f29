use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use journal_api::handlers;
use journal_api::middleware::auth::{require_session_api, require_session_page};
use journal_api::{is_production, database::manager::DatabaseManager};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, SESSION_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = journal_api::config::config();
    tracing::info!("Starting Journal API in {:?} mode", config.environment);

    if config.security.uses_default_secret() {
        if is_production!() {
            tracing::error!(
                "SESSION_SECRET is unset; sessions are signed with the built-in development secret"
            );
        } else {
            tracing::warn!("SESSION_SECRET is unset; using the built-in development secret");
        }
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("JOURNAL_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("Journal API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let config = journal_api::config::config();

    let mut app = Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Browser-facing pages
        .merge(page_routes())
        // Journal API
        .merge(journal_routes())
        .merge(profile_routes())
        // Session management
        .merge(auth_routes())
        // Global middleware
        .layer(CorsLayer::permissive());

    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

fn page_routes() -> Router {
    use journal_api::handlers::pages;

    let protected = Router::new()
        .route("/journal", get(pages::journal_page))
        .route_layer(middleware::from_fn(require_session_page));

    Router::new()
        .route("/login", get(pages::login_page))
        .merge(protected)
}

fn journal_routes() -> Router {
    use journal_api::handlers::public::{journal, theme};

    Router::new()
        .route(
            "/api/journal/freeform",
            post(journal::freeform_post).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/fetch-journal/journal",
            get(journal::journal_get).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/create-journal/theme",
            get(theme::theme_get).fallback(handlers::method_not_allowed),
        )
}

fn profile_routes() -> Router {
    use journal_api::handlers::public::profile;

    Router::new().route(
        "/api/profile/badge",
        get(profile::badge_get).fallback(handlers::method_not_allowed),
    )
}

fn auth_routes() -> Router {
    let protected = Router::new()
        .route(
            "/api/auth/session",
            get(handlers::protected::auth::session_get).fallback(handlers::method_not_allowed),
        )
        .route_layer(middleware::from_fn(require_session_api));

    Router::new()
        .route(
            "/api/auth/logout",
            post(handlers::public::auth::logout_post).fallback(handlers::method_not_allowed),
        )
        .merge(protected)
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "message": "Journal API",
        "data": {
            "name": "Journal API",
            "version": version,
            "description": "Journaling backend: session-authenticated entries plus theme and badge reference data",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "pages": "/journal (session), /login (public)",
                "journal": "POST /api/journal/freeform, GET /api/fetch-journal/journal?user_id=",
                "themes": "GET /api/create-journal/theme?theme=",
                "badges": "GET /api/profile/badge?name=",
                "auth": "GET /api/auth/session (session), POST /api/auth/logout",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "message": "ok",
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                axum::http::StatusCode::SERVICE_UNAVAILABLE,
                axum::response::Json(json!({
                    "error": true,
                    "message": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now,
                        "database": "unreachable"
                    }
                })),
            )
        }
    }
}
