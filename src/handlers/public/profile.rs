use axum::extract::Query;
use serde::Deserialize;
use serde_json::json;

use crate::badges;
use crate::error::ApiError;
use crate::middleware::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct BadgeQuery {
    pub name: Option<String>,
}

/// GET /api/profile/badge?name= - resolve a badge name to its image path.
/// Unknown names resolve to the default badge image rather than erroring.
pub async fn badge_get(Query(query): Query<BadgeQuery>) -> Result<ApiResponse, ApiError> {
    let name = match query.name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(ApiError::validation_error("name is required")),
    };

    let image = badges::image_path(&name);
    Ok(ApiResponse::new("Badge retrieved").with("badge", json!({ "name": name, "image": image })))
}
