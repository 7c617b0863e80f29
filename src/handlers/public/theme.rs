use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use crate::database::models::theme::ThemeWithCategories;
use crate::error::ApiError;
use crate::services::theme_service::ThemeService;

#[derive(Debug, Deserialize)]
pub struct ThemeQuery {
    pub theme: Option<String>,
}

/// GET /api/create-journal/theme?theme= - fetch a theme with its ordered
/// categories. Responds with the theme object itself, no envelope.
pub async fn theme_get(
    Query(query): Query<ThemeQuery>,
) -> Result<Json<ThemeWithCategories>, ApiError> {
    let theme = ThemeService::get_theme(query.theme.as_deref()).await?;
    Ok(Json(theme))
}
