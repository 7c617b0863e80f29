use sqlx::PgPool;

use crate::database::manager::{DatabaseManager, DatabaseError};
use crate::database::models::theme::{Category, Theme, ThemeWithCategories};

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Database manager error: {0}")]
    Manager(#[from] DatabaseError),
    #[error("{0}")]
    Validation(String),
    #[error("Theme not found: {0}")]
    NotFound(String),
}

/// Read-only gateway for theme/category reference data.
pub struct ThemeService;

impl ThemeService {
    async fn pool() -> Result<PgPool, ThemeError> {
        Ok(DatabaseManager::pool().await?)
    }

    /// Look up a theme by name and join its categories in display order.
    pub async fn get_theme(name: Option<&str>) -> Result<ThemeWithCategories, ThemeError> {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(ThemeError::Validation("theme is required".to_string())),
        };
        let pool = Self::pool().await?;

        let theme = sqlx::query_as::<_, Theme>("SELECT id, name FROM themes WHERE name = $1")
            .bind(name)
            .fetch_optional(&pool)
            .await?
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))?;

        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, theme_id, name, about, useful_when, position \
             FROM categories \
             WHERE theme_id = $1 \
             ORDER BY position",
        )
        .bind(theme.id)
        .fetch_all(&pool)
        .await?;

        Ok(ThemeWithCategories {
            id: theme.id,
            name: theme.name,
            categories,
        })
    }
}
