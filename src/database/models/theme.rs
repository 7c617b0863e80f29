use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Read-only theme reference data, looked up by name.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Theme {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub theme_id: Uuid,
    pub name: String,
    pub about: String,
    pub useful_when: String,
    pub position: i32,
}

/// A theme joined with its categories, ordered by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeWithCategories {
    pub id: Uuid,
    pub name: String,
    pub categories: Vec<Category>,
}
