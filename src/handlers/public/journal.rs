use axum::extract::rejection::JsonRejection;
use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::response::ApiResponse;
use crate::services::journal_service::{JournalService, NewEntry};

#[derive(Debug, Deserialize)]
pub struct FreeformRequest {
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub journal_entry: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JournalQuery {
    pub user_id: Option<String>,
}

/// POST /api/journal/freeform - save a free-form journal entry
///
/// Body: { user_id, title, journal_entry }. All three are required and
/// non-blank; the store stamps the creation date and time.
pub async fn freeform_post(
    payload: Result<Json<FreeformRequest>, JsonRejection>,
) -> Result<ApiResponse, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::invalid_json(e.body_text()))?;

    let entry = JournalService::create_entry(NewEntry {
        user_id: payload.user_id,
        title: payload.title,
        journal_entry: payload.journal_entry,
    })
    .await?;

    Ok(ApiResponse::new("Journal entry saved").with("data", entry))
}

/// GET /api/fetch-journal/journal?user_id= - list a user's entries,
/// most recent first
pub async fn journal_get(Query(query): Query<JournalQuery>) -> Result<ApiResponse, ApiError> {
    let entries = JournalService::list_entries(query.user_id.as_deref()).await?;

    Ok(ApiResponse::new("Journal entries retrieved").with("entries", entries))
}
