use sqlx::PgPool;

use crate::database::manager::{DatabaseManager, DatabaseError};
use crate::database::models::entry::JournalEntry;

/// Input for a new entry as received from the client. Fields arrive optional
/// so the gateway owns the absent-vs-blank decision.
#[derive(Debug, Default)]
pub struct NewEntry {
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub journal_entry: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Database manager error: {0}")]
    Manager(#[from] DatabaseError),
    #[error("{0}")]
    Validation(String),
}

/// Typed query interface for journal entries. Every operation validates its
/// input first; a validation failure never reaches the store, not even to
/// acquire a connection.
pub struct JournalService;

impl JournalService {
    async fn pool() -> Result<PgPool, JournalError> {
        Ok(DatabaseManager::pool().await?)
    }

    /// Insert a new entry. Creation date and time are assigned by the store;
    /// one all-or-nothing statement, no retry.
    pub async fn create_entry(entry: NewEntry) -> Result<JournalEntry, JournalError> {
        let (user_id, title, body) = validate_new_entry(&entry)?;
        let pool = Self::pool().await?;

        let created = sqlx::query_as::<_, JournalEntry>(
            "INSERT INTO journal_entries (user_id, title, journal_entry) \
             VALUES ($1, $2, $3) \
             RETURNING id, user_id, title, journal_entry, date_created, time_created",
        )
        .bind(user_id)
        .bind(title)
        .bind(body)
        .fetch_one(&pool)
        .await?;

        Ok(created)
    }

    /// All entries owned by `user_id`, most recent first. An empty list is a
    /// valid result.
    pub async fn list_entries(user_id: Option<&str>) -> Result<Vec<JournalEntry>, JournalError> {
        let user_id = require_field(user_id, "user_id")?;
        let pool = Self::pool().await?;

        let entries = sqlx::query_as::<_, JournalEntry>(
            "SELECT id, user_id, title, journal_entry, date_created, time_created \
             FROM journal_entries \
             WHERE user_id = $1 \
             ORDER BY date_created DESC, time_created DESC",
        )
        .bind(user_id)
        .fetch_all(&pool)
        .await?;

        Ok(entries)
    }
}

fn validate_new_entry(entry: &NewEntry) -> Result<(&str, &str, &str), JournalError> {
    let user_id = require_field(entry.user_id.as_deref(), "user_id")?;
    let title = require_field(entry.title.as_deref(), "title")?;
    let body = require_field(entry.journal_entry.as_deref(), "journal_entry")?;
    Ok((user_id, title, body))
}

/// Absent and blank are treated identically: both fail validation.
fn require_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, JournalError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(JournalError::Validation(format!("{} is required", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(user_id: Option<&str>, title: Option<&str>, body: Option<&str>) -> NewEntry {
        NewEntry {
            user_id: user_id.map(String::from),
            title: title.map(String::from),
            journal_entry: body.map(String::from),
        }
    }

    #[test]
    fn accepts_complete_entry() {
        let e = entry(Some("u1"), Some("Morning pages"), Some("Slept well."));
        assert!(validate_new_entry(&e).is_ok());
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(validate_new_entry(&entry(None, Some("T"), Some("B"))).is_err());
        assert!(validate_new_entry(&entry(Some("u1"), None, Some("B"))).is_err());
        assert!(validate_new_entry(&entry(Some("u1"), Some("T"), None)).is_err());
    }

    #[test]
    fn rejects_blank_fields() {
        let e = entry(Some("u1"), Some("   "), Some("B"));
        let err = validate_new_entry(&e).unwrap_err();
        assert!(matches!(err, JournalError::Validation(ref msg) if msg.contains("title")));
    }

    #[test]
    fn list_requires_user_id() {
        assert!(require_field(None, "user_id").is_err());
        assert!(require_field(Some(""), "user_id").is_err());
        assert_eq!(require_field(Some("u1"), "user_id").unwrap(), "u1");
    }

    // Validation is decided before the pool is touched, so these run without
    // a reachable store.
    #[tokio::test]
    async fn create_with_missing_field_never_reaches_store() {
        let result = JournalService::create_entry(entry(Some("u1"), None, Some("B"))).await;
        assert!(matches!(result, Err(JournalError::Validation(_))));
    }

    #[tokio::test]
    async fn list_with_missing_user_id_never_reaches_store() {
        let result = JournalService::list_entries(None).await;
        assert!(matches!(result, Err(JournalError::Validation(_))));
    }
}
