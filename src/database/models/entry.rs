use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored free-form journal entry. The store assigns id and the creation
/// date/time columns; neither is ever updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub journal_entry: String,
    pub date_created: NaiveDate,
    pub time_created: NaiveTime,
}
