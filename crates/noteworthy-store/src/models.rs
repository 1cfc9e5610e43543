//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx queries.
//! They are separate from the domain types in noteworthy-core so the SQL
//! layer can stay on plain `Uuid`s while callers work with typed ids.

use chrono::{DateTime, Utc};
use noteworthy_core::{Note, NoteId, UserId};
use sqlx::FromRow;
use uuid::Uuid;

/// Column list for the `note` table, in `NoteRow` field order.
pub(crate) const NOTE_COLUMNS: &str =
    "id, title, content, is_favorite, owner_id, created_at, updated_at";

/// Database row for the `note` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub is_favorite: bool,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            title: row.title,
            content: row.content,
            is_favorite: row.is_favorite,
            owner_id: UserId::from_uuid(row.owner_id),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
