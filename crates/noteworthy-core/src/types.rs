//! Core data types for the Noteworthy notes service.
//!
//! This module defines the entities the rest of the system moves around:
//!
//! - Typed identifiers (`NoteId`, `UserId`) so a note id can never be passed
//!   where a user id is expected
//! - `Note`, the sole persisted entity
//! - `NoteDraft` and `NotePatch`, the validated input forms for create and
//!   partial update
//! - `ValidationError`, naming the field and constraint a bad input violated
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// ID Types
// ============================================================================

/// Unique identifier for a note.
///
/// Wraps a UUID v4, providing type safety to distinguish note IDs from other
/// UUID-based identifiers in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Creates a new random NoteId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a NoteId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Unique identifier for a user.
///
/// The value is the subject claim of a verified authentication token. It is
/// opaque to this system: never parsed for meaning, only compared for
/// equality and stored as a note's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Creates a new random UserId using UUID v4.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a UserId from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

// ============================================================================
// Validation
// ============================================================================

/// A caller-supplied field violated a domain constraint.
///
/// Carries enough to tell the caller which field was wrong and why, without
/// the caller having to parse the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title was missing, empty, or whitespace-only.
    BlankTitle,
    /// Content was missing, empty, or whitespace-only.
    BlankContent,
}

impl ValidationError {
    /// The name of the offending field, as it appears in the API.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::BlankTitle => "title",
            Self::BlankContent => "content",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "title must not be blank"),
            Self::BlankContent => write!(f, "content must not be blank"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Returns true when the string is empty after trimming whitespace.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// ============================================================================
// Core Domain Types
// ============================================================================

/// A note owned by exactly one user.
///
/// Notes are private: every read and mutation is scoped to the owner, and a
/// note belonging to someone else is indistinguishable from one that does
/// not exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, generated at creation, immutable.
    pub id: NoteId,

    /// Title text. Never blank.
    pub title: String,

    /// Body text. Never blank.
    pub content: String,

    /// Whether the owner marked this note as a favorite.
    pub is_favorite: bool,

    /// The user who created the note. Immutable for the note's lifetime.
    pub owner_id: UserId,

    /// When the note was created. Immutable.
    pub created_at: DateTime<Utc>,

    /// When the note was last mutated. Equals `created_at` until the first
    /// update.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a note.
///
/// A plain carrier: construction does not validate, so the transport layer
/// can build one straight from a request body. Call [`NoteDraft::validate`]
/// before persisting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    /// Title text, required, non-blank after trimming.
    pub title: String,

    /// Body text, required, non-blank after trimming.
    pub content: String,

    /// Initial favorite flag.
    #[serde(default)]
    pub is_favorite: bool,
}

impl NoteDraft {
    /// Creates a draft with the favorite flag unset.
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            is_favorite: false,
        }
    }

    /// Checks the draft against the domain constraints.
    ///
    /// Trimming applies to the check only; stored values keep the caller's
    /// whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.title) {
            return Err(ValidationError::BlankTitle);
        }
        if is_blank(&self.content) {
            return Err(ValidationError::BlankContent);
        }
        Ok(())
    }
}

/// Partial update for a note.
///
/// `None` means "leave the field alone". Only title, content, and the
/// favorite flag can ever change; id, owner, and creation time are fixed at
/// creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePatch {
    /// Replacement title, if supplied. Must be non-blank.
    pub title: Option<String>,

    /// Replacement content, if supplied. Must be non-blank.
    pub content: Option<String>,

    /// Replacement favorite flag, if supplied.
    pub is_favorite: Option<bool>,
}

impl NotePatch {
    /// True when the patch supplies no fields at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.is_favorite.is_none()
    }

    /// Checks every supplied field against the domain constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title
            && is_blank(title)
        {
            return Err(ValidationError::BlankTitle);
        }
        if let Some(content) = &self.content
            && is_blank(content)
        {
            return Err(ValidationError::BlankContent);
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_id_roundtrip() {
        let id = NoteId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn note_id_display_fromstr() {
        let id = NoteId::new();
        let s = id.to_string();
        let parsed: NoteId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn note_id_serializes_as_bare_uuid() {
        let id = NoteId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.0));
    }

    #[test]
    fn user_id_roundtrip() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn user_id_display_fromstr() {
        let id = UserId::new();
        let s = id.to_string();
        let parsed: UserId = s.parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn user_id_rejects_garbage() {
        let result: Result<UserId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
    }

    #[test]
    fn note_roundtrip() {
        let note = Note {
            id: NoteId::new(),
            title: "Meeting".to_string(),
            content: "Discuss Q3".to_string(),
            is_favorite: false,
            owner_id: UserId::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&note).unwrap();
        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(note, parsed);
    }

    #[test]
    fn draft_valid() {
        let draft = NoteDraft::new("Meeting", "Discuss Q3");
        assert!(draft.validate().is_ok());
        assert!(!draft.is_favorite);
    }

    #[test]
    fn draft_blank_title() {
        let draft = NoteDraft::new("   ", "Discuss Q3");
        assert_eq!(draft.validate(), Err(ValidationError::BlankTitle));
        assert_eq!(ValidationError::BlankTitle.field(), "title");
    }

    #[test]
    fn draft_empty_content() {
        let draft = NoteDraft::new("Meeting", "");
        assert_eq!(draft.validate(), Err(ValidationError::BlankContent));
        assert_eq!(ValidationError::BlankContent.field(), "content");
    }

    #[test]
    fn draft_keeps_caller_whitespace() {
        let draft = NoteDraft::new("  Meeting  ", "body");
        assert!(draft.validate().is_ok());
        assert_eq!(draft.title, "  Meeting  ");
    }

    #[test]
    fn draft_favorite_defaults_false_in_json() {
        let draft: NoteDraft = serde_json::from_str(r#"{"title":"a","content":"b"}"#).unwrap();
        assert!(!draft.is_favorite);
    }

    #[test]
    fn patch_empty_is_valid() {
        let patch = NotePatch::default();
        assert!(patch.is_empty());
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn patch_blank_title_rejected() {
        let patch = NotePatch {
            title: Some("\t\n".to_string()),
            ..Default::default()
        };
        assert_eq!(patch.validate(), Err(ValidationError::BlankTitle));
    }

    #[test]
    fn patch_blank_content_rejected() {
        let patch = NotePatch {
            content: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(patch.validate(), Err(ValidationError::BlankContent));
    }

    #[test]
    fn patch_favorite_only_is_valid() {
        let patch = NotePatch {
            is_favorite: Some(true),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn patch_omitted_fields_deserialize_to_none() {
        let patch: NotePatch = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New"));
        assert!(patch.content.is_none());
        assert!(patch.is_favorite.is_none());
    }
}
