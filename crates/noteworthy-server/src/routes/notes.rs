//! Note CRUD and listing routes.
//!
//! This module implements the note-related HTTP endpoints:
//! - GET /api/v1/notes - List the caller's notes with search/filter/sort/pagination
//! - POST /api/v1/notes - Create a note
//! - GET /api/v1/notes/{id} - Fetch one note
//! - PUT /api/v1/notes/{id} - Partially update one note
//! - DELETE /api/v1/notes/{id} - Delete one note
//!
//! Every endpoint requires a bearer token and operates only on the caller's
//! own notes. A note owned by someone else answers exactly like a note that
//! does not exist.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;

use noteworthy_core::{Note, NoteDraft, NoteId, NotePatch, NoteQuery, RawNoteQuery};
use noteworthy_store::NotePage;

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Request body for POST /api/v1/notes.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    /// Title text, required.
    pub title: String,
    /// Body text, required.
    pub content: String,
    /// Initial favorite flag, defaults to false.
    #[serde(default)]
    pub is_favorite: bool,
}

impl From<CreateNoteRequest> for NoteDraft {
    fn from(request: CreateNoteRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            is_favorite: request.is_favorite,
        }
    }
}

/// Request body for PUT /api/v1/notes/{id}. Omitted fields are left
/// untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNoteRequest {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement content.
    pub content: Option<String>,
    /// Replacement favorite flag.
    pub is_favorite: Option<bool>,
}

impl From<UpdateNoteRequest> for NotePatch {
    fn from(request: UpdateNoteRequest) -> Self {
        Self {
            title: request.title,
            content: request.content,
            is_favorite: request.is_favorite,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse a path segment as a note id.
///
/// Maps failure to a 400 in the standard error envelope instead of axum's
/// plain-text path rejection.
fn parse_note_id(raw: &str) -> Result<NoteId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid note id: {raw}")))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/v1/notes - List the caller's notes.
///
/// Query parameters: `search`, `search_in` (title|content|both), `filter_by`
/// (all|favorites), `sort_by` (newest|oldest), `page`, `per_page`.
/// Out-of-range numbers and unrecognized spellings are normalized to safe
/// values, never rejected.
///
/// # Response
///
/// - 200 OK: `{ "notes": [...], "total": ..., "page": ..., "per_page": ... }`
/// - 401 Unauthorized: Missing or invalid token
async fn list_notes(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Query(raw): Query<RawNoteQuery>,
) -> ApiResult<Json<NotePage>> {
    let query = NoteQuery::from_raw(raw);
    let page = state.notes().list(user, &query).await?;

    tracing::info!(
        owner = %user,
        total = page.total,
        page = page.page,
        "Listed notes"
    );

    Ok(Json(page))
}

/// POST /api/v1/notes - Create a note.
///
/// # Request
///
/// Body: `{ "title": "...", "content": "...", "is_favorite": false }`
///
/// # Response
///
/// - 201 Created: the full note
/// - 400 Bad Request: Blank title or content
/// - 401 Unauthorized: Missing or invalid token
async fn create_note(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<Note>)> {
    let draft = NoteDraft::from(request);
    let note = state.notes().create(user, &draft).await?;

    tracing::info!(note_id = %note.id, owner = %user, "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/v1/notes/{id} - Fetch one of the caller's notes.
///
/// # Response
///
/// - 200 OK: the full note
/// - 400 Bad Request: Malformed id
/// - 401 Unauthorized: Missing or invalid token
/// - 404 Not Found: No such note for this caller
async fn get_note(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<Note>> {
    let id = parse_note_id(&id)?;
    let note = state.notes().get(user, id).await?;
    Ok(Json(note))
}

/// PUT /api/v1/notes/{id} - Partially update one of the caller's notes.
///
/// # Request
///
/// Body: any subset of `{ "title": ..., "content": ..., "is_favorite": ... }`
///
/// # Response
///
/// - 200 OK: the updated note
/// - 400 Bad Request: Malformed id, or a supplied field is blank
/// - 401 Unauthorized: Missing or invalid token
/// - 404 Not Found: No such note for this caller
async fn update_note(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<Note>> {
    let id = parse_note_id(&id)?;
    let patch = NotePatch::from(request);
    let note = state.notes().update(user, id, &patch).await?;

    tracing::info!(note_id = %note.id, owner = %user, "Note updated");

    Ok(Json(note))
}

/// DELETE /api/v1/notes/{id} - Delete one of the caller's notes.
///
/// # Response
///
/// - 204 No Content: Deleted
/// - 400 Bad Request: Malformed id
/// - 401 Unauthorized: Missing or invalid token
/// - 404 Not Found: No such note for this caller
async fn delete_note(
    State(state): State<AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_note_id(&id)?;
    state.notes().delete(user, id).await?;

    tracing::info!(note_id = %id, owner = %user, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/notes", get(list_notes).post(create_note))
        .route(
            "/api/v1/notes/{id}",
            get(get_note).put(update_note).delete(delete_note),
        )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialize() {
        let json = r#"{"title": "Meeting", "content": "Discuss Q3"}"#;
        let request: CreateNoteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "Meeting");
        assert_eq!(request.content, "Discuss Q3");
        assert!(!request.is_favorite);
    }

    #[test]
    fn test_create_request_to_draft() {
        let request = CreateNoteRequest {
            title: "Meeting".to_string(),
            content: "Discuss Q3".to_string(),
            is_favorite: true,
        };
        let draft = NoteDraft::from(request);
        assert_eq!(draft.title, "Meeting");
        assert!(draft.is_favorite);
    }

    #[test]
    fn test_update_request_partial() {
        let json = r#"{"title": "New title"}"#;
        let request: UpdateNoteRequest = serde_json::from_str(json).unwrap();
        let patch = NotePatch::from(request);
        assert_eq!(patch.title.as_deref(), Some("New title"));
        assert!(patch.content.is_none());
        assert!(patch.is_favorite.is_none());
    }

    #[test]
    fn test_update_request_empty_body() {
        let request: UpdateNoteRequest = serde_json::from_str("{}").unwrap();
        let patch = NotePatch::from(request);
        assert!(patch.is_empty());
    }

    #[test]
    fn test_raw_query_from_query_string() {
        let raw: RawNoteQuery =
            serde_urlencoded::from_str("search=rust&filter_by=favorites&page=2").unwrap();
        assert_eq!(raw.search.as_deref(), Some("rust"));
        assert_eq!(raw.filter_by.as_deref(), Some("favorites"));
        assert_eq!(raw.page, Some(2));
        assert!(raw.sort_by.is_none());
    }

    #[test]
    fn test_raw_query_empty_string() {
        let raw: RawNoteQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(raw, RawNoteQuery::default());
    }

    #[test]
    fn test_raw_query_normalizes_out_of_range() {
        let raw: RawNoteQuery = serde_urlencoded::from_str("page=0&per_page=1000").unwrap();
        let query = NoteQuery::from_raw(raw);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 100);
    }

    #[test]
    fn test_parse_note_id_accepts_uuid() {
        let id = NoteId::new();
        assert_eq!(parse_note_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_parse_note_id_rejects_garbage() {
        assert!(matches!(
            parse_note_id("not-a-uuid"),
            Err(ApiError::BadRequest(_))
        ));
    }
}
