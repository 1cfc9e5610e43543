//! noteworthy-core: Domain types for the Noteworthy notes service
//!
//! This crate provides:
//! - Typed identifiers (`NoteId`, `UserId`) wrapping UUIDs
//! - The `Note` entity and its input forms (`NoteDraft`, `NotePatch`)
//! - Field validation with `ValidationError`
//! - Listing-query normalization (`NoteQuery`) with clamp-don't-reject
//!   semantics
//!
//! Everything here is pure: no I/O, no async, no database types. The storage
//! and HTTP layers build on these types without this crate knowing about
//! either.

pub mod query;
pub mod types;

pub use query::{NoteFilter, NoteQuery, RawNoteQuery, SearchScope, SortOrder};
pub use types::{Note, NoteDraft, NoteId, NotePatch, UserId, ValidationError};
