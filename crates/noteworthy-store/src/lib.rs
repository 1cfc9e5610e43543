//! noteworthy-store: PostgreSQL storage layer for the Noteworthy notes service
//!
//! This crate provides:
//! - `Store`, the raw owner-scoped SQL layer over a connection pool
//! - `NoteService`, the domain-typed service the HTTP layer talks to
//! - Pure list/count SQL assembly (`ListSql`) for the query pipeline
//! - Embedded, idempotent schema migrations
//!
//! # Ownership model
//!
//! Every query and mutation carries the owner's id as a mandatory predicate.
//! A note that does not exist and a note that belongs to someone else are the
//! same `NoteNotFound` error by construction: both are zero matched rows.
//!
//! # Usage
//!
//! ```rust,ignore
//! use noteworthy_store::{NoteService, Store, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = Store::connect(config).await?;
//! let notes = NoteService::new(store);
//!
//! let note = notes.create(owner, &draft).await?;
//! let page = notes.list(owner, &query).await?;
//! ```

pub mod error;
pub mod models;
pub mod queries;
pub mod schema;
pub mod service;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::NoteRow;
pub use queries::ListSql;
pub use service::{NotePage, NoteService};
pub use store::{Store, StoreConfig};

// Re-export noteworthy-core for downstream crates
pub use noteworthy_core;
