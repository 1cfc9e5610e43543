//! noteworthy-server: HTTP API server for the Noteworthy notes service
//!
//! This crate provides:
//! - REST endpoints for note CRUD and listing (search, filter, sort, paginate)
//! - HS256 bearer token authentication
//! - A uniform JSON error envelope
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! Handlers stay thin. Authentication happens in the `AuthenticatedUser`
//! extractor, query normalization in `noteworthy-core`, and persistence in
//! `noteworthy-store`; a handler wires the three together and maps the
//! outcome onto a status code.
//!
//! # Usage
//!
//! ```rust,ignore
//! use noteworthy_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let app = routes::build_router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use auth::{AuthenticatedUser, HmacTokenVerifier, TokenVerifier};
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use noteworthy_core;
pub use noteworthy_store;
