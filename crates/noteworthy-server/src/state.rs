//! Application state shared across handlers.

use std::sync::Arc;

use noteworthy_store::NoteService;

use crate::auth::TokenVerifier;
use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// The token verifier is held as a trait object so tests and future
/// deployments can swap the scheme.
#[derive(Clone)]
pub struct AppState {
    /// Domain service for notes.
    notes: NoteService,
    /// Bearer token verifier.
    verifier: Arc<dyn TokenVerifier>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        notes: NoteService,
        verifier: Arc<dyn TokenVerifier>,
        config: ServerConfig,
    ) -> Self {
        Self {
            notes,
            verifier,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the notes service.
    pub fn notes(&self) -> &NoteService {
        &self.notes
    }

    /// Get a reference to the token verifier.
    pub fn verifier(&self) -> &dyn TokenVerifier {
        self.verifier.as_ref()
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
