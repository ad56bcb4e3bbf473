//! Shared application state.

use std::sync::Arc;

use api::auth::{AuthService, TokenKeys};
use api::notes::NotesService;
use api::repository::{NoteRepository, UserRepository};

/// Handed to every handler by axum. Construction takes the repositories as
/// trait objects so tests can swap PostgreSQL for the in-memory stores.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub notes: Arc<NotesService>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        notes: Arc<dyn NoteRepository>,
        keys: TokenKeys,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(users, keys)),
            notes: Arc::new(NotesService::new(notes)),
        }
    }
}
