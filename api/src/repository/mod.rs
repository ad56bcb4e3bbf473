//! # Storage interfaces
//!
//! The services speak to storage only through these traits, so the same
//! logic runs against PostgreSQL in production and against the in-memory
//! implementations in tests.

mod memory;
mod postgres;

pub use memory::{MemoryNoteRepository, MemoryUserRepository};
pub use postgres::{PgNoteRepository, PgUserRepository};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{NewNote, NewUser, Note, User};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, new: NewUser) -> Result<User>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}

#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn create(&self, new: NewNote) -> Result<Note>;

    /// Fetch a note only if it belongs to `owner`.
    async fn find_owned(&self, id: Uuid, owner: Uuid) -> Result<Option<Note>>;

    /// All notes for one owner, pinned notes first, then oldest first.
    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Note>>;

    /// Persist the mutable fields of `note`, matching on id and owner.
    /// Fails with [`crate::Error::NoteNotFound`] if no such row exists.
    async fn update(&self, note: &Note) -> Result<Note>;

    /// Remove the note if it belongs to `owner`. Returns whether a row went away.
    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool>;

    /// Case-insensitive substring match over title and content, oldest first.
    async fn search(&self, owner: Uuid, query: &str) -> Result<Vec<Note>>;
}
