//! In-memory repositories.
//!
//! Back the services in tests and local development. Records live in a
//! `Vec` in insertion order, which doubles as creation order; the lock is
//! never held across an await point.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{NewNote, NewUser, Note, User};
use crate::repository::{NoteRepository, UserRepository};

#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new: NewUser) -> Result<User> {
        let user = User {
            id: Uuid::new_v4(),
            full_name: new.full_name,
            email: new.email,
            password_hash: new.password_hash,
            created_on: Utc::now(),
        };
        self.users
            .write()
            .expect("user store lock poisoned")
            .push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().expect("user store lock poisoned");
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().expect("user store lock poisoned");
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[derive(Default)]
pub struct MemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn create(&self, new: NewNote) -> Result<Note> {
        let note = Note {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            tags: new.tags,
            is_pinned: false,
            user_id: new.user_id,
            created_on: Utc::now(),
        };
        self.notes
            .write()
            .expect("note store lock poisoned")
            .push(note.clone());
        Ok(note)
    }

    async fn find_owned(&self, id: Uuid, owner: Uuid) -> Result<Option<Note>> {
        let notes = self.notes.read().expect("note store lock poisoned");
        Ok(notes
            .iter()
            .find(|n| n.id == id && n.user_id == owner)
            .cloned())
    }

    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Note>> {
        let notes = self.notes.read().expect("note store lock poisoned");
        let mut owned: Vec<Note> = notes.iter().filter(|n| n.user_id == owner).cloned().collect();
        // Stable sort keeps creation order within each partition.
        owned.sort_by_key(|n| !n.is_pinned);
        Ok(owned)
    }

    async fn update(&self, note: &Note) -> Result<Note> {
        let mut notes = self.notes.write().expect("note store lock poisoned");
        let stored = notes
            .iter_mut()
            .find(|n| n.id == note.id && n.user_id == note.user_id)
            .ok_or(Error::NoteNotFound)?;
        stored.title = note.title.clone();
        stored.content = note.content.clone();
        stored.tags = note.tags.clone();
        stored.is_pinned = note.is_pinned;
        Ok(stored.clone())
    }

    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool> {
        let mut notes = self.notes.write().expect("note store lock poisoned");
        let before = notes.len();
        notes.retain(|n| !(n.id == id && n.user_id == owner));
        Ok(notes.len() < before)
    }

    async fn search(&self, owner: Uuid, query: &str) -> Result<Vec<Note>> {
        let needle = query.to_lowercase();
        let notes = self.notes.read().expect("note store lock poisoned");
        Ok(notes
            .iter()
            .filter(|n| {
                n.user_id == owner
                    && (n.title.to_lowercase().contains(&needle)
                        || n.content.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect())
    }
}
