//! # Notes service
//!
//! Every operation takes the authenticated owner's id and scopes the
//! underlying query to it, so a note belonging to another user is
//! indistinguishable from a note that does not exist.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{NewNote, Note, NoteUpdate};
use crate::repository::NoteRepository;

pub struct NotesService {
    notes: Arc<dyn NoteRepository>,
}

impl NotesService {
    pub fn new(notes: Arc<dyn NoteRepository>) -> Self {
        Self { notes }
    }

    /// Create a note. Tags default to an empty list; new notes are unpinned.
    pub async fn add_note(
        &self,
        owner: Uuid,
        title: &str,
        content: &str,
        tags: Option<Vec<String>>,
    ) -> Result<Note> {
        if title.is_empty() || content.is_empty() {
            return Err(Error::validation("Title and content are required"));
        }

        self.notes
            .create(NewNote {
                title: title.to_owned(),
                content: content.to_owned(),
                tags: tags.unwrap_or_default(),
                user_id: owner,
            })
            .await
    }

    /// All of the owner's notes, pinned first.
    pub async fn list_notes(&self, owner: Uuid) -> Result<Vec<Note>> {
        self.notes.list_by_owner(owner).await
    }

    /// Apply the supplied fields to an owned note and persist it.
    pub async fn edit_note(&self, owner: Uuid, note_id: Uuid, update: NoteUpdate) -> Result<Note> {
        let mut note = self
            .notes
            .find_owned(note_id, owner)
            .await?
            .ok_or(Error::NoteNotFound)?;

        if let Some(title) = update.title {
            note.title = title;
        }
        if let Some(content) = update.content {
            note.content = content;
        }
        if let Some(tags) = update.tags {
            note.tags = tags;
        }
        if let Some(is_pinned) = update.is_pinned {
            note.is_pinned = is_pinned;
        }

        self.notes.update(&note).await
    }

    /// Permanently remove an owned note.
    pub async fn delete_note(&self, owner: Uuid, note_id: Uuid) -> Result<()> {
        if self.notes.delete(note_id, owner).await? {
            Ok(())
        } else {
            Err(Error::NoteNotFound)
        }
    }

    /// Set the pinned flag on an owned note. An absent flag leaves the note
    /// untouched and returns it as-is, matching the behavior clients rely on.
    pub async fn set_pinned(
        &self,
        owner: Uuid,
        note_id: Uuid,
        is_pinned: Option<bool>,
    ) -> Result<Note> {
        let mut note = self
            .notes
            .find_owned(note_id, owner)
            .await?
            .ok_or(Error::NoteNotFound)?;

        match is_pinned {
            Some(value) => {
                note.is_pinned = value;
                self.notes.update(&note).await
            }
            None => Ok(note),
        }
    }

    /// Owned notes whose title or content contains `query`, case-insensitively.
    pub async fn search_notes(&self, owner: Uuid, query: &str) -> Result<Vec<Note>> {
        if query.is_empty() {
            return Err(Error::validation("Search query is required"));
        }
        self.notes.search(owner, query).await
    }
}
