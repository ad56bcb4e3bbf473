//! # Note model
//!
//! A note belongs to exactly one user; every query against the store filters
//! by the owner id, so a note is never visible to anyone but its owner.
//! Serialization is camelCase (`isPinned`, `userId`, `createdOn`) to match the
//! wire format the client expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A note owned by a single user. Tags persist as a `TEXT[]` column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_pinned: bool,
    pub user_id: Uuid,
    pub created_on: DateTime<Utc>,
}

/// Fields for creating a note. New notes always start unpinned.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub user_id: Uuid,
}

/// Partial update for a note; only the supplied fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}
