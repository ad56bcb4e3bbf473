//! PostgreSQL repositories.
//!
//! Every note query carries a `user_id` predicate; ownership scoping is not
//! left to callers. Schema lives in `api/migrations`.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{NewNote, NewUser, Note, User};
use crate::repository::{NoteRepository, UserRepository};

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, new: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, full_name, email, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }
}

pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Turn user input into an ILIKE pattern, escaping the wildcard characters.
fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn create(&self, new: NewNote) -> Result<Note> {
        let note = sqlx::query_as::<_, Note>(
            "INSERT INTO notes (id, title, content, tags, user_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&new.title)
        .bind(&new.content)
        .bind(&new.tags)
        .bind(new.user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(note)
    }

    async fn find_owned(&self, id: Uuid, owner: Uuid) -> Result<Option<Note>> {
        let note =
            sqlx::query_as::<_, Note>("SELECT * FROM notes WHERE id = $1 AND user_id = $2")
                .bind(id)
                .bind(owner)
                .fetch_optional(&self.pool)
                .await?;
        Ok(note)
    }

    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT * FROM notes
             WHERE user_id = $1
             ORDER BY is_pinned DESC, created_on ASC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn update(&self, note: &Note) -> Result<Note> {
        sqlx::query_as::<_, Note>(
            "UPDATE notes
             SET title = $1, content = $2, tags = $3, is_pinned = $4
             WHERE id = $5 AND user_id = $6
             RETURNING *",
        )
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.tags)
        .bind(note.is_pinned)
        .bind(note.id)
        .bind(note.user_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(Error::NoteNotFound)
    }

    async fn delete(&self, id: Uuid, owner: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, owner: Uuid, query: &str) -> Result<Vec<Note>> {
        let pattern = like_pattern(query);
        let notes = sqlx::query_as::<_, Note>(
            "SELECT * FROM notes
             WHERE user_id = $1 AND (title ILIKE $2 OR content ILIKE $2)
             ORDER BY created_on ASC",
        )
        .bind(owner)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }
}
