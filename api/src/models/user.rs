//! # User model
//!
//! Two representations of a user:
//!
//! - [`User`] — the complete database row, including the Argon2 `password_hash`.
//!   Derives [`sqlx::FromRow`] so it can be loaded directly from queries.
//! - [`UserInfo`] — the client-safe projection (`id`, `fullName`, `email`) that
//!   crosses the wire. The hash and timestamps never leave the server.
//!
//! Users are created once at registration and never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_on: DateTime<Utc>,
}

impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            full_name: self.full_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
}

/// Fields required to insert a new user. The password arrives here already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}
