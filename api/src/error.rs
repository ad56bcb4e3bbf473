//! Error taxonomy for the notes backend.
//!
//! Every operation returns one of these variants; the HTTP layer maps them to
//! status codes and a `{error: true, message}` body in a single place. The
//! last three variants carry internal detail that must never reach a client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid input.
    #[error("{0}")]
    Validation(String),

    /// Registration attempted with an email that is already taken.
    #[error("User already exists")]
    EmailTaken,

    /// Login with an unknown email or a password that does not verify.
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// Missing, malformed, or expired access token.
    #[error("{0}")]
    Unauthorized(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Note not found")]
    NoteNotFound,

    #[error("password hashing failed: {0}")]
    PasswordHash(String),

    #[error("token signing failed: {0}")]
    Token(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Error::Unauthorized(message.into())
    }
}
