//! # API crate — data model and services for the notes backend
//!
//! Everything the HTTP layer needs short of axum itself:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Database records (`User`, `Note`) and their client-safe projections |
//! | [`error`] | The error taxonomy shared by every operation |
//! | [`auth`] | Password hashing (Argon2id), access-token issue/verify (JWT), and the [`auth::AuthService`] register/login flow |
//! | [`notes`] | [`notes::NotesService`] — owner-scoped create/list/edit/delete/pin/search |
//! | [`repository`] | Storage traits with PostgreSQL and in-memory implementations |
//!
//! The services only ever see the repository traits, so the whole crate is
//! testable without a running database.

pub mod auth;
pub mod error;
pub mod models;
pub mod notes;
pub mod repository;

pub use error::{Error, Result};
pub use models::{NewNote, NewUser, Note, NoteUpdate, User, UserInfo};
