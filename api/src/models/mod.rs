//! Data models for the application.

mod note;
mod user;

pub use note::{NewNote, Note, NoteUpdate};
pub use user::{NewUser, User, UserInfo};
