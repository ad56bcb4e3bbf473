//! # Server crate — the HTTP layer
//!
//! Maps the REST endpoints onto the `api` crate's services:
//!
//! - [`settings`] — layered configuration (defaults, `config.toml`, environment)
//! - [`database`] — PostgreSQL pool and migrations
//! - [`state`] — shared [`state::AppState`] handed to every handler
//! - [`extract`] — the bearer-token [`extract::AuthUser`] guard
//! - [`routes`] — the axum router and request/response shapes
//! - [`error`] — the one place where `api::Error` becomes an HTTP response

pub mod database;
pub mod error;
pub mod extract;
pub mod routes;
pub mod settings;
pub mod state;
