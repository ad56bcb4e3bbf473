//! HTTP routes mapping requests onto the auth and notes services.
//!
//! Paths, success messages, and body shapes follow the contract the existing
//! client consumes; errors all flow through [`ApiError`].

use axum::extract::{Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use api::models::{Note, NoteUpdate, UserInfo};

use crate::error::ApiError;
use crate::extract::{AuthUser, JsonBody, NoteId};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(root))
        .route("/create-account", post(create_account))
        .route("/login", post(login))
        .route("/add-note", post(add_note))
        .route("/get-user", get(get_user))
        .route("/get-all-notes", get(get_all_notes))
        .route("/edit-note/:note_id", put(edit_note))
        .route("/delete-note/:note_id", delete(delete_note))
        .route("/edit-isPinned/:note_id", put(edit_is_pinned))
        .route("/search-notes", get(search_notes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn root() -> &'static str {
    "Hello, from Notes Server!"
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAccountBody {
    full_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

async fn create_account(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateAccountBody>,
) -> Result<impl IntoResponse, ApiError> {
    let (user, token) = state
        .auth
        .register(
            body.full_name.as_deref().unwrap_or(""),
            body.email.as_deref().unwrap_or(""),
            body.password.as_deref().unwrap_or(""),
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "error": false,
            "user": user,
            "accessToken": token,
            "message": "Registration Successful",
        })),
    ))
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    email: Option<String>,
    password: Option<String>,
}

async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<LoginBody>,
) -> Result<Json<Value>, ApiError> {
    let email = body.email.unwrap_or_default();
    let token = state
        .auth
        .login(&email, body.password.as_deref().unwrap_or(""))
        .await?;

    Ok(Json(json!({
        "error": false,
        "message": "Login Successful",
        "email": email,
        "accessToken": token,
    })))
}

#[derive(Debug, Deserialize)]
struct AddNoteBody {
    title: Option<String>,
    content: Option<String>,
    tags: Option<Vec<String>>,
}

async fn add_note(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(body): JsonBody<AddNoteBody>,
) -> Result<Json<Value>, ApiError> {
    let note = state
        .notes
        .add_note(
            user.id,
            body.title.as_deref().unwrap_or(""),
            body.content.as_deref().unwrap_or(""),
            body.tags,
        )
        .await?;

    Ok(Json(json!({
        "error": false,
        "note": note,
        "message": "Note added successfully",
    })))
}

async fn get_user(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserInfo>, ApiError> {
    Ok(Json(state.auth.get_user(user.id).await?))
}

async fn get_all_notes(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(state.notes.list_notes(user.id).await?))
}

async fn edit_note(
    State(state): State<AppState>,
    user: AuthUser,
    NoteId(note_id): NoteId,
    JsonBody(update): JsonBody<NoteUpdate>,
) -> Result<Json<Value>, ApiError> {
    let note = state.notes.edit_note(user.id, note_id, update).await?;

    Ok(Json(json!({
        "error": false,
        "note": note,
        "message": "Note updated successfully",
    })))
}

async fn delete_note(
    State(state): State<AppState>,
    user: AuthUser,
    NoteId(note_id): NoteId,
) -> Result<Json<Value>, ApiError> {
    state.notes.delete_note(user.id, note_id).await?;

    Ok(Json(json!({
        "error": false,
        "message": "Note deleted successfully",
    })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EditPinnedBody {
    is_pinned: Option<bool>,
}

async fn edit_is_pinned(
    State(state): State<AppState>,
    user: AuthUser,
    NoteId(note_id): NoteId,
    JsonBody(body): JsonBody<EditPinnedBody>,
) -> Result<Json<Value>, ApiError> {
    // This endpoint has its own not-found wording in the client contract.
    let note = state
        .notes
        .set_pinned(user.id, note_id, body.is_pinned)
        .await
        .map_err(|err| match err {
            api::Error::NoteNotFound => {
                ApiError::with_message(err, "Note to be edited not found")
            }
            other => other.into(),
        })?;

    Ok(Json(json!({
        "error": false,
        "note": note,
        "message": "Note updated successfully",
    })))
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    query: Option<String>,
}

async fn search_notes(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, ApiError> {
    let notes = state
        .notes
        .search_notes(user.id, params.query.as_deref().unwrap_or(""))
        .await?;

    Ok(Json(json!({
        "error": false,
        "notes": notes,
        "message": "Notes matching the search query retrieved successfully",
    })))
}
