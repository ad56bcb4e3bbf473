//! Request extractors for protected routes.
//!
//! [`AuthUser`] is an extractor, so protecting an endpoint is just adding it
//! to the handler's arguments. Requests without a valid
//! `Authorization: Bearer <token>` header never reach the handler body.
//!
//! [`NoteId`] and [`JsonBody`] replace the stock `Path`/`Json` extractors so
//! that their rejections also come back as `{error: true, message}` instead
//! of axum's plain-text defaults.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::{header, request::Parts};
use axum::Json;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// The identity decoded from the request's access token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        let Some(token) = header.and_then(|h| h.strip_prefix("Bearer ")) else {
            return Err(api::Error::unauthorized("Missing bearer token").into());
        };

        let claims = state.auth.authenticate(token.trim())?;
        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}

/// A note id from the request path. A malformed id is indistinguishable from
/// a missing note, so the rejection is the not-found body.
#[derive(Debug, Clone, Copy)]
pub struct NoteId(pub Uuid);

#[axum::async_trait]
impl<S> FromRequestParts<S> for NoteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<Uuid>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(NoteId(id)),
            Err(_) => Err(api::Error::NoteNotFound.into()),
        }
    }
}

/// A JSON request body whose rejection keeps the error contract: malformed
/// or missing JSON surfaces as a 400 with the usual JSON body.
pub struct JsonBody<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(api::Error::validation(rejection.body_text()).into()),
        }
    }
}
