//! Maps `api::Error` onto HTTP responses.
//!
//! Every failure body has the same shape, `{error: true, message}`. Internal
//! failures are logged and masked; the client only ever sees
//! "Internal Server Error" for those.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub struct ApiError {
    error: api::Error,
    message: Option<String>,
}

impl ApiError {
    /// Keep the status mapping for `error` but send a different message.
    pub fn with_message(error: api::Error, message: impl Into<String>) -> Self {
        Self {
            error,
            message: Some(message.into()),
        }
    }
}

impl From<api::Error> for ApiError {
    fn from(error: api::Error) -> Self {
        Self {
            error,
            message: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use api::Error;

        let (status, message) = match &self.error {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::EmailTaken | Error::InvalidCredentials => {
                (StatusCode::BAD_REQUEST, self.error.to_string())
            }
            Error::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            Error::UserNotFound | Error::NoteNotFound => {
                (StatusCode::NOT_FOUND, self.error.to_string())
            }
            Error::PasswordHash(_) | Error::Token(_) | Error::Database(_) => {
                tracing::error!(error = %self.error, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let message = self.message.unwrap_or(message);
        let body = Json(json!({
            "error": true,
            "message": message,
        }));

        (status, body).into_response()
    }
}
