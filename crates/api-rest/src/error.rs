use api_shared::ErrorRes;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use showcase_core::constants::REQUIRED_FIELDS_MESSAGE;
use showcase_core::CoreError;
use thiserror::Error;

/// Failure of a REST handler, rendered as `{ "error": "..." }`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// `message` is what the client sees; `source` is only logged.
    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: CoreError,
    },
}

impl ApiError {
    pub fn internal(message: &'static str, source: CoreError) -> Self {
        ApiError::Internal { message, source }
    }

    /// Map a core failure: invalid input becomes 400, everything else 500 with `message`.
    pub fn from_core(message: &'static str, err: CoreError) -> Self {
        match err {
            CoreError::MissingField(_) => ApiError::BadRequest(REQUIRED_FIELDS_MESSAGE.into()),
            e if e.is_invalid_input() => ApiError::BadRequest(e.to_string()),
            e => ApiError::internal(message, e),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(reason) => tracing::debug!("rejected request: {reason}"),
            ApiError::Internal { message, source } => tracing::error!("{message}: {source:?}"),
        }

        let body = ErrorRes {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
