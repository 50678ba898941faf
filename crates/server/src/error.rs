use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use poolstat_executor::Error;
use poolstat_wire::{DecodeError, WireError};
use thiserror::Error;

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned from request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Executor(#[from] Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Body could not be read, e.g. it exceeds the configured limit
    #[error("{message}")]
    Body {
        /// Status chosen by the body extractor
        status: StatusCode,
        /// Extractor message
        message: String,
    },
}

impl ApiError {
    pub(crate) fn body(rejection: &BytesRejection) -> Self {
        ApiError::Body {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// HTTP status for an executor error
pub fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::EmptyPool { .. } => StatusCode::BAD_REQUEST,
        Error::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
        Error::CapacityExceeded { .. } => StatusCode::BAD_REQUEST,
        Error::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Executor(e) => (status_for(e), WireError::from(e)),
            ApiError::Decode(e) => (StatusCode::BAD_REQUEST, WireError::from(e)),
            ApiError::Body { status, message } => {
                let code = if *status == StatusCode::PAYLOAD_TOO_LARGE {
                    "PayloadTooLarge"
                } else {
                    "InvalidRequest"
                };
                (*status, WireError::new(code, message.clone()))
            }
        };
        if status.is_server_error() {
            tracing::error!(code = %body.code, message = %body.message, "request failed");
        } else {
            tracing::debug!(%status, code = %body.code, "request rejected");
        }
        (status, Json(body)).into_response()
    }
}
