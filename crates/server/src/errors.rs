use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::warn;

/// Service failure rendered as `{"error": ...}` with a matching status.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ServiceError::MissingBody | ServiceError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ServiceError::InvalidCredentials | ServiceError::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            ServiceError::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let err = self.0;
        warn!(code = err.code(), status = status.as_u16(), error = %err, "request failed");
        (status, Json(serde_json::json!({"error": err.to_string()}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
