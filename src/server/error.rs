use axum::{
    http::StatusCode,
    response::{IntoResponse, Response}
};
use anyhow;

use investor_registry::RegistryError;
use investor_registry::backend::BackendError;

pub(crate) enum ServerError {
    NotFound(String),
    Conflict(String),
    InternalError(anyhow::Error)
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) =>
                (StatusCode::NOT_FOUND, format!("Resource not found: {}", msg)).into_response(),
            Self::Conflict(msg) =>
                (StatusCode::CONFLICT, format!("Conflict: {}", msg)).into_response(),
            Self::InternalError(err) =>
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal error: {}", err)).into_response()
        }
    }
}

impl From<RegistryError> for ServerError {
    fn from(err: RegistryError) -> Self {
        let msg = err.to_string();
        match err {
            RegistryError::NotFound(_) => Self::NotFound(msg),
            RegistryError::AlreadyExists(_) => Self::Conflict(msg),
            other => Self::InternalError(other.into())
        }
    }
}

impl From<BackendError> for ServerError {
    fn from(err: BackendError) -> Self {
        Self::InternalError(err.into())
    }
}
