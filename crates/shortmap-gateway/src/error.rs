use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shortmap_core::{RegistryError, ResolveError};

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Transport-facing error adapter for the mapping layers.
#[derive(Debug)]
pub enum ApiError {
    Registry(RegistryError),
    Resolve(ResolveError),
    /// A resolved record whose URL cannot be placed in a Location header.
    InvalidRedirect(String),
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self::Registry(err)
    }
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        Self::Resolve(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Registry(RegistryError::EmptyUrl) => {
                (StatusCode::BAD_REQUEST, "url is empty".to_string())
            }
            ApiError::Resolve(ResolveError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, self.message())
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.message()),
        };

        let body = Json(ErrorResponse {
            status: "error",
            message,
        });
        (status, body).into_response()
    }
}

impl ApiError {
    fn message(&self) -> String {
        match self {
            ApiError::Registry(err) => err.to_string(),
            ApiError::Resolve(err) => err.to_string(),
            ApiError::InvalidRedirect(message) => message.clone(),
        }
    }
}
