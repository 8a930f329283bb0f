use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, Response, StatusCode};
use shortmap_core::{Code, KvStore};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// `GET /{code}` — resolve and redirect.
///
/// A resolved code always answers 301: the mapping is permanent, so
/// clients may cache the redirect indefinitely.
pub async fn redirect_handler<S: KvStore>(
    State(state): State<AppState<S>>,
    Path(code): Path<String>,
) -> Result<Response<Body>> {
    let code = Code::new(code);
    let record = state.resolver.resolve(&code).await?;

    info!(code = %code, url = %record.url, ext = %record.ext, "redirect");

    Response::builder()
        .status(StatusCode::MOVED_PERMANENTLY)
        .header(header::LOCATION, record.url)
        .body(Body::empty())
        .map_err(|e| ApiError::InvalidRedirect(e.to_string()))
}
