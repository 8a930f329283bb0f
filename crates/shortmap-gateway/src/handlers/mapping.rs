use axum::extract::{Form, Query, State};
use axum::Json;
use shortmap_core::KvStore;
use tracing::info;

use crate::error::Result;
use crate::model::{CreateParams, CreateResponse};
use crate::state::AppState;

/// `GET /c?url=...&ext=...`
pub async fn create_from_query<S: KvStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<CreateParams>,
) -> Result<Json<CreateResponse>> {
    create(state, params).await
}

/// `POST /c` with a form body.
pub async fn create_from_form<S: KvStore>(
    State(state): State<AppState<S>>,
    Form(params): Form<CreateParams>,
) -> Result<Json<CreateResponse>> {
    create(state, params).await
}

async fn create<S: KvStore>(
    state: AppState<S>,
    params: CreateParams,
) -> Result<Json<CreateResponse>> {
    let assignment = state.registry.get_or_create(&params.url, &params.ext).await?;

    if assignment.is_new {
        info!(code = %assignment.code, url = %assignment.record.url, "created mapping");
    }

    Ok(Json(CreateResponse {
        status: "ok",
        code: assignment.code.to_string(),
        info: assignment.record,
        new: assignment.is_new,
    }))
}
