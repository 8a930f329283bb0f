use axum::extract::State;
use axum::Json;
use shortmap_core::KvStore;
use tracing::info;

use crate::error::{ApiError, Result};
use crate::model::{CounterResponse, SaveResponse};
use crate::state::AppState;

/// `GET /n` — read-only snapshot of the next-code value.
pub async fn counter_handler<S: KvStore>(
    State(state): State<AppState<S>>,
) -> Json<CounterResponse> {
    Json(CounterResponse {
        status: "ok",
        value: state.registry.counter_value().await,
    })
}

/// `GET|POST /save` — checkpoint the counter to the backing store.
pub async fn save_handler<S: KvStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<SaveResponse>> {
    state
        .registry
        .checkpoint()
        .await
        .map_err(|e| ApiError::Registry(e.into()))?;

    info!("counter checkpointed");
    Ok(Json(SaveResponse {
        status: "ok",
        message: "saved",
    }))
}
