use axum::routing::get;
use axum::Router;
use shortmap_core::KvStore;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    counter_handler, create_from_form, create_from_query, health_handler, redirect_handler,
    save_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the gateway router.
    ///
    /// The bare `/{code}` route comes last in spirit: every reserved
    /// path (`/c`, `/n`, `/save`, `/health`) is a literal route, which
    /// axum matches ahead of the capture.
    pub fn router<S: KvStore>(state: AppState<S>) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/c",
                get(create_from_query::<S>).post(create_from_form::<S>),
            )
            .route("/n", get(counter_handler::<S>))
            .route("/save", get(save_handler::<S>).post(save_handler::<S>))
            .route("/{code}", get(redirect_handler::<S>))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
