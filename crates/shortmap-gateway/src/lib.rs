//! HTTP transport for the shortmap service.
//!
//! The gateway is near-zero-logic glue: it parses request parameters,
//! delegates to the registry and resolver, and shapes their results
//! into the JSON envelope or a permanent redirect.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
