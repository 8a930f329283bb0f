use serde::{Deserialize, Serialize};
use shortmap_core::Record;

/// Parameters of the create-or-lookup endpoint, accepted from either
/// the query string or a form body.
#[derive(Debug, Deserialize)]
pub struct CreateParams {
    pub url: String,
    #[serde(default)]
    pub ext: String,
}

#[derive(Serialize)]
pub struct CreateResponse {
    pub status: &'static str,
    pub code: String,
    pub info: Record,
    pub new: bool,
}

#[derive(Serialize)]
pub struct CounterResponse {
    pub status: &'static str,
    pub value: u64,
}

#[derive(Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}
