//! `/api/inference/health`: the host's view of the inference endpoint.

use axum::Json;
use axum::extract::State;
use detections::InferenceStatus;

use crate::state::AppState;

/// Probe the endpoint and report reachability and model state.
///
/// Always answers 200; an unhealthy endpoint is described in the body.
pub async fn inference_health(State(state): State<AppState>) -> Json<InferenceStatus> {
    Json(state.probe.check().await)
}

#[cfg(test)]
#[path = "inference_test.rs"]
mod tests;
