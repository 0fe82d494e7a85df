//! REST helpers for the host server's own endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use detections::InferenceStatus;

#[cfg(any(test, feature = "hydrate"))]
const INFERENCE_HEALTH_PATH: &str = "/api/inference/health";

/// Decode the host's inference status body; anything but a 2xx JSON body is `None`.
#[cfg(any(test, feature = "hydrate"))]
fn inference_status_from(status: u16, body: &str) -> Option<InferenceStatus> {
    if !(200..300).contains(&status) {
        return None;
    }
    serde_json::from_str(body).ok()
}

/// Ask the host whether the inference endpoint is up.
/// Returns `None` if the host cannot be reached or on the server.
pub async fn fetch_inference_status() -> Option<InferenceStatus> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(INFERENCE_HEALTH_PATH)
            .send()
            .await
            .ok()?;
        let status = resp.status();
        let body = resp.text().await.ok()?;
        inference_status_from(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
