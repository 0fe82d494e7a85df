//! Health probe for the external inference endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser posts images straight to the endpoint; the host never relays
//! them. Its only outbound call is this probe, which backs
//! `/api/inference/health` so the navbar can show whether the model is up.
//!
//! ERROR HANDLING
//! ==============
//! `check` never fails. Transport errors, non-success statuses and malformed
//! bodies are folded into an [`InferenceStatus`] with a `detail` string and
//! logged at `warn`.

use std::time::Duration;

use detections::{HealthReport, InferenceStatus};
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct InferenceProbe {
    client: reqwest::Client,
    health_url: String,
}

impl InferenceProbe {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(health_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, health_url: health_url.into() })
    }

    pub fn health_url(&self) -> &str {
        &self.health_url
    }

    /// Ask the endpoint for its health and classify the answer.
    pub async fn check(&self) -> InferenceStatus {
        let resp = match self.client.get(&self.health_url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(url = %self.health_url, error = %e, "inference endpoint unreachable");
                return unreachable(e.to_string());
            }
        };
        let status = resp.status().as_u16();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(url = %self.health_url, error = %e, "inference health body unreadable");
                return unreachable(e.to_string());
            }
        };
        let result = status_from_response(status, &body);
        if result.detail.is_some() {
            warn!(url = %self.health_url, status, detail = ?result.detail, "inference endpoint unhealthy");
        } else {
            debug!(url = %self.health_url, model_loaded = result.model_loaded, "inference health ok");
        }
        result
    }
}

fn unreachable(detail: String) -> InferenceStatus {
    InferenceStatus { reachable: false, model_loaded: false, detail: Some(detail) }
}

/// Classify a `/health` response from the endpoint.
pub fn status_from_response(status: u16, body: &str) -> InferenceStatus {
    if !(200..300).contains(&status) {
        return InferenceStatus { reachable: true, model_loaded: false, detail: Some(format!("health returned status {status}")) };
    }
    match serde_json::from_str::<HealthReport>(body) {
        Ok(report) => InferenceStatus { reachable: true, model_loaded: report.model_loaded, detail: None },
        Err(e) => InferenceStatus { reachable: true, model_loaded: false, detail: Some(format!("invalid health body: {e}")) },
    }
}

#[cfg(test)]
#[path = "inference_test.rs"]
mod tests;
