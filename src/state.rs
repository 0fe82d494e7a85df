//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and the inference probe; both are cheap to clone.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::inference::InferenceProbe;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub probe: InferenceProbe,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the probe's HTTP client cannot be built.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let probe = InferenceProbe::new(config.inference_health_url.clone(), config.inference_timeout)?;
        Ok(Self { config: Arc::new(config), probe })
    }
}
