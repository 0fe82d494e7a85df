//! Host configuration parsed from environment variables.

use std::time::Duration;

use detections::{DEFAULT_PREDICT_URL, health_url_for};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got {value:?}")]
    NotHttp { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// URL the browser posts images to.
    pub predict_url: String,
    /// URL the host probes for `/api/inference/health`.
    pub inference_health_url: String,
    pub inference_timeout: Duration,
}

impl ServerConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PREDICT_URL`: default `http://localhost:5000/predict`
    /// - `INFERENCE_HEALTH_URL`: default derived from `PREDICT_URL`
    /// - `INFERENCE_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_or("PORT", var("PORT"), DEFAULT_PORT)?;
        let predict_url = http_url("PREDICT_URL", var("PREDICT_URL").unwrap_or_else(|| DEFAULT_PREDICT_URL.to_owned()))?;
        let inference_health_url = match var("INFERENCE_HEALTH_URL") {
            Some(url) => http_url("INFERENCE_HEALTH_URL", url)?,
            None => health_url_for(&predict_url),
        };
        let timeout_secs = parse_or("INFERENCE_TIMEOUT_SECS", var("INFERENCE_TIMEOUT_SECS"), DEFAULT_INFERENCE_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "INFERENCE_TIMEOUT_SECS", value: "0".to_owned() });
        }

        Ok(Self { port, predict_url, inference_health_url, inference_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn http_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value)
    } else {
        Err(ConfigError::NotHttp { var, value })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
