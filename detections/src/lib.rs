//! Wire schema for the object-detection inference endpoint.
//!
//! This crate owns the `/predict` contract shared by the Leptos `client`, the
//! host server and the `cli`: the multipart field name, the JSON response
//! shape, response classification and the small formatting helpers every
//! consumer renders detections with.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decode failures are kept apart in [`PredictError`]
//! so callers can log the precise cause; the UI still collapses all of them
//! into a single user-facing message.


use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Endpoint used when nothing else is configured.
pub const DEFAULT_PREDICT_URL: &str = "http://localhost:5000/predict";

/// Multipart form field carrying the image bytes.
pub const IMAGE_FIELD: &str = "image";

// =============================================================================
// ERRORS
// =============================================================================

/// Failure modes of a single predict round-trip.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status.
    #[error("inference endpoint returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// A success response whose body is not a predict response.
    #[error("invalid predict response: {0}")]
    Parse(String),

    /// The image could not be packed into a request.
    #[error("could not encode request: {0}")]
    Encode(String),

    /// Predict was called where no HTTP client exists (server render).
    #[error("predict is only available in the browser")]
    Unavailable,
}

/// Error returned by [`decode_data_url`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataUrlError {
    #[error("not a data URL")]
    NotDataUrl,
    #[error("data URL is not base64 encoded")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    Decode(String),
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

/// One classified region reported by the endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Class label, `class` on the wire.
    #[serde(rename = "class")]
    pub class_name: String,
    /// Score in `[0, 1]`.
    pub confidence: f64,
    /// Box as `[center_x, center_y, width, height]` in pixels, when sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<[f64; 4]>,
}

impl Detection {
    /// Rounded percentage label, e.g. `0.93` -> `"93%"`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        confidence_percent(self.confidence)
    }
}

/// Body of a successful `POST /predict`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Annotated image, usually a `data:image/jpeg;base64,...` URL.
    pub image: String,
    #[serde(default)]
    pub detections: Vec<Detection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl PredictResponse {
    /// The endpoint's summary, or one derived from the detection count.
    #[must_use]
    pub fn summary_line(&self) -> String {
        self.summary
            .clone()
            .unwrap_or_else(|| format!("Detected {} objects", self.detections.len()))
    }
}

/// Body the endpoint sends with 4xx/5xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of the endpoint's `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

/// Host view of the endpoint's health, served at `/api/inference/health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceStatus {
    pub reachable: bool,
    pub model_loaded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classify a raw `/predict` response.
///
/// # Errors
///
/// Returns [`PredictError::Status`] for non-2xx statuses (carrying the
/// endpoint's `error` text when the body has one) and
/// [`PredictError::Parse`] when a 2xx body is not a predict response.
pub fn parse_predict_response(status: u16, body: &str) -> Result<PredictResponse, PredictError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| "no error body".to_owned());
        return Err(PredictError::Status { status, message });
    }
    serde_json::from_str::<PredictResponse>(body).map_err(|e| PredictError::Parse(e.to_string()))
}

// =============================================================================
// FORMATTING
// =============================================================================

fn clamped_percent(confidence: f64) -> f64 {
    if confidence.is_finite() {
        (confidence.clamp(0.0, 1.0) * 100.0).round()
    } else {
        0.0
    }
}

/// Rounded whole-number percentage with a `%` suffix.
#[must_use]
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.0}%", clamped_percent(confidence))
}

/// CSS `width` declaration for a confidence bar.
#[must_use]
pub fn confidence_width(confidence: f64) -> String {
    format!("width: {:.0}%", clamped_percent(confidence))
}

/// Derive the endpoint's `/health` URL from its `/predict` URL.
#[must_use]
pub fn health_url_for(predict_url: &str) -> String {
    let trimmed = predict_url.trim_end_matches('/');
    match trimmed.strip_suffix("/predict") {
        Some(base) => format!("{base}/health"),
        None => format!("{trimmed}/health"),
    }
}

/// Split a `data:<mime>;base64,<payload>` URL into its MIME type and bytes.
///
/// # Errors
///
/// Returns a [`DataUrlError`] if the string is not a base64 data URL.
pub fn decode_data_url(url: &str) -> Result<(String, Vec<u8>), DataUrlError> {
    let rest = url.strip_prefix("data:").ok_or(DataUrlError::NotDataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUrlError::NotDataUrl)?;
    let mime = header.strip_suffix(";base64").ok_or(DataUrlError::NotBase64)?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.trim())
        .map_err(|e| DataUrlError::Decode(e.to_string()))?;
    Ok((mime.to_owned(), bytes))
}
