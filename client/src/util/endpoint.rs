//! Resolution of the inference endpoint URL.
//!
//! The host renders the configured URL into
//! `<meta name="objectdetect:predict-url" content="...">`; hydrate reads it
//! back so the browser and the host agree without a rebuild. A missing or
//! blank tag falls back to [`DEFAULT_PREDICT_URL`].

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

use detections::DEFAULT_PREDICT_URL;

pub const PREDICT_URL_META: &str = "objectdetect:predict-url";

/// CSS selector for the predict URL meta tag.
pub fn meta_selector() -> String {
    format!("meta[name=\"{PREDICT_URL_META}\"]")
}

/// Pick the configured URL or the default.
pub fn resolve(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_PREDICT_URL)
        .to_owned()
}

/// The URL detection requests are posted to.
pub fn predict_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&meta_selector()).ok().flatten())
            .and_then(|el| el.get_attribute("content"));
        resolve(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        resolve(None)
    }
}
