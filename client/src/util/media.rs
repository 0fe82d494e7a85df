//! Blob, file and object-URL plumbing between the DOM and [`ImagePayload`].
//!
//! Requires a browser environment; the pure helpers are shared with tests.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast as _, JsValue};

#[cfg(feature = "hydrate")]
use crate::state::detection::{ImagePayload, SelectedImage};

pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Errors raised while moving image bytes in and out of the DOM.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    #[error("could not read file: {0}")]
    Read(String),
    #[error("could not create blob: {0}")]
    Blob(String),
    #[error("could not create object URL: {0}")]
    ObjectUrl(String),
}

/// Browsers report an empty type for unknown extensions.
pub fn content_type_or_default(raw: &str) -> &str {
    if raw.trim().is_empty() { FALLBACK_CONTENT_TYPE } else { raw }
}

/// Only `blob:` URLs are ours to revoke; data URLs from the endpoint are not.
pub fn is_object_url(url: &str) -> bool {
    url.starts_with("blob:")
}

/// Best-effort text for a thrown JS value.
#[cfg(feature = "hydrate")]
pub fn js_error_text(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Read a chosen file into a payload plus a preview URL.
///
/// # Errors
///
/// Returns a [`MediaError`] if the bytes cannot be read or no object URL can be created.
#[cfg(feature = "hydrate")]
pub async fn read_file(file: &web_sys::File) -> Result<SelectedImage, MediaError> {
    let bytes = blob_bytes(file).await?;
    let preview_url = object_url(file)?;
    let payload = ImagePayload::new(file.name(), content_type_or_default(&file.type_()), bytes);
    Ok(SelectedImage { payload, preview_url })
}

/// Copy a blob's contents into memory.
///
/// # Errors
///
/// Returns [`MediaError::Read`] if the browser fails to produce an `ArrayBuffer`.
#[cfg(feature = "hydrate")]
pub async fn blob_bytes(blob: &web_sys::Blob) -> Result<Vec<u8>, MediaError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(blob.array_buffer())
        .await
        .map_err(|e| MediaError::Read(js_error_text(&e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Wrap bytes in a typed `Blob`.
///
/// # Errors
///
/// Returns [`MediaError::Blob`] if the constructor throws.
#[cfg(feature = "hydrate")]
pub fn blob_from_bytes(bytes: &[u8], content_type: &str) -> Result<web_sys::Blob, MediaError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(content_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| MediaError::Blob(js_error_text(&e)))
}

/// Create a `blob:` URL for previewing.
///
/// # Errors
///
/// Returns [`MediaError::ObjectUrl`] if the browser refuses.
#[cfg(feature = "hydrate")]
pub fn object_url(blob: &web_sys::Blob) -> Result<String, MediaError> {
    web_sys::Url::create_object_url_with_blob(blob).map_err(|e| MediaError::ObjectUrl(js_error_text(&e)))
}

/// Release a preview URL created by [`object_url`].
pub fn revoke_object_url(url: &str) {
    if !is_object_url(url) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
