//! Multipart `POST /predict` against the inference endpoint.
//!
//! Client-side (hydrate): the image bytes are wrapped in a `Blob`, appended
//! to a `FormData` under the `image` field and sent with `gloo-net`.
//! Server-side (SSR): returns [`PredictError::Unavailable`]; the request is
//! only ever issued from a click handler.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a classified [`PredictError`]. The page turns
//! any of them into the one static message and logs the detail.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use detections::{PredictError, PredictResponse};

use crate::state::detection::ImagePayload;

#[cfg(any(test, feature = "hydrate"))]
const FALLBACK_FILE_NAME: &str = "upload";

/// File name sent in the multipart part; browsers reject empty names.
#[cfg(any(test, feature = "hydrate"))]
fn part_file_name(image: &ImagePayload) -> &str {
    let name = image.file_name.trim();
    if name.is_empty() { FALLBACK_FILE_NAME } else { name }
}

/// Console line written when a predict request fails.
#[cfg(any(test, feature = "hydrate"))]
fn failure_log_line(endpoint: &str, err: &PredictError) -> String {
    format!("predict via {endpoint} failed: {err}")
}

/// Send one image to `endpoint` and classify the response.
///
/// # Errors
///
/// Returns a [`PredictError`] if the request cannot be built, the transport
/// fails, the endpoint answers with a non-success status, or the body is not
/// a predict response.
pub async fn predict(endpoint: &str, image: &ImagePayload) -> Result<PredictResponse, PredictError> {
    #[cfg(feature = "hydrate")]
    {
        let result = send(endpoint, image).await;
        if let Err(e) = &result {
            log::error!("{}", failure_log_line(endpoint, e));
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, image);
        Err(PredictError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn send(endpoint: &str, image: &ImagePayload) -> Result<PredictResponse, PredictError> {
    use crate::util::media;

    let blob = media::blob_from_bytes(&image.bytes, &image.content_type)
        .map_err(|e| PredictError::Encode(e.to_string()))?;
    let form = web_sys::FormData::new().map_err(|e| PredictError::Encode(media::js_error_text(&e)))?;
    form.append_with_blob_and_filename(detections::IMAGE_FIELD, &blob, part_file_name(image))
        .map_err(|e| PredictError::Encode(media::js_error_text(&e)))?;

    log::debug!("posting {} ({} bytes) to {endpoint}", image.file_name, image.bytes.len());
    let resp = gloo_net::http::Request::post(endpoint)
        .body(form)
        .map_err(|e| PredictError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| PredictError::Network(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.map_err(|e| PredictError::Network(e.to_string()))?;
    detections::parse_predict_response(status, &body)
}
