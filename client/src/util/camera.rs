//! Webcam access through `navigator.mediaDevices`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The detection page asks for a video-only stream, attaches it to a
//! `<video>` element, and grabs single frames by drawing the video onto an
//! off-screen canvas and encoding it as JPEG. Every track of a stream is
//! stopped when the page leaves camera mode.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`CameraError`]; the page shows one static
//! message for any acquisition failure and logs the detail.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::state::detection::{CAPTURE_CONTENT_TYPE, ImagePayload, SelectedImage};
#[cfg(feature = "hydrate")]
use crate::util::media;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CameraError {
    #[error("camera API unavailable: {0}")]
    Unsupported(String),
    #[error("camera access denied: {0}")]
    Denied(String),
    #[error("video has no frame yet")]
    NoFrame,
    #[error("frame encoding failed: {0}")]
    Encode(String),
}

/// Frame dimensions for a capture; `None` until the video has metadata.
pub fn frame_size(width: u32, height: u32) -> Option<(u32, u32)> {
    (width > 0 && height > 0).then_some((width, height))
}

/// Request a video-only stream from the user's default camera.
///
/// # Errors
///
/// Returns [`CameraError::Unsupported`] without `mediaDevices` and
/// [`CameraError::Denied`] when the browser rejects the request.
#[cfg(feature = "hydrate")]
pub async fn start() -> Result<web_sys::MediaStream, CameraError> {
    let window = web_sys::window().ok_or_else(|| CameraError::Unsupported("no window".to_owned()))?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| CameraError::Unsupported(media::js_error_text(&e)))?;
    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| CameraError::Denied(media::js_error_text(&e)))?;
    let stream = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| CameraError::Denied(media::js_error_text(&e)))?;
    stream
        .dyn_into::<web_sys::MediaStream>()
        .map_err(|_| CameraError::Unsupported("getUserMedia returned a non-stream".to_owned()))
}

/// Show `stream` in `video` and start playback.
#[cfg(feature = "hydrate")]
pub fn attach(video: &web_sys::HtmlVideoElement, stream: &web_sys::MediaStream) {
    video.set_src_object(Some(stream));
    let _ = video.play();
}

#[cfg(feature = "hydrate")]
pub fn detach(video: &web_sys::HtmlVideoElement) {
    video.set_src_object(None);
}

/// Stop every track so the camera indicator turns off.
#[cfg(feature = "hydrate")]
pub fn stop(stream: &web_sys::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Grab the current video frame as a JPEG capture.
///
/// # Errors
///
/// Returns [`CameraError::NoFrame`] before the first frame is decoded and
/// [`CameraError::Encode`] if drawing or encoding fails.
#[cfg(feature = "hydrate")]
pub async fn capture_frame(
    video: &web_sys::HtmlVideoElement,
    canvas: &web_sys::HtmlCanvasElement,
) -> Result<SelectedImage, CameraError> {
    let (width, height) = frame_size(video.video_width(), video.video_height()).ok_or(CameraError::NoFrame)?;
    canvas.set_width(width);
    canvas.set_height(height);
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| CameraError::Encode("2d context unavailable".to_owned()))?;
    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)
        .map_err(|e| CameraError::Encode(media::js_error_text(&e)))?;

    let blob = canvas_blob(canvas).await?;
    let bytes = media::blob_bytes(&blob).await.map_err(|e| CameraError::Encode(e.to_string()))?;
    let preview_url = media::object_url(&blob).map_err(|e| CameraError::Encode(e.to_string()))?;
    Ok(SelectedImage { payload: ImagePayload::capture(bytes), preview_url })
}

#[cfg(feature = "hydrate")]
async fn canvas_blob(canvas: &web_sys::HtmlCanvasElement) -> Result<web_sys::Blob, CameraError> {
    let (tx, rx) = futures::channel::oneshot::channel::<Option<web_sys::Blob>>();
    let callback: Closure<dyn FnMut(JsValue)> = Closure::once(move |value: JsValue| {
        let _ = tx.send(value.dyn_into::<web_sys::Blob>().ok());
    });
    canvas
        .to_blob_with_type(callback.as_ref().unchecked_ref(), CAPTURE_CONTENT_TYPE)
        .map_err(|e| CameraError::Encode(media::js_error_text(&e)))?;
    let blob = rx.await.ok().flatten();
    drop(callback);
    blob.ok_or_else(|| CameraError::Encode("canvas produced no blob".to_owned()))
}
