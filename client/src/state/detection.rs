//! Detection page view state.
//!
//! DESIGN
//! ======
//! The page is a small state machine: an input mode (`Upload`, `Camera`,
//! `Preview`) plus an orthogonal `loading` flag. Transitions are plain
//! methods that mutate the state and return the browser side effects the
//! page has to carry out (start/stop the camera, revoke an object URL). No
//! transition touches the DOM, so the whole workflow is testable on the host.
//!
//! Every outbound request is issued under a sequence number. Anything that
//! replaces the queued image (new selection, capture, reset, unmount) bumps
//! the sequence, and completions carrying an older number are dropped.

#[cfg(test)]
#[path = "detection_test.rs"]
mod detection_test;

use std::sync::Arc;

use detections::{Detection, PredictError, PredictResponse};

pub const CAMERA_ERROR_MESSAGE: &str = "Could not access camera. Please allow permissions.";
pub const DETECTION_ERROR_MESSAGE: &str = "Detection failed. Please try again.";

/// File name given to frames captured from the camera.
pub const CAPTURE_FILE_NAME: &str = "capture.jpg";
pub const CAPTURE_CONTENT_TYPE: &str = "image/jpeg";

/// Raw image bytes ready to be sent as the multipart `image` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImagePayload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Arc<[u8]>,
}

impl ImagePayload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { file_name: file_name.into(), content_type: content_type.into(), bytes: bytes.into() }
    }

    /// Payload for a JPEG frame grabbed from the camera.
    pub fn capture(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::new(CAPTURE_FILE_NAME, CAPTURE_CONTENT_TYPE, bytes)
    }
}

/// The queued image and the object URL used to preview it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedImage {
    pub payload: ImagePayload,
    pub preview_url: String,
}

/// Which input widget the page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptureMode {
    #[default]
    Upload,
    Camera,
    /// A captured frame is queued and the camera is released.
    Preview,
}

/// The two user-visible failure conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionError {
    CameraUnavailable,
    RequestFailed,
}

impl DetectionError {
    pub fn message(self) -> &'static str {
        match self {
            Self::CameraUnavailable => CAMERA_ERROR_MESSAGE,
            Self::RequestFailed => DETECTION_ERROR_MESSAGE,
        }
    }
}

/// Browser side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    StartCamera,
    StopCamera,
    RevokeUrl(String),
}

/// Handle for one outbound predict request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetectTicket {
    pub seq: u64,
    pub payload: ImagePayload,
}

/// One tile of the results grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultTile {
    pub label: String,
    pub percent: String,
    pub bar_style: String,
}

impl From<&Detection> for ResultTile {
    fn from(det: &Detection) -> Self {
        Self {
            label: det.class_name.clone(),
            percent: det.percent_label(),
            bar_style: detections::confidence_width(det.confidence),
        }
    }
}

/// Full view state of the detection page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectionState {
    pub mode: CaptureMode,
    pub selected: Option<SelectedImage>,
    pub result: Option<PredictResponse>,
    pub loading: bool,
    pub error: Option<DetectionError>,
    /// A camera stream is attached to the video element.
    pub camera_live: bool,
    /// A `getUserMedia` request is in flight.
    pub camera_pending: bool,
    pub request_seq: u64,
}

impl DetectionState {
    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// A file was chosen in the upload dropzone.
    pub fn select_file(&mut self, image: SelectedImage) -> Vec<Command> {
        let mut commands = self.release_preview();
        commands.extend(self.release_camera());
        self.mode = CaptureMode::Upload;
        self.queue(image);
        commands
    }

    /// The Upload tab was clicked.
    pub fn choose_upload(&mut self) -> Vec<Command> {
        self.mode = CaptureMode::Upload;
        self.release_camera()
    }

    /// The Camera tab was clicked.
    pub fn choose_camera(&mut self) -> Vec<Command> {
        self.mode = CaptureMode::Camera;
        self.request_camera()
    }

    /// The browser granted a video stream.
    ///
    /// A grant that arrives after the user left camera mode, or while a
    /// stream is already attached, is handed back.
    pub fn camera_started(&mut self) -> Vec<Command> {
        self.camera_pending = false;
        if self.mode != CaptureMode::Camera || self.camera_live {
            return vec![Command::StopCamera];
        }
        self.camera_live = true;
        self.error = None;
        Vec::new()
    }

    /// The browser refused or failed to provide a video stream.
    ///
    /// A failure while a stream is already attached leaves that stream in place.
    pub fn camera_failed(&mut self) -> Vec<Command> {
        self.camera_pending = false;
        if self.camera_live || self.mode != CaptureMode::Camera {
            return Vec::new();
        }
        self.mode = CaptureMode::Upload;
        self.error = Some(DetectionError::CameraUnavailable);
        Vec::new()
    }

    /// A frame was grabbed from the live video.
    pub fn capture(&mut self, image: SelectedImage) -> Vec<Command> {
        if self.mode != CaptureMode::Camera || !self.camera_live {
            return vec![Command::RevokeUrl(image.preview_url)];
        }
        let mut commands = self.release_preview();
        commands.extend(self.release_camera());
        self.mode = CaptureMode::Preview;
        self.queue(image);
        commands
    }

    /// Start a predict request for the queued image, if allowed.
    pub fn begin_detect(&mut self) -> Option<DetectTicket> {
        if !self.can_submit() {
            return None;
        }
        let payload = self.selected.as_ref()?.payload.clone();
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        Some(DetectTicket { seq: self.request_seq, payload })
    }

    /// Apply the outcome of request `seq`. Returns `false` if it was stale.
    pub fn finish_detect(&mut self, seq: u64, outcome: Result<PredictResponse, PredictError>) -> bool {
        if seq != self.request_seq || !self.loading {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(response) => self.result = Some(response),
            Err(_) => self.error = Some(DetectionError::RequestFailed),
        }
        true
    }

    /// The Reset button was clicked.
    pub fn reset(&mut self) -> Vec<Command> {
        let mut commands = self.release_preview();
        self.clear_outcome();
        if matches!(self.mode, CaptureMode::Camera | CaptureMode::Preview) {
            self.mode = CaptureMode::Camera;
            commands.extend(self.request_camera());
        }
        commands
    }

    /// The page is being unmounted.
    pub fn teardown(&mut self) -> Vec<Command> {
        let mut commands = self.release_camera();
        commands.extend(self.release_preview());
        self.clear_outcome();
        commands
    }

    fn request_camera(&mut self) -> Vec<Command> {
        if self.camera_live || self.camera_pending {
            return Vec::new();
        }
        self.camera_pending = true;
        vec![Command::StartCamera]
    }

    fn queue(&mut self, image: SelectedImage) {
        self.selected = Some(image);
        self.clear_outcome();
    }

    fn clear_outcome(&mut self) {
        self.result = None;
        self.error = None;
        self.loading = false;
        self.request_seq += 1;
    }

    fn release_preview(&mut self) -> Vec<Command> {
        self.selected
            .take()
            .map(|sel| vec![Command::RevokeUrl(sel.preview_url)])
            .unwrap_or_default()
    }

    fn release_camera(&mut self) -> Vec<Command> {
        if self.camera_live {
            self.camera_live = false;
            vec![Command::StopCamera]
        } else {
            Vec::new()
        }
    }

    // =========================================================================
    // DERIVED VIEW
    // =========================================================================

    /// Submit is allowed with a queued image, nothing in flight and no result yet.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.loading && self.result.is_none()
    }

    /// Image shown in the viewport: the annotated result wins over the preview.
    pub fn display_image(&self) -> Option<String> {
        self.result
            .as_ref()
            .map(|r| r.image.clone())
            .or_else(|| self.selected.as_ref().map(|s| s.preview_url.clone()))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.loading {
            "Detecting..."
        } else if self.result.is_some() {
            "Detection Complete"
        } else {
            "Start Detection"
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(DetectionError::message)
    }

    pub fn detections(&self) -> &[Detection] {
        self.result.as_ref().map_or(&[], |r| r.detections.as_slice())
    }

    pub fn result_tiles(&self) -> Vec<ResultTile> {
        self.detections().iter().map(ResultTile::from).collect()
    }

    pub fn shows_dropzone(&self) -> bool {
        self.mode == CaptureMode::Upload && self.selected.is_none()
    }

    pub fn shows_camera(&self) -> bool {
        self.mode == CaptureMode::Camera
    }

    pub fn shows_actions(&self) -> bool {
        self.selected.is_some() || self.result.is_some()
    }

    pub fn shows_viewport_image(&self) -> bool {
        matches!(self.mode, CaptureMode::Upload | CaptureMode::Preview) && self.selected.is_some()
    }

    pub fn shows_placeholder(&self) -> bool {
        self.selected.is_none() && self.mode != CaptureMode::Camera
    }

    pub fn camera_tab_active(&self) -> bool {
        matches!(self.mode, CaptureMode::Camera | CaptureMode::Preview)
    }
}
