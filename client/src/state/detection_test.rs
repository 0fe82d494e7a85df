use super::*;

fn image(url: &str) -> SelectedImage {
    SelectedImage {
        payload: ImagePayload::new("photo.png", "image/png", vec![1_u8, 2, 3]),
        preview_url: url.to_owned(),
    }
}

fn response(image: &str) -> PredictResponse {
    PredictResponse {
        image: image.to_owned(),
        detections: vec![Detection { class_name: "person".to_owned(), confidence: 0.93, bbox: None }],
        summary: None,
    }
}

fn live_camera() -> DetectionState {
    let mut state = DetectionState::default();
    assert_eq!(state.choose_camera(), vec![Command::StartCamera]);
    assert!(state.camera_started().is_empty());
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_upload() {
    let state = DetectionState::default();
    assert_eq!(state.mode, CaptureMode::Upload);
    assert!(state.selected.is_none());
    assert!(state.result.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.shows_dropzone());
    assert!(state.shows_placeholder());
    assert!(!state.shows_actions());
    assert!(!state.can_submit());
}

// =============================================================
// File selection
// =============================================================

#[test]
fn select_file_clears_prior_result_and_error() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    let ticket = state.begin_detect().expect("ticket");
    state.finish_detect(ticket.seq, Ok(response("X")));
    state.error = Some(DetectionError::RequestFailed);

    let commands = state.select_file(image("blob:b"));

    assert_eq!(commands, vec![Command::RevokeUrl("blob:a".to_owned())]);
    assert!(state.result.is_none());
    assert!(state.detections().is_empty());
    assert!(state.error.is_none());
    assert_eq!(state.display_image().as_deref(), Some("blob:b"));
    assert!(state.can_submit());
}

#[test]
fn select_file_stops_live_camera() {
    let mut state = live_camera();
    let commands = state.select_file(image("blob:a"));
    assert_eq!(commands, vec![Command::StopCamera]);
    assert_eq!(state.mode, CaptureMode::Upload);
    assert!(!state.camera_live);
}

#[test]
fn selection_shows_preview_not_dropzone() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    assert!(!state.shows_dropzone());
    assert!(state.shows_viewport_image());
    assert!(!state.shows_placeholder());
    assert!(state.shows_actions());
}

// =============================================================
// Camera
// =============================================================

#[test]
fn choose_camera_requests_stream() {
    let mut state = DetectionState::default();
    assert_eq!(state.choose_camera(), vec![Command::StartCamera]);
    assert_eq!(state.mode, CaptureMode::Camera);
    assert!(state.shows_camera());
    assert!(state.camera_tab_active());
}

#[test]
fn choose_camera_twice_keeps_live_stream() {
    let mut state = live_camera();
    assert!(state.choose_camera().is_empty());
}

#[test]
fn camera_denied_shows_error_and_falls_back_to_upload() {
    let mut state = DetectionState::default();
    state.choose_camera();
    state.camera_failed();
    assert_eq!(state.mode, CaptureMode::Upload);
    assert!(!state.camera_live);
    assert_eq!(state.error_message(), Some(CAMERA_ERROR_MESSAGE));
}

#[test]
fn camera_granted_clears_error() {
    let mut state = DetectionState::default();
    state.choose_camera();
    state.camera_failed();
    state.choose_camera();
    assert!(state.camera_started().is_empty());
    assert!(state.camera_live);
    assert!(state.error.is_none());
}

#[test]
fn late_camera_grant_is_handed_back() {
    let mut state = DetectionState::default();
    state.choose_camera();
    state.choose_upload();
    assert_eq!(state.camera_started(), vec![Command::StopCamera]);
    assert!(!state.camera_live);
}

#[test]
fn choose_camera_while_request_pending_does_not_start_again() {
    let mut state = DetectionState::default();
    assert_eq!(state.choose_camera(), vec![Command::StartCamera]);
    assert!(state.camera_pending);
    assert!(state.choose_camera().is_empty());
    state.choose_upload();
    assert!(state.choose_camera().is_empty());
}

#[test]
fn reset_while_camera_pending_does_not_start_again() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    assert_eq!(state.choose_camera(), vec![Command::StartCamera]);
    assert_eq!(state.reset(), vec![Command::RevokeUrl("blob:a".to_owned())]);
}

#[test]
fn failure_after_grant_keeps_live_stream_owned() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    state.choose_camera();
    state.reset();
    assert!(state.camera_started().is_empty());

    assert!(state.camera_failed().is_empty());
    assert_eq!(state.mode, CaptureMode::Camera);
    assert!(state.camera_live);
    assert!(state.error.is_none());

    assert!(state.teardown().contains(&Command::StopCamera));
}

#[test]
fn duplicate_grant_while_live_is_handed_back() {
    let mut state = live_camera();
    assert_eq!(state.camera_started(), vec![Command::StopCamera]);
    assert!(state.camera_live);
}

#[test]
fn choose_upload_stops_live_camera() {
    let mut state = live_camera();
    assert_eq!(state.choose_upload(), vec![Command::StopCamera]);
    assert_eq!(state.mode, CaptureMode::Upload);
}

#[test]
fn capture_stops_camera_and_moves_to_preview() {
    let mut state = live_camera();
    let commands = state.capture(image("blob:frame"));
    assert_eq!(commands, vec![Command::StopCamera]);
    assert_eq!(state.mode, CaptureMode::Preview);
    assert!(!state.camera_live);
    assert_eq!(state.display_image().as_deref(), Some("blob:frame"));
    assert!(state.can_submit());
    assert!(state.camera_tab_active());
}

#[test]
fn capture_without_live_camera_is_ignored() {
    let mut state = DetectionState::default();
    state.choose_camera();
    let commands = state.capture(image("blob:frame"));
    assert_eq!(commands, vec![Command::RevokeUrl("blob:frame".to_owned())]);
    assert_eq!(state.mode, CaptureMode::Camera);
    assert!(state.selected.is_none());
}

#[test]
fn capture_payload_is_named_jpeg() {
    let payload = ImagePayload::capture(vec![0xff_u8, 0xd8]);
    assert_eq!(payload.file_name, "capture.jpg");
    assert_eq!(payload.content_type, "image/jpeg");
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_disabled_while_loading_and_after_result() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    assert!(state.can_submit());

    let ticket = state.begin_detect().expect("ticket");
    assert!(state.loading);
    assert!(!state.can_submit());
    assert!(state.begin_detect().is_none());
    assert_eq!(state.submit_label(), "Detecting...");

    assert!(state.finish_detect(ticket.seq, Ok(response("X"))));
    assert!(!state.can_submit());
    assert!(state.begin_detect().is_none());
    assert_eq!(state.submit_label(), "Detection Complete");
}

#[test]
fn begin_detect_without_image_is_none() {
    let mut state = DetectionState::default();
    assert!(state.begin_detect().is_none());
    assert!(!state.loading);
}

#[test]
fn ticket_carries_selected_payload() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    let ticket = state.begin_detect().expect("ticket");
    assert_eq!(ticket.payload.file_name, "photo.png");
    assert_eq!(&ticket.payload.bytes[..], &[1, 2, 3]);
}

#[test]
fn success_shows_one_tile_and_switches_image() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    assert_eq!(state.display_image().as_deref(), Some("blob:a"));

    let ticket = state.begin_detect().expect("ticket");
    state.finish_detect(ticket.seq, Ok(response("X")));

    let tiles = state.result_tiles();
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].label, "person");
    assert_eq!(tiles[0].percent, "93%");
    assert_eq!(tiles[0].bar_style, "width: 93%");
    assert_eq!(state.display_image().as_deref(), Some("X"));
    assert!(!state.loading);
}

#[test]
fn network_failure_keeps_preview_and_shows_message() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    let ticket = state.begin_detect().expect("ticket");

    state.finish_detect(ticket.seq, Err(PredictError::Network("connection refused".to_owned())));

    assert_eq!(state.error_message(), Some(DETECTION_ERROR_MESSAGE));
    assert!(!state.loading);
    assert!(state.result.is_none());
    assert!(state.detections().is_empty());
    assert_eq!(state.display_image().as_deref(), Some("blob:a"));
    assert!(state.shows_viewport_image());
    assert!(state.can_submit());
}

#[test]
fn stale_completion_after_reset_is_dropped() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    let ticket = state.begin_detect().expect("ticket");
    state.reset();

    assert!(!state.finish_detect(ticket.seq, Ok(response("X"))));
    assert!(state.result.is_none());
    assert!(!state.loading);
}

#[test]
fn begin_detect_clears_previous_error() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    let first = state.begin_detect().expect("ticket");
    state.finish_detect(first.seq, Err(PredictError::Unavailable));
    assert!(state.error.is_some());

    let second = state.begin_detect().expect("ticket");
    assert!(second.seq > first.seq);
    assert!(state.error.is_none());
}

// =============================================================
// Reset / teardown
// =============================================================

#[test]
fn reset_from_preview_reacquires_camera() {
    let mut state = live_camera();
    state.capture(image("blob:frame"));

    let commands = state.reset();

    assert_eq!(
        commands,
        vec![Command::RevokeUrl("blob:frame".to_owned()), Command::StartCamera]
    );
    assert_eq!(state.mode, CaptureMode::Camera);
    assert!(state.selected.is_none());
}

#[test]
fn reset_from_upload_does_not_touch_camera() {
    let mut state = DetectionState::default();
    state.select_file(image("blob:a"));
    let commands = state.reset();
    assert_eq!(commands, vec![Command::RevokeUrl("blob:a".to_owned())]);
    assert_eq!(state.mode, CaptureMode::Upload);
    assert!(state.shows_dropzone());
}

#[test]
fn reset_with_live_camera_keeps_stream() {
    let mut state = live_camera();
    assert!(state.reset().is_empty());
    assert_eq!(state.mode, CaptureMode::Camera);
    assert!(state.camera_live);
}

#[test]
fn teardown_releases_camera_and_preview() {
    let mut state = live_camera();
    state.capture(image("blob:frame"));
    state.choose_camera();
    state.camera_started();

    let commands = state.teardown();

    assert_eq!(
        commands,
        vec![Command::StopCamera, Command::RevokeUrl("blob:frame".to_owned())]
    );
    assert!(!state.camera_live);
}
