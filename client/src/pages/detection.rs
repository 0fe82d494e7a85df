//! Detection studio: pick or capture an image, send it for inference and
//! show the annotated result.
//!
//! SYSTEM CONTEXT
//! ==============
//! All workflow decisions live in `state::detection`. This page owns the
//! browser handles (video element, scratch canvas, live `MediaStream`) and
//! carries out the [`Command`]s each transition returns.
//!
//! DESIGN
//! ======
//! The `<video>` element is always mounted and only hidden outside camera
//! mode, so a stream granted after the click always has somewhere to go.
//! Async completions go through `try_update`; once the page is gone the
//! signal is disposed and late results are released instead of applied.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::detection_results::DetectionResults;
use crate::state::detection::{CaptureMode, Command, DetectionState};
use crate::util::{endpoint, media};

/// Browser handles shared by every handler on the page.
#[derive(Clone, Copy)]
struct PageHandles {
    state: RwSignal<DetectionState>,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    endpoint: StoredValue<String>,
    video: NodeRef<leptos::html::Video>,
    canvas: NodeRef<leptos::html::Canvas>,
    #[cfg(feature = "hydrate")]
    stream: StoredValue<Option<web_sys::MediaStream>, leptos::reactive::owner::LocalStorage>,
}

impl PageHandles {
    fn transition(self, f: impl FnOnce(&mut DetectionState) -> Vec<Command>) {
        let commands = self.state.try_update(f).unwrap_or_default();
        self.run(commands);
    }

    fn run(self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::StartCamera => self.start_camera(),
                Command::StopCamera => self.stop_camera(),
                Command::RevokeUrl(url) => media::revoke_object_url(&url),
            }
        }
    }

    fn start_camera(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::camera;

            match camera::start().await {
                Ok(stream) => {
                    let handed_back = self.state.try_update(DetectionState::camera_started);
                    if !matches!(handed_back, Some(ref commands) if commands.is_empty()) {
                        camera::stop(&stream);
                        return;
                    }
                    self.release_stream();
                    if let Some(video) = self.video.get_untracked() {
                        camera::attach(&video, &stream);
                    }
                    self.stream.set_value(Some(stream));
                }
                Err(e) => {
                    log::warn!("camera unavailable: {e}");
                    if let Some(commands) = self.state.try_update(DetectionState::camera_failed) {
                        self.run(commands);
                    }
                }
            }
        });
    }

    fn stop_camera(self) {
        #[cfg(feature = "hydrate")]
        {
            self.release_stream();
            if let Some(video) = self.video.get_untracked() {
                crate::util::camera::detach(&video);
            }
        }
    }

    #[cfg(feature = "hydrate")]
    fn release_stream(self) {
        let mut previous = None;
        self.stream.update_value(|s| previous = s.take());
        if let Some(stream) = previous {
            crate::util::camera::stop(&stream);
        }
    }

    fn capture(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let (Some(video), Some(canvas)) = (self.video.get_untracked(), self.canvas.get_untracked()) else {
                return;
            };
            match crate::util::camera::capture_frame(&video, &canvas).await {
                Ok(image) => {
                    let url = image.preview_url.clone();
                    match self.state.try_update(|s| s.capture(image)) {
                        Some(commands) => self.run(commands),
                        None => media::revoke_object_url(&url),
                    }
                }
                Err(e) => log::error!("capture failed: {e}"),
            }
        });
    }

    fn detect(self) {
        let Some(ticket) = self.state.try_update(DetectionState::begin_detect).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let url = self.endpoint.get_value();
            let outcome = crate::net::predict::predict(&url, &ticket.payload).await;
            if self.state.try_update(|s| s.finish_detect(ticket.seq, outcome)) != Some(true) {
                log::debug!("dropped stale predict response #{}", ticket.seq);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ticket;
    }

    fn select(self, ev: &leptos::ev::Event) {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            input.set_value("");
            leptos::task::spawn_local(async move {
                match media::read_file(&file).await {
                    Ok(image) => {
                        let url = image.preview_url.clone();
                        match self.state.try_update(|s| s.select_file(image)) {
                            Some(commands) => self.run(commands),
                            None => media::revoke_object_url(&url),
                        }
                    }
                    Err(e) => log::error!("could not read {}: {e}", file.name()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    }
}

#[component]
pub fn DetectionPage() -> impl IntoView {
    let state = RwSignal::new(DetectionState::default());
    let page = PageHandles {
        state,
        endpoint: StoredValue::new(endpoint::predict_url()),
        video: NodeRef::new(),
        canvas: NodeRef::new(),
        #[cfg(feature = "hydrate")]
        stream: StoredValue::new_local(None),
    };

    on_cleanup(move || page.transition(DetectionState::teardown));

    let upload_active = move || state.with(|s| s.mode == CaptureMode::Upload);
    let camera_active = move || state.with(DetectionState::camera_tab_active);
    let error = move || state.with(DetectionState::error_message);

    view! {
        <div class="studio">
            <header class="studio__header">
                <h1 class="studio__title">"Object Detection Studio"</h1>
                <p class="studio__lead">"Upload an image or use your camera to detect objects in real-time."</p>
            </header>

            <div class="studio__layout">
                <Card class="controls">
                    <h3 class="controls__title">"Input Source"</h3>
                    <div class="tabs">
                        <button
                            class="tabs__button"
                            class:tabs__button--active=upload_active
                            on:click=move |_| page.transition(DetectionState::choose_upload)
                        >
                            "Upload"
                        </button>
                        <button
                            class="tabs__button"
                            class:tabs__button--active=camera_active
                            on:click=move |_| page.transition(DetectionState::choose_camera)
                        >
                            "Camera"
                        </button>
                    </div>

                    <Show when=move || state.with(DetectionState::shows_dropzone)>
                        <label class="dropzone">
                            <p class="dropzone__hint">
                                <span class="dropzone__strong">"Click to upload"</span>
                            </p>
                            <p class="dropzone__limits">"JPG, PNG (MAX. 10MB)"</p>
                            <input
                                class="dropzone__input"
                                type="file"
                                accept="image/*"
                                on:change=move |ev| page.select(&ev)
                            />
                        </label>
                    </Show>

                    <Show when=move || state.with(DetectionState::shows_camera)>
                        <button
                            class="controls__capture"
                            disabled=move || !state.with(|s| s.camera_live)
                            on:click=move |_| page.capture()
                        >
                            "Capture Photo"
                        </button>
                    </Show>

                    <Show when=move || state.with(DetectionState::shows_actions)>
                        <div class="actions">
                            <button
                                class="actions__submit"
                                class:actions__submit--busy=move || state.with(|s| s.loading)
                                disabled=move || !state.with(DetectionState::can_submit)
                                on:click=move |_| page.detect()
                            >
                                {move || state.with(DetectionState::submit_label)}
                            </button>
                            <button class="actions__reset" on:click=move |_| page.transition(DetectionState::reset)>
                                "Reset / New Image"
                            </button>
                        </div>
                    </Show>
                </Card>

                <div class="viewport">
                    <Show when=move || error().is_some()>
                        <div class="viewport__error" role="alert">
                            {move || error().unwrap_or_default()}
                        </div>
                    </Show>

                    <div class="viewport__camera" class:viewport__camera--hidden=move || !state.with(DetectionState::shows_camera)>
                        <video class="viewport__video" node_ref=page.video autoplay playsinline muted></video>
                        <canvas class="viewport__canvas" node_ref=page.canvas></canvas>
                    </div>

                    <Show when=move || state.with(DetectionState::shows_viewport_image)>
                        <div class="viewport__frame">
                            <img
                                class="viewport__image"
                                src=move || state.with(DetectionState::display_image).unwrap_or_default()
                                alt="Preview"
                            />
                            <Show when=move || state.with(|s| s.loading)>
                                <div class="viewport__overlay">
                                    <span class="viewport__spinner"></span>
                                    <p>"Analyzing Image..."</p>
                                </div>
                            </Show>
                        </div>
                    </Show>

                    <Show when=move || state.with(DetectionState::shows_placeholder)>
                        <div class="viewport__placeholder">
                            <p>"No image selected"</p>
                        </div>
                    </Show>
                </div>
            </div>

            <DetectionResults state=state/>
        </div>
    }
}
