#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use detections::InferenceStatus;

/// UI chrome state shared by the navbar and pages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Mobile navigation menu is expanded.
    pub nav_open: bool,
    /// Last inference health probe result, `None` until it answers.
    pub inference: Option<InferenceStatus>,
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_open = !self.nav_open;
    }

    pub fn close_nav(&mut self) {
        self.nav_open = false;
    }

    /// Short label for the inference status pill.
    pub fn inference_label(&self) -> &'static str {
        match &self.inference {
            None => "Checking model...",
            Some(status) if status.reachable && status.model_loaded => "Model online",
            Some(status) if status.reachable => "Model not loaded",
            Some(_) => "Model offline",
        }
    }

    pub fn inference_online(&self) -> bool {
        self.inference.as_ref().is_some_and(|s| s.reachable && s.model_loaded)
    }
}
