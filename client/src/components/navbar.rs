//! Site navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Shows the brand link, the three page links
//! with the current route highlighted, a GitHub link, an inference status
//! pill and a collapsible menu for narrow screens. On mount it pins the dark
//! theme and asks the host for the inference endpoint's health once.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::UiState;

pub const BRAND: &str = "ObjectDetect";
pub const GITHUB_URL: &str = "https://github.com/Code-r4Life/";

/// One entry of the static navigation list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { name: "Home", path: "/" },
    NavLink { name: "About", path: "/about" },
    NavLink { name: "Detection", path: "/detection" },
];

/// Exact route match, tolerant of a trailing slash.
pub fn is_active(pathname: &str, path: &str) -> bool {
    let normalize = |p: &str| {
        let trimmed = p.trim_end_matches('/');
        if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
    };
    normalize(pathname) == normalize(path)
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    Effect::new(move || {
        crate::util::dark_mode::force_dark();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let status = crate::net::api::fetch_inference_status().await;
            if status.is_none() {
                log::warn!("inference health probe unavailable");
            }
            ui.update(|u| u.inference = status);
        });
    });

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|link| {
                let path = link.path;
                let active = move || is_active(&pathname.get(), path);
                view! {
                    <a
                        href=path
                        class="navbar__link"
                        class:navbar__link--mobile=mobile
                        class:navbar__link--active=active
                        on:click=move |_| ui.update(UiState::close_nav)
                    >
                        {link.name}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__bar">
                <a href="/" class="navbar__brand">
                    {BRAND}
                </a>
                <div class="navbar__links">
                    {links(false)}
                    <span class="navbar__divider"></span>
                    <a href=GITHUB_URL class="navbar__github" target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                    <span
                        class="navbar__status"
                        class:navbar__status--online=move || ui.with(UiState::inference_online)
                    >
                        {move || ui.with(UiState::inference_label)}
                    </span>
                </div>
                <button
                    class="navbar__toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| ui.update(UiState::toggle_nav)
                >
                    {move || if ui.with(|u| u.nav_open) { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || ui.with(|u| u.nav_open)>
                <div class="navbar__mobile">
                    {links(true)}
                    <a href=GITHUB_URL class="navbar__link navbar__link--mobile" target="_blank" rel="noopener noreferrer">
                        "GitHub"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
