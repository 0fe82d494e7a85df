//! Dark theme enforcement.
//!
//! The site only ships a dark palette. On hydrate the `<html>` element gets
//! `data-theme="dark"` plus the `dark` class, and the `theme` key in
//! `localStorage` is pinned to `dark` so a stale `light` value left by an
//! earlier visit is overwritten. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR paths no-op so the
//! server render stays deterministic. The SSR shell already renders the dark
//! attributes, so there is no flash before hydration.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "theme";
pub const THEME: &str = "dark";

/// Read the stored theme value, if any.
pub fn stored_theme() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether the stored value needs rewriting.
pub fn needs_reset(stored: Option<&str>) -> bool {
    stored != Some(THEME)
}

/// Apply the dark attributes on the `<html>` element.
pub fn apply() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", THEME);
            let _ = el.class_list().add_1(THEME);
        }
    }
}

/// Force the dark theme and persist it. Returns `true` when storage was rewritten.
pub fn force_dark() -> bool {
    apply();
    let rewrite = needs_reset(stored_theme().as_deref());
    #[cfg(feature = "hydrate")]
    {
        if rewrite {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(STORAGE_KEY, THEME);
            }
        }
    }
    rewrite
}
