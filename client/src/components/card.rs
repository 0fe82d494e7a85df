//! Translucent panel wrapper used by feature, highlight and control blocks.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use leptos::prelude::*;

/// Class list for a card with an optional extra class.
pub fn card_class(extra: Option<&str>) -> String {
    match extra.map(str::trim).filter(|c| !c.is_empty()) {
        Some(extra) => format!("card {extra}"),
        None => "card".to_owned(),
    }
}

#[component]
pub fn Card(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    view! { <div class=card_class(class.as_deref())>{children()}</div> }
}
