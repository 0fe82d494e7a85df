//! Grid layout wrapper and its cells.

use leptos::prelude::*;

#[component]
pub fn BentoGrid(#[prop(optional, into)] class: Option<String>, children: Children) -> impl IntoView {
    let class = class.map_or_else(|| "bento-grid".to_owned(), |c| format!("bento-grid {c}"));
    view! { <div class=class>{children()}</div> }
}

/// One grid cell; `wide` spans two columns.
#[component]
pub fn BentoGridItem(
    #[prop(optional)] wide: bool,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bento-grid__item" class:bento-grid__item--wide=wide title=title>
            {children()}
        </div>
    }
}
