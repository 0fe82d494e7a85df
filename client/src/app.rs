//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{about::AboutPage, detection::DetectionPage, home::HomePage};
use crate::state::ui::UiState;
use crate::util::endpoint::PREDICT_URL_META;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `predict_url` is published in a meta tag that the browser reads back
/// through `util::endpoint`.
pub fn shell(options: LeptosOptions, predict_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=PREDICT_URL_META content=predict_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/objectdetect.css"/>
        <Title text="ObjectDetect"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("detection") view=DetectionPage/>
                </Routes>
            </main>
        </Router>
    }
}
