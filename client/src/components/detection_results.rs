//! Results box listing every detection of the last successful request.
//!
//! DESIGN
//! ======
//! Hidden until the state holds at least one detection. The first cell is
//! the "Total Objects" stat; each detection then gets one tile with its
//! class, a confidence bar and the rounded percentage.

use leptos::prelude::*;

use crate::components::bento_grid::{BentoGrid, BentoGridItem};
use crate::state::detection::DetectionState;

#[component]
pub fn DetectionResults(state: RwSignal<DetectionState>) -> impl IntoView {
    let count = move || state.with(|s| s.detections().len());
    let summary = move || state.with(|s| s.result.as_ref().map(detections::PredictResponse::summary_line));

    view! {
        <Show when=move || { count() > 0 }>
            <section class="results">
                <h3 class="results__title">"Detection Results"</h3>
                <p class="results__summary">{summary}</p>
                <BentoGrid class="results__grid">
                    <BentoGridItem wide=true>
                        <p class="results__stat-label">"Total Objects"</p>
                        <p class="results__stat-value">{count}</p>
                    </BentoGridItem>
                    {move || {
                        state
                            .with(DetectionState::result_tiles)
                            .into_iter()
                            .map(|tile| {
                                view! {
                                    <BentoGridItem title=tile.label.clone()>
                                        <p class="results__label">{tile.label}</p>
                                        <div class="results__bar">
                                            <div class="results__bar-fill" style=tile.bar_style></div>
                                        </div>
                                        <p class="results__percent">{tile.percent}</p>
                                    </BentoGridItem>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </BentoGrid>
            </section>
        </Show>
    }
}
