//! Confidence percentage with a tier-coloured progress bar.

use leptos::prelude::*;

use crate::components::result_view::ConfidenceTier;

#[component]
pub fn ConfidenceMeter(percent: i64, tier: ConfidenceTier, width: f64) -> impl IntoView {
    view! {
        <div class="confidence-meter">
            <span class="confidence-meter__label">{format!("Confidence: {percent}%")}</span>
            <div class="confidence-meter__track">
                <div
                    class=format!("confidence-meter__bar {}", tier.class())
                    style=format!("width: {width}%")
                ></div>
            </div>
        </div>
    }
}
