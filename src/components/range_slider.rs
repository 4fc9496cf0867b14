//! Labelled range input with tick marks.

#[cfg(test)]
#[path = "range_slider_test.rs"]
mod range_slider_test;

use leptos::prelude::*;

/// Horizontal offset of a tick mark as a percentage of the track.
pub fn mark_offset(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

#[component]
pub fn RangeSlider(
    label: &'static str,
    #[prop(into)] value: Signal<f64>,
    min: f64,
    max: f64,
    step: f64,
    marks: &'static [(f64, &'static str)],
    on_input: Callback<f64>,
) -> impl IntoView {
    view! {
        <div class="range-slider">
            <span class="range-slider__label">{move || format!("{label}: {}", value.get())}</span>
            <input
                class="range-slider__input"
                type="range"
                min=min.to_string()
                max=max.to_string()
                step=step.to_string()
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(raw) = event_target_value(&ev).parse::<f64>() {
                        on_input.run(raw);
                    }
                }
            />
            <div class="range-slider__marks">
                {marks
                    .iter()
                    .map(|(at, text)| {
                        view! {
                            <span class="range-slider__mark" style=format!("left: {}%", mark_offset(*at, min, max))>
                                {*text}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
