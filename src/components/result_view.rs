//! Answer panel for a completed query.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure presentation over a `QueryResponse`: the page swaps the whole
//! component out when a new answer arrives, so nothing here is mutable except
//! the sources expander.

#[cfg(test)]
#[path = "result_view_test.rs"]
mod result_view_test;

use leptos::prelude::*;

use crate::components::confidence_meter::ConfidenceMeter;
use crate::components::source_list::SourceList;
use crate::net::types::{Method, QueryResponse, Source, SourceOrigin};

/// Accent colour applied to badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Neutral,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "chip chip--primary",
            Self::Secondary => "chip chip--secondary",
            Self::Neutral => "chip",
        }
    }
}

/// Confidence colour band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceTier {
    Positive,
    Cautionary,
    Negative,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 0.7 {
            Self::Positive
        } else if confidence >= 0.4 {
            Self::Cautionary
        } else {
            Self::Negative
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Positive => "confidence-meter__bar--positive",
            Self::Cautionary => "confidence-meter__bar--cautionary",
            Self::Negative => "confidence-meter__bar--negative",
        }
    }
}

/// `"web_search"` -> `"WEB SEARCH"`.
pub fn method_label(method: &Method) -> String {
    method.as_str().replace('_', " ").to_uppercase()
}

/// Glyph shown ahead of the method label; unknown methods get the model icon.
pub fn method_icon(method: &Method) -> &'static str {
    match method {
        Method::Document => "\u{1F4C4}",
        Method::WebSearch => "\u{1F50D}",
        Method::Other(_) => "\u{1F9E0}",
    }
}

pub fn method_accent(method: &Method) -> Accent {
    match method {
        Method::Document => Accent::Primary,
        Method::WebSearch => Accent::Secondary,
        Method::Other(_) => Accent::Neutral,
    }
}

/// A `[0, 1]` score as a rounded whole percentage.
#[allow(clippy::cast_possible_truncation)]
pub fn percent(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Bar fill width, clamped to the track.
pub fn bar_width(confidence: f64) -> f64 {
    (confidence * 100.0).clamp(0.0, 100.0)
}

/// One rendered source entry.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceRow {
    pub label: String,
    pub accent: Accent,
    pub score: String,
    pub text: String,
}

impl From<&Source> for SourceRow {
    fn from(source: &Source) -> Self {
        let accent = match source.origin() {
            SourceOrigin::Document => Accent::Primary,
            SourceOrigin::Web => Accent::Secondary,
        };
        Self {
            label: source.source.clone(),
            accent,
            score: format!("Score: {}%", percent(source.score)),
            text: source.text.clone(),
        }
    }
}

/// Rows in the order received, or `None` when there is nothing to cite.
pub fn source_rows(sources: &[Source]) -> Option<Vec<SourceRow>> {
    if sources.is_empty() {
        return None;
    }
    Some(sources.iter().map(SourceRow::from).collect())
}

/// Everything the panel shows, derived once from the response.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSummary {
    pub answer: String,
    pub method_label: String,
    pub method_icon: &'static str,
    pub method_accent: Accent,
    pub confidence_percent: i64,
    pub confidence_tier: ConfidenceTier,
    pub bar_width: f64,
    pub sources: Option<Vec<SourceRow>>,
}

impl From<&QueryResponse> for ResultSummary {
    fn from(resp: &QueryResponse) -> Self {
        Self {
            answer: resp.answer.clone(),
            method_label: method_label(&resp.method),
            method_icon: method_icon(&resp.method),
            method_accent: method_accent(&resp.method),
            confidence_percent: percent(resp.confidence),
            confidence_tier: ConfidenceTier::from_confidence(resp.confidence),
            bar_width: bar_width(resp.confidence),
            sources: source_rows(&resp.sources),
        }
    }
}

/// Response panel: method badge, confidence meter, answer text, sources.
#[component]
pub fn ResultView(result: QueryResponse) -> impl IntoView {
    let summary = ResultSummary::from(&result);

    view! {
        <section class="result-view">
            <div class="result-view__panel">
                <div class="result-view__header">
                    <h3 class="result-view__title">"Response"</h3>
                    <div class="result-view__meta">
                        <span class=summary.method_accent.class()>
                            <span class="chip__icon" aria-hidden="true">{summary.method_icon}</span>
                            {summary.method_label}
                        </span>
                        <ConfidenceMeter
                            percent=summary.confidence_percent
                            tier=summary.confidence_tier
                            width=summary.bar_width
                        />
                    </div>
                </div>
                <p class="result-view__answer">{summary.answer}</p>
            </div>
            {summary.sources.map(|rows| view! { <SourceList rows=rows/> })}
        </section>
    }
}
