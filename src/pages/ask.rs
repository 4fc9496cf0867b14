//! Query page: question form plus the answer or error for the last attempt.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `documents_available` from the session to gate the documents toggle
//! and to force `use_documents` off on the wire before any upload succeeded.

use leptos::prelude::*;

use crate::components::alert::{Severity, StatusAlert};
use crate::components::range_slider::RangeSlider;
use crate::components::result_view::ResultView;
use crate::state::query::{
    MAX_TOKENS_MAX, MAX_TOKENS_MIN, MAX_TOKENS_STEP, QueryOutcome, QueryState, TEMPERATURE_MAX, TEMPERATURE_MIN,
    TEMPERATURE_STEP,
};
use crate::state::session::SessionState;

const TEMPERATURE_MARKS: &[(f64, &str)] = &[(0.1, "Focused"), (0.7, "Balanced"), (1.0, "Creative")];
const MAX_TOKENS_MARKS: &[(f64, &str)] = &[(128.0, "Short"), (512.0, "Medium"), (1024.0, "Long")];

const NO_DOCUMENTS_NOTICE: &str =
    "No documents uploaded yet. Upload documents first or enable web search to get started.";

#[component]
pub fn AskPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = RwSignal::new(QueryState::default());

    let documents_available = move || session.with(|s| s.documents_available);
    let loading = move || query.with(QueryState::in_flight);
    // Memoized so typing in the form does not rebuild the result panel.
    let outcome = Memo::new(move |_| query.with(|q| q.outcome.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let available = session.with_untracked(|s| s.documents_available);
        let mut request = None;
        query.update(|q| request = q.begin(available));
        let Some(request) = request else {
            return;
        };
        leptos::logging::log!(
            "submitting query: use_documents={} use_web_search={}",
            request.use_documents,
            request.use_web_search
        );

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_query(&request).await;
            query.update(|q| q.finish(result));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
        }
    };

    let on_temperature = Callback::new(move |raw: f64| query.update(|q| q.form.set_temperature(raw)));
    let on_max_tokens = Callback::new(move |raw: f64| query.update(|q| q.form.set_max_tokens(raw)));

    view! {
        <section class="ask-page">
            <h2 class="page-title">"Ask Questions"</h2>

            <Show when=move || !documents_available()>
                <StatusAlert severity=Severity::Info message=NO_DOCUMENTS_NOTICE/>
            </Show>

            <form class="ask-form" on:submit=on_submit>
                <textarea
                    class="ask-form__question"
                    rows="3"
                    placeholder="Enter your question here..."
                    prop:value=move || query.with(|q| q.form.text.clone())
                    on:input=move |ev| query.update(|q| q.form.text = event_target_value(&ev))
                ></textarea>

                <fieldset class="ask-form__group">
                    <legend class="section-title">"Search Options"</legend>
                    <label class="ask-form__toggle" class:ask-form__toggle--disabled=move || !documents_available()>
                        <input
                            type="checkbox"
                            prop:checked=move || query.with(|q| q.form.use_documents)
                            disabled=move || !documents_available()
                            on:change=move |ev| query.update(|q| q.form.use_documents = event_target_checked(&ev))
                        />
                        "Search uploaded documents"
                    </label>
                    <label class="ask-form__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || query.with(|q| q.form.use_web_search)
                            on:change=move |ev| query.update(|q| q.form.use_web_search = event_target_checked(&ev))
                        />
                        "Search the web"
                    </label>
                </fieldset>

                <fieldset class="ask-form__group">
                    <legend class="section-title">"Response Settings"</legend>
                    <RangeSlider
                        label="Temperature"
                        value=Signal::derive(move || query.with(|q| q.form.temperature))
                        min=TEMPERATURE_MIN
                        max=TEMPERATURE_MAX
                        step=TEMPERATURE_STEP
                        marks=TEMPERATURE_MARKS
                        on_input=on_temperature
                    />
                    <RangeSlider
                        label="Max Tokens"
                        value=Signal::derive(move || f64::from(query.with(|q| q.form.max_tokens)))
                        min=f64::from(MAX_TOKENS_MIN)
                        max=f64::from(MAX_TOKENS_MAX)
                        step=f64::from(MAX_TOKENS_STEP)
                        marks=MAX_TOKENS_MARKS
                        on_input=on_max_tokens
                    />
                </fieldset>

                <button class="btn btn--primary btn--block" type="submit" disabled=move || !query.with(QueryState::can_submit)>
                    <Show when=loading>
                        <span class="spinner" aria-hidden="true"></span>
                    </Show>
                    {move || if loading() { "Processing..." } else { "Ask Question" }}
                </button>
            </form>

            {move || match outcome.get() {
                QueryOutcome::Failed(message) => view! { <StatusAlert severity=Severity::Error message=message/> }.into_any(),
                QueryOutcome::Answered(result) => view! { <ResultView result=result/> }.into_any(),
                QueryOutcome::Idle | QueryOutcome::Loading => ().into_any(),
            }}
        </section>
    }
}
