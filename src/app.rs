//! Root application component with tab routing and the shared session context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::tab_bar::TabBar;
use crate::pages::{ask::AskPage, upload::UploadPage};
use crate::state::session::SessionState;

/// Root application component.
///
/// Provides the session context and routes one page per tab. Switching tabs
/// unmounts the other page, discarding its local state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    view! {
        <Title text="Document Q&A"/>

        <Router>
            <main class="shell">
                <h1 class="shell__title">"Document Q&A & Web Search"</h1>
                <TabBar/>
                <div class="shell__panel">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=UploadPage/>
                        <Route path=StaticSegment("ask") view=AskPage/>
                    </Routes>
                </div>
            </main>
        </Router>
    }
}
