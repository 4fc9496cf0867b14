//! Shell tab strip. Each tab is a route link.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::Tab;

#[component]
pub fn TabBar() -> impl IntoView {
    let location = use_location();
    let active = move || Tab::from_path(&location.pathname.get());

    view! {
        <nav class="tab-bar" role="tablist">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <a
                            href=tab.path()
                            role="tab"
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || active() == tab
                            aria-selected=move || (active() == tab).to_string()
                        >
                            {tab.label()}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
