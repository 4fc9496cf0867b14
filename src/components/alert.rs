//! Inline status banner.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "alert alert--info",
            Self::Success => "alert alert--success",
            Self::Error => "alert alert--error",
        }
    }

    fn role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Info | Self::Success => "status",
        }
    }
}

#[component]
pub fn StatusAlert(severity: Severity, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class=severity.class() role=severity.role()>
            {message}
        </div>
    }
}
