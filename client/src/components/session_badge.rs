//! Header badge showing who the dashboard thinks the visitor is.

#[cfg(test)]
#[path = "session_badge_test.rs"]
mod session_badge_test;

use leptos::prelude::*;

use crate::components::session_provider::use_session;
use crate::state::session::{Role, SessionState};

fn session_badge_label(state: &SessionState) -> &'static str {
    if state.loading {
        return "Checking session";
    }
    if !state.is_authenticated {
        return "Guest";
    }
    match state.role {
        Role::Admin => "Admin",
        Role::User => "User",
        Role::None => "Signed in",
    }
}

fn session_badge_class(state: &SessionState) -> &'static str {
    match (state.loading, state.is_authenticated) {
        (true, _) => "session-badge session-badge--pending",
        (false, false) => "session-badge session-badge--guest",
        (false, true) => "session-badge session-badge--member",
    }
}

#[component]
pub fn SessionBadge() -> impl IntoView {
    let session = use_session();
    let label = move || session_badge_label(&session.get());
    let class = move || session_badge_class(&session.get());

    view! { <span class=class>{label}</span> }
}
