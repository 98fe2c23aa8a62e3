//! Dashboard landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. It reads the session only to decide which navigation entries
//! to offer; access control for restricted views lives in `AccessGuard`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::session_badge::SessionBadge;
use crate::components::session_provider::use_session;
use crate::state::session::{Role, SessionState};

/// Whether the admin entry should be offered in the navigation.
fn show_admin_link(state: &SessionState) -> bool {
    state.has_role(Role::Admin)
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let admin_link = move || show_admin_link(&session.get());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Dashboard"</h1>
                <SessionBadge/>
            </header>
            <nav class="dashboard-nav">
                <a href="/">"Overview"</a>
                <Show when=admin_link>
                    <a href="/admin">"Admin"</a>
                </Show>
            </nav>
        </div>
    }
}
