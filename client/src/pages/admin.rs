//! Admin-only page, rendered behind an `Admin` guard.

use leptos::prelude::*;

use crate::components::access_guard::AccessGuard;
use crate::components::session_badge::SessionBadge;
use crate::state::session::Role;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AccessGuard required_role=Role::Admin>
            <div class="admin-page">
                <header class="dashboard-header">
                    <h1>"Administration"</h1>
                    <SessionBadge/>
                </header>
                <a href="/">"Back to dashboard"</a>
            </div>
        </AccessGuard>
    }
}
