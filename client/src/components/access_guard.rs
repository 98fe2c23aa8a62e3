//! Route guard rendering its children only for a matching role.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::session_provider::{use_session, use_session_config};
use crate::state::session::Role;
use crate::util::access::{AccessDecision, decide, install_access_redirect};

/// Gate `children` on the session holding exactly `required_role`.
///
/// Renders nothing while the session resolves, then either the children or a
/// redirect to `fallback` (defaulting to the configured forbidden route).
#[component]
pub fn AccessGuard(
    required_role: Role,
    #[prop(optional, into)] fallback: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let fallback = fallback.unwrap_or_else(|| use_session_config().forbidden_path);
    let navigate = use_navigate();

    install_access_redirect(session, required_role, fallback.clone(), navigate);

    let allowed = move || decide(&session.get(), required_role, &fallback) == AccessDecision::Allow;

    view! { <Show when=allowed>{children()}</Show> }
}
