//! Role-gated access decisions for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected region applies the same rule: wait while the session is
//! resolving, then allow an exact role match and redirect everything else.
//! The rule is a pure function so it can be checked without a renderer.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{Role, SessionState};

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session still resolving: render nothing, do not navigate.
    Pending,
    /// Navigate to the contained location.
    Redirect(String),
    /// Render the protected content.
    Allow,
}

/// Decide access to a region requiring exactly `required`.
///
/// There is no role hierarchy: `Admin` does not satisfy a `User` guard.
#[must_use]
pub fn decide(state: &SessionState, required: Role, fallback: &str) -> AccessDecision {
    if state.loading {
        return AccessDecision::Pending;
    }
    if state.is_authenticated && state.role == required {
        AccessDecision::Allow
    } else {
        AccessDecision::Redirect(fallback.to_owned())
    }
}

/// Navigate to the fallback if `state` fails the guard.
///
/// Returns `true` when a navigation was issued. Pending and allowed states
/// never navigate.
pub fn redirect_on_denial<F>(state: &SessionState, required: Role, fallback: &str, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    let AccessDecision::Redirect(path) = decide(state, required, fallback) else {
        return false;
    };
    log::debug!("guard: {} required, redirecting to {path}", required.as_str());
    navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
    true
}

/// Navigate to the fallback whenever the settled session fails the guard.
pub fn install_access_redirect<F>(session: ReadSignal<SessionState>, required: Role, fallback: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        redirect_on_denial(&session.get(), required, &fallback, &navigate);
    });
}
