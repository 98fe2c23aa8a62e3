//! Session context provider and accessors.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` sits above the router and owns the only writable handle
//! to the tab's [`SessionState`]. Descendants receive a `ReadSignal`, so the
//! provider's settle step is the single write path.
//!
//! DESIGN
//! ======
//! The first render always publishes the loading state. Resolution runs as a
//! local task after that render and settles the signal in one update, so
//! readers observe either the loading state or the final state. SSR never
//! resolves: storage lives in the browser, and guards render as pending on
//! the server.

#[cfg(test)]
#[path = "session_provider_test.rs"]
mod session_provider_test;

use leptos::prelude::*;

use crate::config::SessionConfig;
use crate::state::session::SessionState;
use crate::util::session_store::ResolveOnce;
use crate::util::storage::KeyValueStore;

/// Publish a fresh loading session and `config` into the current owner.
///
/// Returns the writable handle; only the caller should hold it.
pub fn provide_session(config: SessionConfig) -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::initial());
    provide_context(session.read_only());
    provide_context(config);
    session
}

/// Apply a resolved state to the provider's signal.
pub fn settle_session(session: RwSignal<SessionState>, resolved: SessionState) {
    session.update(|state| {
        if !state.settle(resolved) {
            log::debug!("session: already settled, ignoring late resolution");
        }
    });
}

/// Read-only handle to the current session.
///
/// Must be called under a [`SessionProvider`].
pub fn use_session() -> ReadSignal<SessionState> {
    expect_context::<ReadSignal<SessionState>>()
}

/// Session configuration in scope, or the defaults outside a provider.
pub fn use_session_config() -> SessionConfig {
    use_context::<SessionConfig>().unwrap_or_default()
}

/// Resolve through `once` and settle `session` with the result.
///
/// Returns `false` when `once` has already run; storage is not read again
/// and the published state is left as is.
pub fn resolve_session<S: KeyValueStore>(session: RwSignal<SessionState>, once: &ResolveOnce<S>) -> bool {
    match once.run() {
        Some(resolved) => {
            settle_session(session, resolved);
            true
        }
        None => false,
    }
}

/// Owns session state for its subtree and resolves it once after mount.
#[component]
pub fn SessionProvider(#[prop(optional)] config: Option<SessionConfig>, children: Children) -> impl IntoView {
    let config = config.unwrap_or_default();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::session_store::SessionStore;
        use crate::util::storage::BrowserStorage;

        let session = provide_session(config.clone());
        let once = ResolveOnce::new(SessionStore::new(BrowserStorage, config));
        leptos::task::spawn_local(async move {
            resolve_session(session, &once);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("session: resolution deferred to the browser (key {:?})", config.storage_key);
        provide_session(config);
    }

    children()
}
