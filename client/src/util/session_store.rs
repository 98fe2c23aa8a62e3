//! Session resolution: storage record to typed [`SessionState`].
//!
//! ERROR HANDLING
//! ==============
//! Resolution never fails outward. A missing record, an unreachable storage
//! backend and a record that does not decode all settle to the anonymous
//! state, so a guard can only grant access on a cleanly decoded role. The
//! reason is logged, not returned.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::Cell;

use crate::config::{SessionConfig, UnrecognizedRolePolicy};
use crate::state::session::{Role, SessionState};
use crate::util::session_record::{RecordError, RoleClaim, SessionRecord, decode_record};
use crate::util::storage::{KeyValueStore, StorageError};

/// Why a lookup did not produce a record.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Reads and normalizes the persisted session record.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    config: SessionConfig,
}

impl<S: KeyValueStore> SessionStore<S> {
    #[must_use]
    pub fn new(storage: S, config: SessionConfig) -> Self {
        Self { storage, config }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Fetch and decode the record, `Ok(None)` when no record is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when storage cannot be read or the stored
    /// value does not decode.
    pub fn load_record(&self) -> Result<Option<SessionRecord>, ResolveError> {
        let Some(raw) = self.storage.get(&self.config.storage_key)? else {
            return Ok(None);
        };
        Ok(Some(decode_record(&raw)?))
    }

    /// Resolve the settled session state from storage.
    ///
    /// Reads storage once, with no retries and no writes.
    #[must_use]
    pub fn resolve(&self) -> SessionState {
        let key = self.config.storage_key.as_str();
        match self.load_record() {
            Ok(Some(record)) => self.settle_record(&record),
            Ok(None) => {
                log::debug!("session: no record under {key:?}");
                SessionState::anonymous()
            }
            Err(ResolveError::Storage(err)) => {
                log::warn!("session: {err}; treating visitor as anonymous");
                SessionState::anonymous()
            }
            Err(ResolveError::Record(err)) => {
                log::warn!("session: record under {key:?} rejected: {err}");
                SessionState::anonymous()
            }
        }
    }

    fn settle_record(&self, record: &SessionRecord) -> SessionState {
        let unrecognized = match record.role_claim() {
            RoleClaim::Known(role) => {
                log::debug!("session: resolved role {}", role.as_str());
                return SessionState::authenticated(role);
            }
            RoleClaim::Unrecognized(raw) => format!("unrecognized role {raw:?}"),
            RoleClaim::Missing => "no role".to_owned(),
        };
        match self.config.unrecognized_role {
            UnrecognizedRolePolicy::KeepAuthenticated => {
                log::warn!("session: record has {unrecognized}; authenticated without role");
                SessionState::authenticated(Role::None)
            }
            UnrecognizedRolePolicy::TreatAsAnonymous => {
                log::warn!("session: record has {unrecognized}; treating visitor as anonymous");
                SessionState::anonymous()
            }
        }
    }
}

/// Run-once wrapper: the first [`ResolveOnce::run`] resolves, later calls
/// return `None` without touching storage.
///
/// One guard belongs to one provider mount: `SessionProvider` builds it and
/// moves it into its resolution task, so every resolution in that mount goes
/// through the same guard.
#[derive(Debug)]
pub struct ResolveOnce<S> {
    store: SessionStore<S>,
    started: Cell<bool>,
}

impl<S: KeyValueStore> ResolveOnce<S> {
    #[must_use]
    pub fn new(store: SessionStore<S>) -> Self {
        Self { store, started: Cell::new(false) }
    }

    pub fn run(&self) -> Option<SessionState> {
        if self.started.replace(true) {
            log::debug!("session: resolution already ran, skipping");
            return None;
        }
        Some(self.store.resolve())
    }

    #[must_use]
    pub fn has_run(&self) -> bool {
        self.started.get()
    }
}
