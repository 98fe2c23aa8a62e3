//! Session gate configuration.
//!
//! DESIGN
//! ======
//! One value carries every knob the session layer reads: the storage key the
//! login flow writes to, the default redirect target for denied guards, and
//! how to treat a decoded record whose role is unknown. `SessionProvider`
//! places it in context so guards need no extra props for the common case.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage key the external login flow writes the session record under.
pub const DEFAULT_STORAGE_KEY: &str = "session";

/// Route denied guards redirect to unless the caller overrides it.
pub const DEFAULT_FORBIDDEN_PATH: &str = "/403";

/// How a decoded record with an unrecognized role is settled.
///
/// The role always normalizes to `Role::None`, so the session can never pass
/// a role-gated guard. The policy only decides the authentication flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnrecognizedRolePolicy {
    /// Record existed and decoded: authenticated, without a role.
    #[default]
    KeepAuthenticated,
    /// Treat the record like a missing one.
    TreatAsAnonymous,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub storage_key: String,
    pub forbidden_path: String,
    pub unrecognized_role: UnrecognizedRolePolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            forbidden_path: DEFAULT_FORBIDDEN_PATH.to_owned(),
            unrecognized_role: UnrecognizedRolePolicy::default(),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_forbidden_path(mut self, path: impl Into<String>) -> Self {
        self.forbidden_path = path.into();
        self
    }

    #[must_use]
    pub fn with_unrecognized_role(mut self, policy: UnrecognizedRolePolicy) -> Self {
        self.unrecognized_role = policy;
        self
    }
}
