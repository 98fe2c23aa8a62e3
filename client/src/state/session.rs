//! Session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Published by `SessionProvider` and read by route guards and role-aware
//! components. The state starts in `loading` and is settled exactly once from
//! the persisted session record.
//!
//! TRUST BOUNDARY
//! ==============
//! The role carried here comes from client-writable storage. It decides what
//! the UI shows, never what the server allows.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Closed set of roles the dashboard knows how to gate on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    User,
    /// No role: anonymous, or a stored role the dashboard does not recognize.
    #[default]
    None,
}

impl Role {
    /// Map a stored role claim onto the closed role set.
    ///
    /// Matching is exact; anything other than `"admin"` or `"user"` becomes
    /// [`Role::None`].
    #[must_use]
    pub fn from_claim(claim: &str) -> Self {
        match claim {
            "admin" => Self::Admin,
            "user" => Self::User,
            _ => Self::None,
        }
    }

    /// Wire name of the role as written by the login flow.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::None => "none",
        }
    }
}

/// Resolved (or still resolving) session for the running tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub loading: bool,
    pub is_authenticated: bool,
    pub role: Role,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::initial()
    }
}

impl SessionState {
    /// State published before resolution has run.
    #[must_use]
    pub const fn initial() -> Self {
        Self { loading: true, is_authenticated: false, role: Role::None }
    }

    /// Settled state for a visitor without a usable session record.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { loading: false, is_authenticated: false, role: Role::None }
    }

    /// Settled state for a decoded session record.
    #[must_use]
    pub const fn authenticated(role: Role) -> Self {
        Self { loading: false, is_authenticated: true, role }
    }

    /// Replace a loading state with its resolved value.
    ///
    /// Returns `false` and leaves `self` untouched if the state was already
    /// settled: `loading` only ever goes from `true` to `false`. The result is
    /// normalized so an unauthenticated state never carries a role.
    pub fn settle(&mut self, resolved: SessionState) -> bool {
        if !self.loading {
            return false;
        }
        let role = if resolved.is_authenticated { resolved.role } else { Role::None };
        *self = Self { loading: false, is_authenticated: resolved.is_authenticated, role };
        true
    }

    /// True when the visitor holds exactly `role` on a settled session.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        !self.loading && self.is_authenticated && self.role == role
    }
}
