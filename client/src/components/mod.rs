//! Reusable session-aware UI components.

pub mod access_guard;
pub mod session_badge;
pub mod session_provider;
