//! Schema decoder for the persisted session record.
//!
//! The login flow stores a JSON object such as `{"role":"admin"}`. Decoding
//! is strict about shape (top-level object, `role` a string when present) and
//! lenient about content (extra fields ignored, role value checked later).

#[cfg(test)]
#[path = "session_record_test.rs"]
mod session_record_test;

use serde::Deserialize;
use serde_json::error::Category;

use crate::state::session::Role;

/// Decoded session record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub role: Option<String>,
}

/// Role claim carried by a decoded record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleClaim {
    Known(Role),
    Unrecognized(String),
    Missing,
}

impl SessionRecord {
    #[must_use]
    pub fn role_claim(&self) -> RoleClaim {
        match self.role.as_deref() {
            None => RoleClaim::Missing,
            Some(raw) => match Role::from_claim(raw) {
                Role::None => RoleClaim::Unrecognized(raw.to_owned()),
                role => RoleClaim::Known(role),
            },
        }
    }
}

/// Error returned by [`decode_record`].
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The raw value is not JSON at all.
    #[error("session record is not valid JSON: {0}")]
    Syntax(serde_json::Error),
    /// Valid JSON, but not a top-level object.
    #[error("session record is not a JSON object")]
    NotAnObject,
    /// An object whose fields have the wrong types.
    #[error("session record has unexpected shape: {0}")]
    Schema(serde_json::Error),
}

impl From<serde_json::Error> for RecordError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Schema(err),
            Category::Syntax | Category::Eof | Category::Io => Self::Syntax(err),
        }
    }
}

/// Decode a raw storage value into a [`SessionRecord`].
///
/// # Errors
///
/// Returns [`RecordError`] when `raw` is not a JSON object with an optional
/// string `role`.
pub fn decode_record(raw: &str) -> Result<SessionRecord, RecordError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(RecordError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}
