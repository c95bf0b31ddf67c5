//! Room — the Sonos zone a command is addressed to.

use std::fmt;

use crate::error::PayloadError;
use crate::escape::escape;

/// Name of a Sonos room (zone or group coordinator), e.g. `"Living Room"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Room(String);

impl Room {
    /// Build a room from its display name.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::MissingField`] if `name` is empty, and
    /// [`PayloadError::UnsafePathSegment`] if it is a dot segment or contains
    /// a `/`: `escape()` leaves both untouched, so they would be normalized
    /// away or split into extra path segments on the wire.
    pub fn new(name: impl Into<String>) -> Result<Self, PayloadError> {
        let name = name.into();
        if name.is_empty() {
            return Err(PayloadError::MissingField { field: "room" });
        }
        if matches!(name.as_str(), "." | "..") || name.contains('/') {
            return Err(PayloadError::UnsafePathSegment { field: "room" });
        }
        Ok(Self(name))
    }

    /// The raw room name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The room name as it appears in a controller path.
    #[must_use]
    pub fn path_segment(&self) -> String {
        escape(&self.0)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
