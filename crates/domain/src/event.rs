//! Event — a named message received over the real-time channel.
//!
//! The bridge recognizes three event kinds. On the wire each name may carry
//! a namespace prefix (`sonos:play`, `sonos:pause`, …); anything else is
//! ignored by the router.

use std::fmt;

use serde_json::Value;

use crate::error::PayloadError;

/// Prefix playback events are published under by default.
pub const DEFAULT_EVENT_PREFIX: &str = "sonos:";

/// The kinds of events the bridge acts upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Start playing an album in a room.
    Play,
    /// Pause playback in a room.
    Pause,
    /// Resume playback in a room.
    Unpause,
}

impl EventKind {
    /// All recognized kinds.
    pub const ALL: [Self; 3] = [Self::Play, Self::Pause, Self::Unpause];

    /// Bare event name, without any prefix.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Unpause => "unpause",
        }
    }

    /// Resolve a wire event name carrying `prefix`.
    ///
    /// Returns `None` for names without the prefix or with an unknown suffix.
    #[must_use]
    pub fn from_wire(name: &str, prefix: &str) -> Option<Self> {
        match name.strip_prefix(prefix)? {
            "play" => Some(Self::Play),
            "pause" => Some(Self::Pause),
            "unpause" => Some(Self::Unpause),
            _ => None,
        }
    }

    /// Wire event name for this kind under `prefix`.
    #[must_use]
    pub fn wire_name(self, prefix: &str) -> String {
        format!("{prefix}{}", self.as_str())
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload record attached to an event.
///
/// Only `room` and `id` are meaningful; other fields are ignored.
#[derive(Debug, Clone, Copy)]
pub struct EventPayload<'a> {
    fields: &'a serde_json::Map<String, Value>,
}

impl<'a> EventPayload<'a> {
    /// Wrap a raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::NotAnObject`] if `value` is not a JSON object.
    pub fn from_value(value: &'a Value) -> Result<Self, PayloadError> {
        value
            .as_object()
            .map(|fields| Self { fields })
            .ok_or(PayloadError::NotAnObject)
    }

    /// The required `room` field.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::MissingField`] if absent, empty or not a string.
    pub fn room(&self) -> Result<&'a str, PayloadError> {
        self.required("room")
    }

    /// The `id` field, required by play events.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::MissingField`] if absent, empty or not a string.
    pub fn id(&self) -> Result<&'a str, PayloadError> {
        self.required("id")
    }

    fn required(&self, field: &'static str) -> Result<&'a str, PayloadError> {
        self.fields
            .get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .ok_or(PayloadError::MissingField { field })
    }
}
