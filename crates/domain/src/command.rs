//! Command — a single call on the Sonos HTTP controller.
//!
//! | Event | Path |
//! |-------|------|
//! | `play` | `/{room}/spotify/now/spotify:album:{id}` |
//! | `pause` | `/{room}/pause` |
//! | `unpause` | `/{room}/play` |
//!
//! `{room}` is legacy-escaped (see [`crate::escape`]); `{id}` is inserted
//! verbatim.

use std::fmt;

use serde_json::Value;

use crate::error::PayloadError;
use crate::event::{EventKind, EventPayload};
use crate::room::Room;

/// Opaque Spotify album identifier (the part after `spotify:album:`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlbumId(String);

impl AlbumId {
    /// Wrap a raw album identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::MissingField`] if `id` is empty, and
    /// [`PayloadError::UnsafePathSegment`] if it contains `/`, `?` or `#`.
    /// The id is inserted verbatim, so any of those would move it out of
    /// its path segment.
    pub fn new(id: impl Into<String>) -> Result<Self, PayloadError> {
        let id = id.into();
        if id.is_empty() {
            return Err(PayloadError::MissingField { field: "id" });
        }
        if id.contains(['/', '?', '#']) {
            return Err(PayloadError::UnsafePathSegment { field: "id" });
        }
        Ok(Self(id))
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A command addressed to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the queue of `room` with `album` and start playing.
    Play { room: Room, album: AlbumId },
    /// Pause playback in `room`.
    Pause { room: Room },
    /// Resume playback in `room`.
    Unpause { room: Room },
}

impl Command {
    /// Build the command an event of `kind` asks for.
    ///
    /// # Errors
    ///
    /// Returns a [`PayloadError`] if the payload is not an object or lacks a
    /// field the event kind requires.
    pub fn from_event(kind: EventKind, payload: &Value) -> Result<Self, PayloadError> {
        let payload = EventPayload::from_value(payload)?;
        let room = Room::new(payload.room()?)?;
        Ok(match kind {
            EventKind::Play => Self::Play {
                room,
                album: AlbumId::new(payload.id()?)?,
            },
            EventKind::Pause => Self::Pause { room },
            EventKind::Unpause => Self::Unpause { room },
        })
    }

    /// Room this command targets.
    #[must_use]
    pub fn room(&self) -> &Room {
        match self {
            Self::Play { room, .. } | Self::Pause { room } | Self::Unpause { room } => room,
        }
    }

    /// Controller path, starting with `/`.
    #[must_use]
    pub fn path(&self) -> String {
        let room = self.room().path_segment();
        match self {
            Self::Play { album, .. } => {
                format!("/{room}/spotify/now/spotify:album:{}", album.as_str())
            }
            Self::Pause { .. } => format!("/{room}/pause"),
            Self::Unpause { .. } => format!("/{room}/play"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Play { room, album } => write!(f, "play {} in {room}", album.as_str()),
            Self::Pause { room } => write!(f, "pause {room}"),
            Self::Unpause { room } => write!(f, "unpause {room}"),
        }
    }
}
