//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`BridgeError`]
//! when crossing a port boundary.

/// Top-level error for everything the bridge can fail at.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// An inbound event payload could not be turned into a command.
    #[error("invalid event payload")]
    Payload(#[from] PayloadError),

    /// A transport (socket.io, HTTP) failed.
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Details about why an event payload was rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PayloadError {
    /// The payload is not a JSON object.
    #[error("payload must be a JSON object")]
    NotAnObject,

    /// A required field is absent, empty or not a string.
    #[error("missing or invalid field `{field}`")]
    MissingField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// A field would change the shape of the controller path (`..`, `/`, …).
    #[error("field `{field}` cannot be used in a controller path")]
    UnsafePathSegment {
        /// Name of the offending field.
        field: &'static str,
    },
}
