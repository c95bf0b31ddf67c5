//! socket.io adapter error types.

use sonosbridge_domain::error::BridgeError;

/// Errors specific to the socket.io adapter.
#[derive(Debug, thiserror::Error)]
pub enum SocketIoError {
    /// The initial connection to the messaging server failed.
    #[error("failed to connect to {url}")]
    Connect {
        /// URL that was dialled.
        url: String,
        #[source]
        source: rust_socketio::Error,
    },

    /// Closing the connection failed.
    #[error("failed to disconnect from messaging server")]
    Disconnect(#[source] rust_socketio::Error),
}

impl SocketIoError {
    /// Convert into a [`BridgeError::Transport`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> BridgeError {
        BridgeError::Transport(Box::new(self))
    }
}

impl From<SocketIoError> for BridgeError {
    fn from(err: SocketIoError) -> Self {
        err.into_domain()
    }
}
