//! socket.io listener configuration.

use serde::Deserialize;
use sonosbridge_domain::event::DEFAULT_EVENT_PREFIX;

/// Configuration for the socket.io event listener.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SocketServerConfig {
    /// Messaging server host, optionally with a port (`relay.example.com:8443`).
    ///
    /// `https://` is assumed unless the value already carries a scheme.
    pub host: String,
    /// Prefix in front of every handled event name (`sonos:` → `sonos:play`).
    pub event_prefix: String,
}

impl Default for SocketServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            event_prefix: DEFAULT_EVENT_PREFIX.to_string(),
        }
    }
}

impl SocketServerConfig {
    /// URL the client connects to.
    #[must_use]
    pub fn url(&self) -> String {
        if self.host.starts_with("https://") || self.host.starts_with("http://") {
            self.host.clone()
        } else {
            format!("https://{}", self.host)
        }
    }
}
