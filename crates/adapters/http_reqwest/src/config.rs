//! Sonos controller configuration.

use serde::Deserialize;

/// Where the Sonos HTTP controller listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SonosConfig {
    /// Controller hostname or IP address.
    pub host: String,
    /// Controller TCP port.
    pub port: u16,
    /// Upper bound for a whole request, in seconds. No limit when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for SonosConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5005,
            timeout_secs: None,
        }
    }
}

impl SonosConfig {
    /// Base URL every command path is appended to.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
