//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `sonosbridge.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;
use sonosbridge_adapter_http::SonosConfig;
use sonosbridge_adapter_socketio::SocketServerConfig;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Messaging server the events come from.
    pub socket_server: SocketServerConfig,
    /// Sonos HTTP controller the commands go to.
    pub sonos: SonosConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "sonosbridged=info,sonosbridge=info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `sonosbridge.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("sonosbridge.toml")?;
        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("SONOSBRIDGE_SOCKET_HOST") {
            self.socket_server.host = val;
        }
        if let Some(val) = var("SONOSBRIDGE_EVENT_PREFIX") {
            self.socket_server.event_prefix = val;
        }
        if let Some(val) = var("SONOSBRIDGE_SONOS_HOST") {
            self.sonos.host = val;
        }
        if let Some(port) = var("SONOSBRIDGE_SONOS_PORT").and_then(|val| val.parse().ok()) {
            self.sonos.port = port;
        }
        if let Some(secs) = var("SONOSBRIDGE_SONOS_TIMEOUT_SECS").and_then(|val| val.parse().ok()) {
            self.sonos.timeout_secs = Some(secs);
        }
        if let Some(val) = var("SONOSBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.socket_server.host.is_empty() {
            return Err(ConfigError::Validation(
                "socket_server.host must not be empty".to_string(),
            ));
        }
        if self.sonos.host.is_empty() {
            return Err(ConfigError::Validation(
                "sonos.host must not be empty".to_string(),
            ));
        }
        if self.sonos.port == 0 {
            return Err(ConfigError::Validation(
                "sonos.port must be non-zero".to_string(),
            ));
        }
        if self.sonos.timeout_secs == Some(0) {
            return Err(ConfigError::Validation(
                "sonos.timeout_secs must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
