//! # sonosbridge-adapter-http
//!
//! HTTP adapter — delivers commands to a Sonos HTTP API controller.
//!
//! ## How it works
//!
//! Every [`Command`] becomes one plain `GET http://{host}:{port}{path}`.
//! The response body is drained and discarded; only transport failures are
//! reported. A non-success status is logged but still counts as delivered.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `sonosbridge-app` and `sonosbridge-domain`.

mod config;
mod error;

pub use config::SonosConfig;
pub use error::HttpError;

use std::time::Duration;

use reqwest::StatusCode;

use sonosbridge_app::ports::Controller;
use sonosbridge_domain::command::Command;
use sonosbridge_domain::error::BridgeError;

/// [`Controller`] talking to the Sonos HTTP API over plain HTTP.
#[derive(Debug, Clone)]
pub struct HttpController {
    client: reqwest::Client,
    base_url: String,
}

impl HttpController {
    /// Build a controller client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Client`] if the underlying client cannot be built.
    pub fn new(config: &SonosConfig) -> Result<Self, HttpError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(HttpError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    /// Full URL `command` is sent to.
    #[must_use]
    pub fn url_for(&self, command: &Command) -> String {
        format!("{}{}", self.base_url, command.path())
    }

    async fn get(&self, url: &str) -> Result<StatusCode, HttpError> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(HttpError::Request)?;
        let status = response.status();
        while response
            .chunk()
            .await
            .map_err(HttpError::Request)?
            .is_some()
        {}
        Ok(status)
    }
}

impl Controller for HttpController {
    async fn send(&self, command: &Command) -> Result<(), BridgeError> {
        let url = self.url_for(command);
        let status = self.get(&url).await?;
        if status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "controller accepted command");
        } else {
            tracing::warn!(
                %url,
                status = status.as_u16(),
                "controller answered with an error status"
            );
        }
        Ok(())
    }
}
