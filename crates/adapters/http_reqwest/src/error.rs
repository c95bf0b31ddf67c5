//! HTTP adapter error types.

use sonosbridge_domain::error::BridgeError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Connecting, sending or reading the response failed.
    #[error("request to controller failed")]
    Request(#[source] reqwest::Error),
}

impl HttpError {
    /// Convert into a [`BridgeError::Transport`] for propagation across port
    /// boundaries.
    #[must_use]
    pub fn into_domain(self) -> BridgeError {
        BridgeError::Transport(Box::new(self))
    }
}

impl From<HttpError> for BridgeError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn request_error() -> reqwest::Error {
        reqwest::Client::new()
            .get("not a url")
            .send()
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn should_display_request_error() {
        let err = HttpError::Request(request_error().await);
        assert_eq!(err.to_string(), "request to controller failed");
    }

    #[tokio::test]
    async fn should_convert_into_transport_error() {
        let err: BridgeError = HttpError::Request(request_error().await).into();
        assert!(matches!(err, BridgeError::Transport(_)));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("request to controller failed"));
    }
}
