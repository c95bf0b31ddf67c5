//! # sonosbridge-adapter-socketio
//!
//! socket.io adapter — the event listener side of the bridge.
//!
//! ## Responsibilities
//! - Connect once to the messaging server (auto-reconnect handled by the transport)
//! - Hand every custom event to the [`EventRouter`]
//! - Log connection lifecycle notifications (`open`, `close`, `error`)
//! - Disconnect on shutdown
//!
//! ## Dependency rule
//! Same as other adapters: depends on `sonosbridge-app` and `sonosbridge-domain`.

mod config;
mod error;

pub use config::SocketServerConfig;
pub use error::SocketIoError;

use futures_util::FutureExt;
use rust_socketio::asynchronous::{Client, ClientBuilder};
use rust_socketio::{Event, Payload};
use serde_json::Value;

use sonosbridge_app::ports::Controller;
use sonosbridge_app::router::{EventRouter, Routed};

/// Listens for playback events on a socket.io server.
pub struct SocketIoListener<C> {
    config: SocketServerConfig,
    router: EventRouter<C>,
}

/// A live connection, returned by [`SocketIoListener::connect`].
pub struct SocketIoConnection {
    client: Client,
    url: String,
}

impl<C: Controller + 'static> SocketIoListener<C> {
    /// Create a listener routing events through `router`.
    pub fn new(config: SocketServerConfig, router: EventRouter<C>) -> Self {
        Self { config, router }
    }

    /// Open the connection and register the event handlers.
    ///
    /// Must be called from within a tokio runtime; events are routed on it.
    ///
    /// # Errors
    ///
    /// Returns [`SocketIoError::Connect`] if the first connection attempt
    /// fails. Later disconnects are retried by the transport.
    pub async fn connect(self) -> Result<SocketIoConnection, SocketIoError> {
        let url = self.config.url();
        tracing::info!(
            %url,
            prefix = self.router.prefix(),
            events = ?self.router.event_names(),
            "connecting to messaging server"
        );

        let router = self.router;
        let client = ClientBuilder::new(url.clone())
            .reconnect(true)
            .reconnect_on_disconnect(true)
            .on(Event::Connect, |_payload: Payload, _client: Client| {
                async {
                    tracing::info!("connected to messaging server");
                }
                .boxed()
            })
            .on(Event::Close, |_payload: Payload, _client: Client| {
                async {
                    tracing::info!("messaging server connection closed");
                }
                .boxed()
            })
            .on(Event::Error, |payload: Payload, _client: Client| {
                let reason = first_argument(&payload).map(ToString::to_string);
                async move {
                    tracing::warn!(
                        reason = reason.as_deref().unwrap_or("unknown"),
                        "messaging transport error"
                    );
                }
                .boxed()
            })
            .on_any(move |event: Event, payload: Payload, _client: Client| {
                route_event(&router, &event, &payload);
                async {}.boxed()
            })
            .connect()
            .await
            .map_err(|source| SocketIoError::Connect {
                url: url.clone(),
                source,
            })?;

        Ok(SocketIoConnection { client, url })
    }
}

impl SocketIoConnection {
    /// URL of the messaging server.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Close the connection.
    ///
    /// # Errors
    ///
    /// Returns [`SocketIoError::Disconnect`] if the transport fails to close.
    pub async fn disconnect(self) -> Result<(), SocketIoError> {
        self.client
            .disconnect()
            .await
            .map_err(SocketIoError::Disconnect)?;
        tracing::info!(url = %self.url, "disconnected from messaging server");
        Ok(())
    }
}

/// Route one socket.io event.
///
/// Only custom events carry commands; the payload is the first argument.
/// Returns `None` for transport-level events.
pub fn route_event<C: Controller + 'static>(
    router: &EventRouter<C>,
    event: &Event,
    payload: &Payload,
) -> Option<Routed> {
    let Event::Custom(name) = event else {
        return None;
    };
    let data = first_argument(payload).unwrap_or(&Value::Null);
    Some(router.route(name, data))
}

fn first_argument(payload: &Payload) -> Option<&Value> {
    match payload {
        Payload::Text(values) => values.first(),
        _ => None,
    }
}
