//! # sonosbridged — sonosbridge daemon
//!
//! Composition root that wires the socket.io listener to the Sonos controller.
//!
//! ## Responsibilities
//! - Parse configuration (env vars, config file)
//! - Initialize logging
//! - Construct the HTTP controller (adapter) and the event router (app)
//! - Connect to the messaging server once
//! - Handle graceful shutdown (SIGTERM/SIGINT) by disconnecting
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use sonosbridge_adapter_http::HttpController;
use sonosbridge_adapter_socketio::SocketIoListener;
use sonosbridge_app::dispatcher::Dispatcher;
use sonosbridge_app::router::EventRouter;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Outbound
    let controller = HttpController::new(&config.sonos)?;
    tracing::info!(url = %config.sonos.base_url(), "sonos controller configured");

    // Dispatch table
    let router = EventRouter::new(
        config.socket_server.event_prefix.clone(),
        Dispatcher::new(controller),
    );

    // Inbound
    let connection = SocketIoListener::new(config.socket_server, router)
        .connect()
        .await?;
    tracing::info!(url = connection.url(), "listening for playback events");

    shutdown_signal().await;
    tracing::info!("shutdown signal received");

    connection.disconnect().await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
