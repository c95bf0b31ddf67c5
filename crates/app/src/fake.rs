//! Test doubles: an in-memory [`Controller`] and an error-event counter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use sonosbridge_domain::command::Command;
use sonosbridge_domain::error::BridgeError;

use crate::ports::Controller;

/// Records every path it is asked to send; optionally fails each call.
#[derive(Default)]
pub struct RecordingController {
    paths: Mutex<Vec<String>>,
    fail: bool,
}

impl RecordingController {
    pub fn failing() -> Self {
        Self {
            paths: Mutex::default(),
            fail: true,
        }
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Controller for RecordingController {
    async fn send(&self, command: &Command) -> Result<(), BridgeError> {
        self.paths.lock().unwrap().push(command.path());
        if self.fail {
            let err =
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
            return Err(BridgeError::Transport(Box::new(err)));
        }
        Ok(())
    }
}

/// Counts `ERROR` events emitted while installed.
#[derive(Clone, Default)]
pub struct ErrorCounter {
    count: Arc<AtomicUsize>,
}

impl ErrorCounter {
    /// Install the counter as the default subscriber for the current thread.
    ///
    /// Tasks spawned on a current-thread runtime are polled on this thread,
    /// so their events are counted too.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
