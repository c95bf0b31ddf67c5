//! Fire-and-forget command dispatch.

use std::error::Error;
use std::fmt::Write;
use std::sync::Arc;

use tokio::task::JoinHandle;

use sonosbridge_domain::command::Command;

use crate::ports::Controller;

/// Sends commands to a [`Controller`] on background tasks.
///
/// Each dispatch is one unacknowledged request: the outcome is logged and
/// never reported back to the caller. Failures are not retried.
pub struct Dispatcher<C> {
    controller: Arc<C>,
}

impl<C> Clone for Dispatcher<C> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
        }
    }
}

impl<C: Controller + 'static> Dispatcher<C> {
    /// Create a dispatcher sending through `controller`.
    pub fn new(controller: C) -> Self {
        Self {
            controller: Arc::new(controller),
        }
    }

    /// Spawn a task delivering `command`.
    ///
    /// Must be called from within a tokio runtime. The returned handle may be
    /// dropped; the task keeps running.
    pub fn dispatch(&self, command: Command) -> JoinHandle<()> {
        let controller = Arc::clone(&self.controller);
        tokio::spawn(async move {
            let path = command.path();
            match controller.send(&command).await {
                Ok(()) => tracing::debug!(%command, %path, "command sent"),
                Err(err) => tracing::error!(
                    %command,
                    %path,
                    error = %error_chain(&err),
                    "failed to send command"
                ),
            }
        })
    }
}

/// Render an error and all of its sources as `outer: inner: root`.
fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = write!(out, ": {cause}");
        source = cause.source();
    }
    out
}
