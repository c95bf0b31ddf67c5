//! Controller port — delivers commands to the device controller.

use std::future::Future;

use sonosbridge_domain::command::Command;
use sonosbridge_domain::error::BridgeError;

/// Sends a [`Command`] to the device controller.
///
/// Implementations perform exactly one attempt. Retrying, if ever wanted,
/// belongs to the caller.
pub trait Controller: Send + Sync {
    /// Deliver `command`, resolving once the controller has answered.
    fn send(&self, command: &Command) -> impl Future<Output = Result<(), BridgeError>> + Send;
}

impl<T: Controller> Controller for std::sync::Arc<T> {
    fn send(&self, command: &Command) -> impl Future<Output = Result<(), BridgeError>> + Send {
        (**self).send(command)
    }
}
