//! Event router — the dispatch table from wire event names to commands.

use serde_json::Value;
use tokio::task::JoinHandle;

use sonosbridge_domain::command::Command;
use sonosbridge_domain::error::PayloadError;
use sonosbridge_domain::event::EventKind;

use crate::dispatcher::Dispatcher;
use crate::ports::Controller;

/// What happened to an inbound event.
#[derive(Debug)]
pub enum Routed {
    /// A command was handed to the dispatcher.
    Dispatched(JoinHandle<()>),
    /// The event name is not one the bridge handles.
    Ignored,
    /// The event is known but its payload could not be turned into a command.
    Rejected(PayloadError),
}

/// Maps wire event names to controller commands.
///
/// Each event is handled on its own; the router keeps no state between
/// events.
pub struct EventRouter<C> {
    prefix: String,
    dispatcher: Dispatcher<C>,
}

impl<C> Clone for EventRouter<C> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<C: Controller + 'static> EventRouter<C> {
    /// Create a router recognizing event names under `prefix`.
    pub fn new(prefix: impl Into<String>, dispatcher: Dispatcher<C>) -> Self {
        Self {
            prefix: prefix.into(),
            dispatcher,
        }
    }

    /// Prefix expected in front of every handled event name.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Wire names of every event this router handles.
    #[must_use]
    pub fn event_names(&self) -> Vec<String> {
        EventKind::ALL
            .iter()
            .map(|kind| kind.wire_name(&self.prefix))
            .collect()
    }

    /// Handle one inbound event.
    ///
    /// Must be called from within a tokio runtime.
    pub fn route(&self, name: &str, payload: &Value) -> Routed {
        let Some(kind) = EventKind::from_wire(name, &self.prefix) else {
            tracing::debug!(event = name, "ignoring unhandled event");
            return Routed::Ignored;
        };

        tracing::debug!(event = name, %payload, "event received");

        match Command::from_event(kind, payload) {
            Ok(command) => {
                tracing::info!(%kind, room = command.room().as_str(), "dispatching command");
                Routed::Dispatched(self.dispatcher.dispatch(command))
            }
            Err(err) => {
                tracing::warn!(event = name, error = %err, "rejecting event payload");
                Routed::Rejected(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;
    use sonosbridge_domain::event::DEFAULT_EVENT_PREFIX;

    use crate::fake::RecordingController;

    fn router(controller: &Arc<RecordingController>) -> EventRouter<Arc<RecordingController>> {
        EventRouter::new(
            DEFAULT_EVENT_PREFIX,
            Dispatcher::new(Arc::clone(controller)),
        )
    }

    async fn settle(routed: Routed) {
        match routed {
            Routed::Dispatched(handle) => handle.await.unwrap(),
            other => panic!("expected a dispatch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_dispatch_play_album() {
        let controller = Arc::new(RecordingController::default());
        let routed = router(&controller).route(
            "sonos:play",
            &json!({"room": "Kitchen", "id": "37i9dQZF1DXcBWIGoYBM5M"}),
        );
        settle(routed).await;

        assert_eq!(
            controller.paths(),
            vec!["/Kitchen/spotify/now/spotify:album:37i9dQZF1DXcBWIGoYBM5M"]
        );
    }

    #[tokio::test]
    async fn should_dispatch_pause() {
        let controller = Arc::new(RecordingController::default());
        settle(router(&controller).route("sonos:pause", &json!({"room": "Living Room"}))).await;

        assert_eq!(controller.paths(), vec!["/Living%20Room/pause"]);
    }

    #[tokio::test]
    async fn should_dispatch_unpause_as_play() {
        let controller = Arc::new(RecordingController::default());
        settle(router(&controller).route("sonos:unpause", &json!({"room": "Office"}))).await;

        assert_eq!(controller.paths(), vec!["/Office/play"]);
    }

    #[tokio::test]
    async fn should_ignore_unknown_events() {
        let controller = Arc::new(RecordingController::default());
        let router = router(&controller);

        for name in ["sonos:stop", "play", "connect", "sonos:"] {
            let routed = router.route(name, &json!({"room": "Kitchen", "id": "x"}));
            assert!(matches!(routed, Routed::Ignored), "{name} should be ignored");
        }
        tokio::task::yield_now().await;

        assert!(controller.paths().is_empty());
    }

    #[tokio::test]
    async fn should_reject_payload_without_room() {
        let controller = Arc::new(RecordingController::default());
        let routed = router(&controller).route("sonos:pause", &json!({}));

        assert!(matches!(
            routed,
            Routed::Rejected(PayloadError::MissingField { field: "room" })
        ));
        tokio::task::yield_now().await;
        assert!(controller.paths().is_empty());
    }

    #[tokio::test]
    async fn should_reject_rooms_and_ids_that_reshape_the_path() {
        let controller = Arc::new(RecordingController::default());
        let router = router(&controller);

        let routed = router.route("sonos:pause", &json!({"room": ".."}));
        assert!(matches!(
            routed,
            Routed::Rejected(PayloadError::UnsafePathSegment { field: "room" })
        ));

        let routed = router.route("sonos:play", &json!({"room": "Kitchen", "id": "x/../../y"}));
        assert!(matches!(
            routed,
            Routed::Rejected(PayloadError::UnsafePathSegment { field: "id" })
        ));

        tokio::task::yield_now().await;
        assert!(controller.paths().is_empty());
    }

    #[tokio::test]
    async fn should_reject_play_without_id() {
        let controller = Arc::new(RecordingController::default());
        let routed = router(&controller).route("sonos:play", &json!({"room": "Kitchen"}));

        assert!(matches!(
            routed,
            Routed::Rejected(PayloadError::MissingField { field: "id" })
        ));
    }

    #[tokio::test]
    async fn should_survive_failing_controller() {
        let controller = Arc::new(RecordingController::failing());
        settle(router(&controller).route("sonos:pause", &json!({"room": "Kitchen"}))).await;

        assert_eq!(controller.paths(), vec!["/Kitchen/pause"]);
    }

    #[test]
    fn should_list_prefixed_event_names() {
        let controller = Arc::new(RecordingController::default());
        let router = router(&controller);
        assert_eq!(router.prefix(), "sonos:");
        assert_eq!(
            router.event_names(),
            vec!["sonos:play", "sonos:pause", "sonos:unpause"]
        );
    }

    #[tokio::test]
    async fn should_handle_bare_names_with_empty_prefix() {
        let controller = Arc::new(RecordingController::default());
        let router = EventRouter::new("", Dispatcher::new(Arc::clone(&controller)));
        settle(router.route("pause", &json!({"room": "Kitchen"}))).await;

        assert_eq!(controller.paths(), vec!["/Kitchen/pause"]);
    }
}
