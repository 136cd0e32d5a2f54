//! Event system for sequencer progress
//!
//! Provides:
//! - Event types for the stages of a tool-zeroing run
//! - Event dispatcher for publishing events to subscribers
//!
//! The sequencer publishes as it goes; the UI drains its subscription
//! into the status log once control returns from a run.

use crate::gcode::Axis;
use tokio::sync::broadcast;

/// Sequencer event types
#[derive(Debug, Clone)]
pub enum SequencerEvent {
    /// A run started
    Started,
    /// The controller was switched to MDI mode
    ModeChanged,
    /// One MDI line was issued and confirmed
    MdiIssued(String),
    /// Probing on one axis finished
    AxisProbed(Axis),
    /// The run finished
    Completed,
    /// The run halted on an error
    Failed(String),
}

impl std::fmt::Display for SequencerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequencerEvent::Started => write!(f, "Tool zero started"),
            SequencerEvent::ModeChanged => write!(f, "Controller in MDI mode"),
            SequencerEvent::MdiIssued(line) => write!(f, "> {}", line),
            SequencerEvent::AxisProbed(axis) => write!(f, "{} axis probed", axis),
            SequencerEvent::Completed => write!(f, "Tool zero complete"),
            SequencerEvent::Failed(msg) => write!(f, "Halted: {}", msg),
        }
    }
}

/// Event dispatcher for publishing events to subscribers
#[derive(Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for sequencer events.
    tx: broadcast::Sender<SequencerEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 100)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Create a new event dispatcher with default buffer size
    pub fn default_with_buffer() -> Self {
        Self::new(100)
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<SequencerEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers
    ///
    /// Delivery is best-effort; a run proceeds identically with no
    /// subscribers attached.
    pub fn publish(&self, event: SequencerEvent) {
        let _ = self.tx.send(event);
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::default_with_buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_and_drain() {
        let dispatcher = EventDispatcher::default_with_buffer();
        let mut rx = dispatcher.subscribe();
        assert_eq!(dispatcher.subscriber_count(), 1);

        dispatcher.publish(SequencerEvent::Started);
        dispatcher.publish(SequencerEvent::MdiIssued("G20".to_string()));

        assert!(matches!(rx.try_recv().unwrap(), SequencerEvent::Started));
        match rx.try_recv().unwrap() {
            SequencerEvent::MdiIssued(line) => assert_eq!(line, "G20"),
            other => panic!("unexpected event: {}", other),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let dispatcher = EventDispatcher::new(8);
        dispatcher.publish(SequencerEvent::Completed);
    }
}
