//! Graph mutation events
//!
//! Fired synchronously after a vertex or edge has been added and before the
//! adding call returns. Consumers either register an observer callback or
//! subscribe to a channel.

use super::types::{EdgeId, GraphId, VertexId};
use std::fmt;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphEvent {
    VertexAdded { graph: GraphId, vertex: VertexId },
    EdgeAdded { graph: GraphId, edge: EdgeId },
}

/// Callback invoked for every event, in registration order
pub type Observer = Box<dyn FnMut(&GraphEvent) + Send>;

/// Observer list plus channel subscribers of one graph
#[derive(Default)]
pub(crate) struct EventBus {
    observers: Vec<Observer>,
    subscribers: Vec<UnboundedSender<GraphEvent>>,
}

impl EventBus {
    pub(crate) fn add_observer(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub(crate) fn subscribe(&mut self) -> UnboundedReceiver<GraphEvent> {
        let (tx, rx) = unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver an event to every observer, then every live subscriber.
    /// Subscribers whose receiver was dropped are forgotten.
    pub(crate) fn publish(&mut self, event: GraphEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("observers", &self.observers.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
