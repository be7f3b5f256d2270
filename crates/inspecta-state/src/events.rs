//! Snapshot events published by the projection layer.
//!
//! Built on tokio broadcast channels. Every event carries a complete,
//! owned snapshot of the state it describes. A subscriber that falls
//! behind silently skips the events it missed; it should resync from
//! the accessors on [`crate::CatalogState`].

use std::pin::Pin;

use futures::Stream;
use inspecta_core::models::Group;
use tokio::sync::broadcast;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use crate::service::{ChildFormState, GroupState};

const CHANNEL_CAPACITY: usize = 64;

/// A state change, with the full new value.
#[derive(Debug, Clone)]
pub enum StateEvent {
    GroupsChanged(Vec<Group>),
    StatusChanged(GroupState),
    ChildFormChanged(ChildFormState),
}

/// Stream of state events.
pub type EventStream = Pin<Box<dyn Stream<Item = StateEvent> + Send>>;

pub(crate) struct EventBus {
    tx: broadcast::Sender<StateEvent>,
}

impl EventBus {
    pub(crate) fn new() -> Self {
        Self {
            tx: broadcast::channel(CHANNEL_CAPACITY).0,
        }
    }

    pub(crate) fn publish(&self, event: StateEvent) {
        // No receivers is fine.
        let _ = self.tx.send(event);
    }

    pub(crate) fn subscribe(&self) -> EventStream {
        let stream = BroadcastStream::new(self.tx.subscribe()).filter_map(|result| result.ok());
        Box::pin(stream)
    }
}
