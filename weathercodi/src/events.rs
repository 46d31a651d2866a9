//! Store change notifications
//!
//! Both stores publish on one broadcast channel so a UI layer can refresh
//! whatever it renders from them.

use crate::models::User;
use serde::Serialize;
use tokio::sync::broadcast;

/// Buffered events per subscriber before the slowest one starts lagging
const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StoreEvent {
    /// Login, registration, preference update or logout (`None`)
    SessionChanged(Option<User>),
    /// Wardrobe list was reloaded or mutated
    WardrobeChanged,
    /// Outfit history was reloaded or appended
    HistoryChanged,
}

/// Cloneable publishing side of the channel
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// Publish an event. Having no subscribers is not an error.
    pub fn publish(&self, event: StoreEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("Store event dropped: no subscribers");
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
