// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Track lifecycle events.
//!
//! The recording flow, the library list, and the playback screen stay in
//! sync through an explicit event bus: whoever mutates the library emits an
//! event, interested views subscribe. The bus is an owned value passed by
//! reference, not process-global state.

use tokio::sync::broadcast;
use tracing::debug;

use crate::track::TrackId;

/// Default channel capacity; slow subscribers past this lag and skip
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A change to the track library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackEvent {
    /// A new track was added to the library
    Created(TrackId),
    /// A track's metadata or chords changed
    Updated(TrackId),
    /// A track was removed
    Deleted(TrackId),
}

impl TrackEvent {
    /// The track this event refers to
    pub fn track_id(&self) -> TrackId {
        match self {
            TrackEvent::Created(id) | TrackEvent::Updated(id) | TrackEvent::Deleted(id) => *id,
        }
    }
}

/// Broadcast channel for [`TrackEvent`]s
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<TrackEvent>,
}

impl EventBus {
    /// Create a bus with the default capacity
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to future events
    pub fn subscribe(&self) -> broadcast::Receiver<TrackEvent> {
        self.sender.subscribe()
    }

    /// Publish an event to all current subscribers.
    ///
    /// Having no subscribers is normal (e.g. no screen is open); the event is
    /// simply dropped.
    pub fn publish(&self, event: TrackEvent) {
        debug!(?event, "publishing track event");
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
