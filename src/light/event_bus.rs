// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan-out of the discovery feed to observers.

use tokio::sync::broadcast;

use super::LightEvent;

// A full LAN sweep emits a handful of events per light; 256 buffers
// several sweeps for a receiver that polls between commands.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Re-broadcasts [`LightEvent`]s to any number of observers.
///
/// The session consumes the discovery feed itself (to register aliases
/// and warm the cache) and hands every event to this bus, so an embedding
/// application can also watch lights appear and drop without wiring into
/// the transport. Each subscriber sees every event published after it
/// subscribed, in order.
///
/// A subscriber that falls more than the channel capacity behind loses
/// its oldest pending events and observes `RecvError::Lagged` on the next
/// receive. Discovery events are advisory (the registry and cache are the
/// source of truth), so a lagging observer can simply resynchronize from
/// the session.
///
/// # Examples
///
/// ```
/// use lifxr_lib::light::{EventBus, LightEvent, LightId};
///
/// let bus = EventBus::new();
/// let mut rx = bus.subscribe();
///
/// bus.publish(LightEvent::online(LightId::new("d073d5123456")));
/// ```
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<LightEvent>,
}

impl EventBus {
    /// Creates an event bus with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates an event bus buffering up to `capacity` events per
    /// subscriber.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribes to events published from this point on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LightEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publishes an event to all current subscribers.
    ///
    /// With no subscribers the event is discarded; publication never
    /// blocks the discovery handler.
    pub fn publish(&self, event: LightEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}
