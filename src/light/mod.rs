// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light identity and discovery events.
//!
//! This module provides [`LightId`], the stable per-light key shared by
//! the alias registry and the state cache, the [`LightEvent`] discovery
//! feed, and the [`EventBus`] that re-broadcasts events to subscribers.
//!
//! # Examples
//!
//! ```
//! use lifxr_lib::light::{EventBus, LightEvent, LightId};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! let id = LightId::new("d073d5123456");
//! bus.publish(LightEvent::online(id));
//! ```

mod event;
mod event_bus;
mod id;

pub use event::LightEvent;
pub use event_bus::EventBus;
pub use id::LightId;
