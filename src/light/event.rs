// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Discovery event types.

use std::net::IpAddr;

use super::LightId;

/// Events emitted by the LAN discovery feed.
///
/// The transport collaborator discovers lights by UDP broadcast and
/// reports their lifecycle here. A session consumes these events to keep
/// its alias registry and state cache warm; it also re-publishes them on
/// its event bus for observers.
///
/// # Examples
///
/// ```
/// use lifxr_lib::light::{LightEvent, LightId};
///
/// let event = LightEvent::discovered(
///     LightId::new("d073d5123456"),
///     "Kitchen",
///     "192.168.1.40".parse().unwrap(),
/// );
/// assert!(event.light_id().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightEvent {
    /// A light was seen for the first time, with its label and address.
    Discovered {
        /// The light's stable identifier.
        id: LightId,
        /// The user-assigned label reported by the light.
        label: String,
        /// The light's current network address.
        addr: IpAddr,
    },

    /// A previously known light came back online.
    Online {
        /// The light's stable identifier.
        id: LightId,
    },

    /// A known light stopped answering.
    Offline {
        /// The light's stable identifier.
        id: LightId,
    },

    /// The initial discovery sweep finished.
    DiscoveryCompleted,
}

impl LightEvent {
    /// Creates a discovered event.
    #[must_use]
    pub fn discovered(id: LightId, label: impl Into<String>, addr: IpAddr) -> Self {
        Self::Discovered {
            id,
            label: label.into(),
            addr,
        }
    }

    /// Creates an online event.
    #[must_use]
    pub fn online(id: LightId) -> Self {
        Self::Online { id }
    }

    /// Creates an offline event.
    #[must_use]
    pub fn offline(id: LightId) -> Self {
        Self::Offline { id }
    }

    /// Returns the light ID associated with this event, if any.
    ///
    /// [`DiscoveryCompleted`](Self::DiscoveryCompleted) carries no ID.
    #[must_use]
    pub fn light_id(&self) -> Option<&LightId> {
        match self {
            Self::Discovered { id, .. } | Self::Online { id } | Self::Offline { id } => Some(id),
            Self::DiscoveryCompleted => None,
        }
    }

    /// Returns `true` if this event reports a reachable light.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Discovered { .. } | Self::Online { .. })
    }
}
