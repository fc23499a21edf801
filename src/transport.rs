// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The seam to the LAN device-control collaborator.
//!
//! This crate does not speak the LIFX LAN protocol. Discovery, packet
//! framing and per-light I/O live in an external client; everything the
//! session needs from it is captured by the [`LightTransport`] trait.
//! Tests substitute a recording mock at the same seam.

use crate::error::TransportError;
use crate::light::LightId;
use crate::state::LightState;
use crate::types::{HsbkColor, Transition, ZoneApply, ZoneRange};

/// Per-light operations provided by the LAN client.
///
/// All operations are asynchronous and fallible; a failure concerns only
/// the addressed light. Implementations are expected to be cheap to call
/// concurrently for different lights, and no ordering across lights is
/// guaranteed by callers.
#[allow(async_fn_in_trait)]
pub trait LightTransport {
    /// Queries the current power and color state of a light.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the light does not answer or the
    /// response cannot be decoded.
    async fn fetch_state(&self, id: &LightId) -> Result<LightState, TransportError>;

    /// Turns a light on or off, fading over `transition`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the command cannot be sent.
    async fn set_power(
        &self,
        id: &LightId,
        on: bool,
        transition: Transition,
    ) -> Result<(), TransportError>;

    /// Changes the color of a light, fading over `transition`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the command cannot be sent.
    async fn set_color(
        &self,
        id: &LightId,
        color: HsbkColor,
        transition: Transition,
    ) -> Result<(), TransportError>;

    /// Changes the color of a zone range on a MultiZone light.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the command cannot be sent.
    async fn set_color_zones(
        &self,
        id: &LightId,
        range: ZoneRange,
        color: HsbkColor,
        transition: Transition,
        apply: ZoneApply,
    ) -> Result<(), TransportError>;

    /// Sets the maximum infrared brightness (0-100) on a +IR light.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the command cannot be sent.
    async fn set_infrared(&self, id: &LightId, brightness: u8) -> Result<(), TransportError>;
}
