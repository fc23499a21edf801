// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for LIFX light control.
//!
//! This module provides type-safe representations of values used in light
//! commands. Each type ensures values are within their valid ranges at
//! construction time, preventing runtime errors.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off state of a light
//! - [`HsbkColor`] - Full color (Hue 0-359, Saturation 0-100, Brightness 0-100, Kelvin 2500-9500)
//! - [`PartialColor`] - Color command with unset fields filled from cached state
//! - [`Transition`] - Fade duration for changes (default 500 ms)
//! - [`ZoneRange`] / [`ZoneApply`] - MultiZone addressing and apply behavior

mod color;
mod power;
mod transition;
mod zone;

pub use color::{HsbkColor, PartialColor};
pub use power::PowerState;
pub use transition::Transition;
pub use zone::{ZoneApply, ZoneRange};
