// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state tracking.
//!
//! This module provides [`LightState`], the last-known power/color
//! snapshot of one light, and [`StateCache`], the per-identifier cache
//! that fills omitted color parameters before a partial color change.
//!
//! # Examples
//!
//! ```
//! use lifxr_lib::state::LightState;
//! use lifxr_lib::types::{HsbkColor, PowerState};
//!
//! let state = LightState::new(PowerState::On, HsbkColor::white());
//! assert_eq!(state.color().brightness(), 100);
//! ```

mod cache;
mod snapshot;

pub use cache::StateCache;
pub use snapshot::LightState;
