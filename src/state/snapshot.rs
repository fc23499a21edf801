// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state snapshot.

use std::fmt;

use crate::types::{HsbkColor, PowerState};

/// Last-known power and color state of one light.
///
/// A snapshot is whatever the light most recently reported, or whatever a
/// committed command most recently set; the light may have changed since
/// (a physical switch, another controller), so callers must tolerate
/// staleness.
///
/// # Examples
///
/// ```
/// use lifxr_lib::state::LightState;
/// use lifxr_lib::types::{HsbkColor, PowerState};
///
/// let state = LightState::new(PowerState::On, HsbkColor::white());
/// assert!(state.power().is_on());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LightState {
    power: PowerState,
    color: HsbkColor,
}

impl LightState {
    /// Creates a snapshot from a power state and color.
    #[must_use]
    pub const fn new(power: PowerState, color: HsbkColor) -> Self {
        Self { power, color }
    }

    /// Returns the power state.
    #[must_use]
    pub const fn power(&self) -> PowerState {
        self.power
    }

    /// Returns the color.
    #[must_use]
    pub const fn color(&self) -> HsbkColor {
        self.color
    }

    /// Returns a copy with a different power state.
    #[must_use]
    pub const fn with_power(&self, power: PowerState) -> Self {
        Self {
            power,
            color: self.color,
        }
    }

    /// Returns a copy with a different color.
    #[must_use]
    pub const fn with_color(&self, color: HsbkColor) -> Self {
        Self {
            power: self.power,
            color,
        }
    }
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.power, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let color = HsbkColor::new(120, 100, 75, 3500).unwrap();
        let state = LightState::new(PowerState::On, color);

        assert_eq!(state.power(), PowerState::On);
        assert_eq!(state.color(), color);
    }

    #[test]
    fn with_power_keeps_color() {
        let state = LightState::new(PowerState::On, HsbkColor::red());
        let off = state.with_power(PowerState::Off);

        assert_eq!(off.power(), PowerState::Off);
        assert_eq!(off.color(), HsbkColor::red());
    }

    #[test]
    fn with_color_keeps_power() {
        let state = LightState::new(PowerState::On, HsbkColor::red());
        let green = state.with_color(HsbkColor::green());

        assert_eq!(green.power(), PowerState::On);
        assert_eq!(green.color(), HsbkColor::green());
    }

    #[test]
    fn display() {
        let state = LightState::new(PowerState::On, HsbkColor::white());
        assert_eq!(state.to_string(), "on HSBK(0, 0%, 100%, 3500K)");
    }
}
