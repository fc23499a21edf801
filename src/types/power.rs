// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power state type for LIFX lights.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Represents the power state of a light.
///
/// # Examples
///
/// ```
/// use lifxr_lib::types::PowerState;
///
/// let on = PowerState::On;
/// assert_eq!(on.as_str(), "on");
///
/// // LIFX reports power as a 16-bit level (0 or 65535)
/// assert_eq!(PowerState::from_level(65535), PowerState::On);
/// assert_eq!(PowerState::from_level(0), PowerState::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PowerState {
    /// Power is off.
    Off,
    /// Power is on.
    On,
}

impl PowerState {
    /// Returns the lowercase string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }

    /// Returns `true` if the light is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Converts a LIFX power level to a power state.
    ///
    /// The wire protocol reports power as a level where 0 is off and any
    /// non-zero value is on.
    #[must_use]
    pub const fn from_level(level: u16) -> Self {
        if level == 0 { Self::Off } else { Self::On }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PowerState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "0" | "false" => Ok(Self::Off),
            "on" | "1" | "true" => Ok(Self::On),
            _ => Err(ValueError::InvalidPowerState(s.to_string())),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}
