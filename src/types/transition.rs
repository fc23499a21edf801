// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transition duration type for light changes.

use std::fmt;
use std::time::Duration;

/// Duration of a light transition in milliseconds.
///
/// Power and color commands fade over this duration rather than snapping
/// to the new value. The default is 500 ms.
///
/// # Examples
///
/// ```
/// use lifxr_lib::types::Transition;
///
/// let fade = Transition::from_millis(2000);
/// assert_eq!(fade.as_millis(), 2000);
///
/// let instant = Transition::INSTANT;
/// assert_eq!(instant.as_millis(), 0);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Transition(u32);

impl Transition {
    /// No fade, change immediately.
    pub const INSTANT: Self = Self(0);

    /// Default transition (500 ms).
    pub const DEFAULT: Self = Self(500);

    /// Creates a transition from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> u32 {
        self.0
    }

    /// Returns the duration as a [`std::time::Duration`].
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        Duration::from_millis(self.0 as u64)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

impl From<u32> for Transition {
    fn from(millis: u32) -> Self {
        Self(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_500ms() {
        assert_eq!(Transition::default().as_millis(), 500);
    }

    #[test]
    fn from_millis_round_trip() {
        let t = Transition::from_millis(1234);
        assert_eq!(t.as_millis(), 1234);
        assert_eq!(t.as_duration(), Duration::from_millis(1234));
    }

    #[test]
    fn display() {
        assert_eq!(Transition::from_millis(250).to_string(), "250ms");
    }

    #[test]
    fn instant_is_zero() {
        assert_eq!(Transition::INSTANT.as_millis(), 0);
    }
}
