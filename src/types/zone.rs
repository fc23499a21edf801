// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MultiZone types for strip and beam lights.

use std::fmt;

use crate::error::ValueError;

/// Apply behavior for a MultiZone color change.
///
/// MultiZone commands can be buffered on the device and applied together,
/// so a strip can receive several zone ranges and change them in one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ZoneApply {
    /// Buffer the change without applying it.
    NoApply,
    /// Apply this change and any buffered changes.
    #[default]
    Apply,
    /// Apply buffered changes, ignoring the color in this message.
    ApplyOnly,
}

impl ZoneApply {
    /// Returns the numeric value used on the wire.
    #[must_use]
    pub const fn as_num(&self) -> u8 {
        match self {
            Self::NoApply => 0,
            Self::Apply => 1,
            Self::ApplyOnly => 2,
        }
    }
}

impl fmt::Display for ZoneApply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NoApply => "no-apply",
            Self::Apply => "apply",
            Self::ApplyOnly => "apply-only",
        };
        write!(f, "{s}")
    }
}

/// An inclusive range of zone indexes on a MultiZone light.
///
/// # Examples
///
/// ```
/// use lifxr_lib::types::ZoneRange;
///
/// let range = ZoneRange::new(0, 7).unwrap();
/// assert_eq!(range.start(), 0);
/// assert_eq!(range.end(), 7);
///
/// // Reversed ranges are rejected
/// assert!(ZoneRange::new(5, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneRange {
    start: u8,
    end: u8,
}

impl ZoneRange {
    /// Creates a new zone range.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidZoneRange` if `start > end`.
    pub fn new(start: u8, end: u8) -> Result<Self, ValueError> {
        if start > end {
            return Err(ValueError::InvalidZoneRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range covering a single zone.
    #[must_use]
    pub const fn single(index: u8) -> Self {
        Self {
            start: index,
            end: index,
        }
    }

    /// Returns the first zone index.
    #[must_use]
    pub const fn start(&self) -> u8 {
        self.start
    }

    /// Returns the last zone index.
    #[must_use]
    pub const fn end(&self) -> u8 {
        self.end
    }

    /// Returns the number of zones covered.
    ///
    /// Widened to `u16` since a range covering all 256 zone indexes does
    /// not fit in `u8`.
    #[must_use]
    pub const fn len(&self) -> u16 {
        self.end as u16 - self.start as u16 + 1
    }

    /// A range always covers at least one zone.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for ZoneRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "zone {}", self.start)
        } else {
            write!(f, "zones {}-{}", self.start, self.end)
        }
    }
}
