// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light identifier type.

use std::fmt;

/// Unique identifier for a LIFX light.
///
/// This is a wrapper around the serial string the LAN transport assigns to
/// each light (a 12-digit hex serial in practice). The identifier is
/// stable across network address changes, unlike the light's IP address,
/// which makes it the key for both the alias registry and the state cache.
///
/// # Examples
///
/// ```
/// use lifxr_lib::light::LightId;
///
/// let id = LightId::new("d073d5123456");
/// assert_eq!(id.as_str(), "d073d5123456");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct LightId(String);

impl LightId {
    /// Creates a light identifier from a serial string.
    #[must_use]
    pub fn new(serial: impl Into<String>) -> Self {
        Self(serial.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LightId({})", self.0)
    }
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LightId {
    fn from(serial: &str) -> Self {
        Self(serial.to_string())
    }
}

impl From<String> for LightId {
    fn from(serial: String) -> Self {
        Self(serial)
    }
}

impl AsRef<str> for LightId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
