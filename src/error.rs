// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `LifxR` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! value validation, transport communication, and settings loading.

use thiserror::Error;

/// The main error type for this library.
///
/// This enum encompasses all possible errors that can occur when working
/// with a light session.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while communicating with a light.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error occurred while loading the settings file.
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// No light is known under the given name or identifier.
    #[error("no light found with name \"{0}\"")]
    LightNotFound(String),
}

/// Errors related to value validation and constraints.
///
/// These errors occur when attempting to create constrained types
/// with invalid values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A hue value is outside the valid range (0-359).
    #[error("hue value {0} is out of range [0, 360)")]
    InvalidHue(u16),

    /// A saturation value is outside the valid range (0-100).
    #[error("saturation value {0} is out of range [0, 100]")]
    InvalidSaturation(u8),

    /// A brightness value is outside the valid range (0-100).
    #[error("brightness value {0} is out of range [0, 100]")]
    InvalidBrightness(u8),

    /// A kelvin value is outside the valid range (2500-9500).
    #[error("kelvin value {0} is out of range [2500, 9500]")]
    InvalidKelvin(u16),

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),

    /// A zone range is empty or reversed.
    #[error("invalid zone range: start {start} > end {end}")]
    InvalidZoneRange {
        /// First zone index of the range.
        start: u8,
        /// Last zone index of the range.
        end: u8,
    },
}

/// Errors reported by the LAN transport collaborator.
///
/// The transport (UDP discovery, packet codec, per-device polling) lives
/// outside this crate; its failures surface here. A transport error is
/// always scoped to a single light and never corrupts registry or cache
/// contents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The light did not answer within the transport's deadline.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The light is currently offline.
    #[error("light is offline: {0}")]
    Offline(String),

    /// Sending the command failed.
    #[error("send failed: {0}")]
    Send(String),

    /// The state response could not be decoded.
    #[error("malformed state response: {0}")]
    MalformedResponse(String),
}

/// Errors related to loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML.
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidKelvin(12000);
        assert_eq!(
            err.to_string(),
            "kelvin value 12000 is out of range [2500, 9500]"
        );
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::InvalidHue(400);
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::InvalidHue(400))));
    }

    #[test]
    fn transport_error_display() {
        let err = TransportError::Timeout(2000);
        assert_eq!(err.to_string(), "request timed out after 2000 ms");
    }

    #[test]
    fn light_not_found_display() {
        let err = Error::LightNotFound("kitchen".to_string());
        assert_eq!(err.to_string(), "no light found with name \"kitchen\"");
    }

    #[test]
    fn zone_range_display() {
        let err = ValueError::InvalidZoneRange { start: 5, end: 2 };
        assert_eq!(err.to_string(), "invalid zone range: start 5 > end 2");
    }
}
