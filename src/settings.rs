// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Optional settings file.
//!
//! A session can be scoped by a small TOML document, typically at
//! `~/.lifxsh/settings.toml`. It is read once at startup and never
//! written by this crate.
//!
//! ```toml
//! # addresses to probe instead of broadcasting discovery
//! lights = ["192.168.1.40", "192.168.1.41"]
//!
//! # default fade duration for commands
//! transition_ms = 1000
//! ```

use std::net::IpAddr;
use std::path::Path;

use serde::Deserialize;

use crate::error::SettingsError;
use crate::types::Transition;

/// Settings loaded from the optional TOML file.
///
/// # Examples
///
/// ```
/// use lifxr_lib::settings::Settings;
///
/// let settings: Settings = toml::from_str(
///     "lights = [\"192.168.1.40\"]\ntransition_ms = 1000",
/// ).unwrap();
/// assert_eq!(settings.lights.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Known light addresses to scope discovery.
    ///
    /// When non-empty, the embedding application passes these to the
    /// transport's init so it probes the listed addresses instead of
    /// broadcasting.
    pub lights: Vec<IpAddr>,

    /// Default fade duration in milliseconds for commands that omit one.
    pub transition_ms: Option<u32>,
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Loads settings from `path` if the file exists, defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] if the file exists but cannot be read
    /// or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the configured default transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<Transition> {
        self.transition_ms.map(Transition::from_millis)
    }
}
