// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Color types for LIFX light control.
//!
//! This module provides [`HsbkColor`], the full color a LIFX light can
//! display (hue, saturation, brightness, kelvin), and [`PartialColor`], a
//! color command with some fields left unset. Unset fields are filled from
//! the light's cached state at command time, so a user can change only the
//! value they named.

use std::fmt;

use crate::error::ValueError;

/// HSBK color representation (Hue, Saturation, Brightness, Kelvin).
///
/// All fields are validated at construction:
///
/// - hue: 0-359 degrees (wraps at 360)
/// - saturation: 0-100%
/// - brightness: 0-100%
/// - kelvin: 2500-9500 K color temperature, only visible at low saturation
///
/// # Examples
///
/// ```
/// use lifxr_lib::types::HsbkColor;
///
/// // A pure red at full brightness, neutral white point
/// let red = HsbkColor::new(0, 100, 100, 3500).unwrap();
/// assert_eq!(red.hue(), 0);
/// assert_eq!(red.saturation(), 100);
///
/// // A warm white (saturation 0 makes kelvin visible)
/// let warm = HsbkColor::new(0, 0, 80, 2700).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct HsbkColor {
    hue: u16,
    saturation: u8,
    brightness: u8,
    kelvin: u16,
}

impl HsbkColor {
    /// Maximum hue value (exclusive, wraps at 360).
    pub const MAX_HUE: u16 = 360;

    /// Maximum saturation value.
    pub const MAX_SATURATION: u8 = 100;

    /// Maximum brightness value.
    pub const MAX_BRIGHTNESS: u8 = 100;

    /// Minimum kelvin value (warmest).
    pub const MIN_KELVIN: u16 = 2500;

    /// Maximum kelvin value (coolest).
    pub const MAX_KELVIN: u16 = 9500;

    /// Kelvin value used when no white point is relevant.
    pub const NEUTRAL_KELVIN: u16 = 3500;

    /// Creates a new HSBK color.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its valid range.
    pub fn new(hue: u16, saturation: u8, brightness: u8, kelvin: u16) -> Result<Self, ValueError> {
        if hue >= Self::MAX_HUE {
            return Err(ValueError::InvalidHue(hue));
        }
        if saturation > Self::MAX_SATURATION {
            return Err(ValueError::InvalidSaturation(saturation));
        }
        if brightness > Self::MAX_BRIGHTNESS {
            return Err(ValueError::InvalidBrightness(brightness));
        }
        if !(Self::MIN_KELVIN..=Self::MAX_KELVIN).contains(&kelvin) {
            return Err(ValueError::InvalidKelvin(kelvin));
        }
        Ok(Self {
            hue,
            saturation,
            brightness,
            kelvin,
        })
    }

    /// Creates a pure red color at full brightness.
    #[must_use]
    pub const fn red() -> Self {
        Self {
            hue: 0,
            saturation: 100,
            brightness: 100,
            kelvin: Self::NEUTRAL_KELVIN,
        }
    }

    /// Creates a pure green color at full brightness.
    #[must_use]
    pub const fn green() -> Self {
        Self {
            hue: 120,
            saturation: 100,
            brightness: 100,
            kelvin: Self::NEUTRAL_KELVIN,
        }
    }

    /// Creates a pure blue color at full brightness.
    #[must_use]
    pub const fn blue() -> Self {
        Self {
            hue: 240,
            saturation: 100,
            brightness: 100,
            kelvin: Self::NEUTRAL_KELVIN,
        }
    }

    /// Creates a neutral white at full brightness.
    #[must_use]
    pub const fn white() -> Self {
        Self {
            hue: 0,
            saturation: 0,
            brightness: 100,
            kelvin: Self::NEUTRAL_KELVIN,
        }
    }

    /// Returns the hue value (0-359).
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Returns the saturation value (0-100).
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Returns the brightness value (0-100).
    #[must_use]
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Returns the kelvin value (2500-9500).
    #[must_use]
    pub const fn kelvin(&self) -> u16 {
        self.kelvin
    }

    /// Creates a new color with a different hue.
    ///
    /// # Errors
    ///
    /// Returns an error if hue is 360 or greater.
    pub fn with_hue(&self, hue: u16) -> Result<Self, ValueError> {
        Self::new(hue, self.saturation, self.brightness, self.kelvin)
    }

    /// Creates a new color with a different saturation.
    ///
    /// # Errors
    ///
    /// Returns an error if saturation is greater than 100.
    pub fn with_saturation(&self, saturation: u8) -> Result<Self, ValueError> {
        Self::new(self.hue, saturation, self.brightness, self.kelvin)
    }

    /// Creates a new color with a different brightness.
    ///
    /// # Errors
    ///
    /// Returns an error if brightness is greater than 100.
    pub fn with_brightness(&self, brightness: u8) -> Result<Self, ValueError> {
        Self::new(self.hue, self.saturation, brightness, self.kelvin)
    }

    /// Creates a new color with a different kelvin value.
    ///
    /// # Errors
    ///
    /// Returns an error if kelvin is outside [2500, 9500].
    pub fn with_kelvin(&self, kelvin: u16) -> Result<Self, ValueError> {
        Self::new(self.hue, self.saturation, self.brightness, kelvin)
    }
}

impl Default for HsbkColor {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for HsbkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HSBK({}, {}%, {}%, {}K)",
            self.hue, self.saturation, self.brightness, self.kelvin
        )
    }
}

/// A color command with some fields left unset.
///
/// This is the shape of a user-issued color change: any subset of
/// hue/saturation/brightness/kelvin. Unset fields are filled from the
/// light's cached state via [`merge_onto`](Self::merge_onto), so the light
/// keeps whatever the user did not mention.
///
/// # Examples
///
/// ```
/// use lifxr_lib::types::{HsbkColor, PartialColor};
///
/// let cached = HsbkColor::new(10, 50, 80, 3500).unwrap();
///
/// // "color -h 180" changes hue only
/// let full = PartialColor::new().hue(180).merge_onto(cached).unwrap();
/// assert_eq!(full.hue(), 180);
/// assert_eq!(full.brightness(), 80);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PartialColor {
    hue: Option<u16>,
    saturation: Option<u8>,
    brightness: Option<u8>,
    kelvin: Option<u16>,
}

impl PartialColor {
    /// Creates an empty partial color (no fields set).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hue field.
    #[must_use]
    pub fn hue(mut self, hue: u16) -> Self {
        self.hue = Some(hue);
        self
    }

    /// Sets the saturation field.
    #[must_use]
    pub fn saturation(mut self, saturation: u8) -> Self {
        self.saturation = Some(saturation);
        self
    }

    /// Sets the brightness field.
    #[must_use]
    pub fn brightness(mut self, brightness: u8) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Sets the kelvin field.
    #[must_use]
    pub fn kelvin(mut self, kelvin: u16) -> Self {
        self.kelvin = Some(kelvin);
        self
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hue.is_none()
            && self.saturation.is_none()
            && self.brightness.is_none()
            && self.kelvin.is_none()
    }

    /// Resolves the saturation to send, applying the white/color defaults.
    ///
    /// An explicit saturation always wins. When saturation is omitted:
    ///
    /// - kelvin given: 0 (a pure white-temperature light)
    /// - hue given: 100 (a fully saturated color)
    /// - neither: `None` (keep the cached saturation)
    #[must_use]
    pub fn effective_saturation(&self) -> Option<u8> {
        if self.saturation.is_some() {
            self.saturation
        } else if self.kelvin.is_some() {
            Some(0)
        } else if self.hue.is_some() {
            Some(100)
        } else {
            None
        }
    }

    /// Returns a copy with the saturation defaults applied.
    ///
    /// See [`effective_saturation`](Self::effective_saturation). Commands
    /// call this before merging so that "color -k 4000" produces a white
    /// light rather than keeping a stale saturation from the cache.
    #[must_use]
    pub fn with_saturation_defaults(mut self) -> Self {
        self.saturation = self.effective_saturation();
        self
    }

    /// Checks every explicitly set field against its valid range.
    ///
    /// Batch commands call this once up front so a bad value fails the
    /// whole command instead of being rediscovered per light mid-merge.
    ///
    /// # Errors
    ///
    /// Returns an error for the first out-of-range field.
    pub fn validate(&self) -> Result<(), ValueError> {
        // Unset fields merge from an already validated cached color
        self.merge_onto(HsbkColor::white()).map(|_| ())
    }

    /// Fills every unset field from `cached` and validates the result.
    ///
    /// Explicitly set fields are never overwritten. This realizes "change
    /// only what the user specified; keep the rest" without a read before
    /// every partial write.
    ///
    /// # Errors
    ///
    /// Returns an error if any explicitly set field is out of range.
    pub fn merge_onto(&self, cached: HsbkColor) -> Result<HsbkColor, ValueError> {
        HsbkColor::new(
            self.hue.unwrap_or(cached.hue()),
            self.saturation.unwrap_or(cached.saturation()),
            self.brightness.unwrap_or(cached.brightness()),
            self.kelvin.unwrap_or(cached.kelvin()),
        )
    }
}

impl From<HsbkColor> for PartialColor {
    fn from(color: HsbkColor) -> Self {
        Self {
            hue: Some(color.hue()),
            saturation: Some(color.saturation()),
            brightness: Some(color.brightness()),
            kelvin: Some(color.kelvin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsbk_valid() {
        let color = HsbkColor::new(180, 50, 75, 3500).unwrap();
        assert_eq!(color.hue(), 180);
        assert_eq!(color.saturation(), 50);
        assert_eq!(color.brightness(), 75);
        assert_eq!(color.kelvin(), 3500);
    }

    #[test]
    fn hsbk_invalid_hue() {
        let result = HsbkColor::new(360, 50, 50, 3500);
        assert!(matches!(result, Err(ValueError::InvalidHue(360))));
    }

    #[test]
    fn hsbk_invalid_saturation() {
        let result = HsbkColor::new(180, 101, 50, 3500);
        assert!(matches!(result, Err(ValueError::InvalidSaturation(101))));
    }

    #[test]
    fn hsbk_invalid_brightness() {
        let result = HsbkColor::new(180, 50, 101, 3500);
        assert!(matches!(result, Err(ValueError::InvalidBrightness(101))));
    }

    #[test]
    fn hsbk_invalid_kelvin() {
        assert!(matches!(
            HsbkColor::new(180, 50, 50, 2499),
            Err(ValueError::InvalidKelvin(2499))
        ));
        assert!(matches!(
            HsbkColor::new(180, 50, 50, 9501),
            Err(ValueError::InvalidKelvin(9501))
        ));
    }

    #[test]
    fn hsbk_kelvin_bounds_inclusive() {
        assert!(HsbkColor::new(0, 0, 100, 2500).is_ok());
        assert!(HsbkColor::new(0, 0, 100, 9500).is_ok());
    }

    #[test]
    fn hsbk_presets() {
        assert_eq!(HsbkColor::red().hue(), 0);
        assert_eq!(HsbkColor::green().hue(), 120);
        assert_eq!(HsbkColor::blue().hue(), 240);
        assert_eq!(HsbkColor::white().saturation(), 0);
    }

    #[test]
    fn hsbk_with_methods() {
        let color = HsbkColor::red();
        let green = color.with_hue(120).unwrap();
        assert_eq!(green.hue(), 120);
        assert_eq!(green.saturation(), 100);

        let dim = color.with_brightness(10).unwrap();
        assert_eq!(dim.brightness(), 10);
        assert!(color.with_kelvin(1000).is_err());
    }

    #[test]
    fn hsbk_display() {
        let color = HsbkColor::new(120, 100, 75, 3500).unwrap();
        assert_eq!(color.to_string(), "HSBK(120, 100%, 75%, 3500K)");
    }

    #[test]
    fn partial_merge_fills_unset_fields() {
        let cached = HsbkColor::new(10, 50, 80, 3500).unwrap();
        let merged = PartialColor::new().hue(180).merge_onto(cached).unwrap();

        assert_eq!(merged.hue(), 180);
        assert_eq!(merged.saturation(), 50);
        assert_eq!(merged.brightness(), 80);
        assert_eq!(merged.kelvin(), 3500);
    }

    #[test]
    fn partial_merge_never_overwrites_explicit_fields() {
        let cached = HsbkColor::new(10, 50, 80, 3500).unwrap();
        let merged = PartialColor::new()
            .hue(200)
            .saturation(30)
            .brightness(60)
            .kelvin(4000)
            .merge_onto(cached)
            .unwrap();

        assert_eq!(merged, HsbkColor::new(200, 30, 60, 4000).unwrap());
    }

    #[test]
    fn partial_merge_validates_explicit_fields() {
        let cached = HsbkColor::white();
        let result = PartialColor::new().hue(720).merge_onto(cached);
        assert!(matches!(result, Err(ValueError::InvalidHue(720))));
    }

    #[test]
    fn effective_saturation_explicit_wins() {
        let partial = PartialColor::new().saturation(30).kelvin(4000);
        assert_eq!(partial.effective_saturation(), Some(30));
    }

    #[test]
    fn effective_saturation_defaults_to_white_with_kelvin() {
        let partial = PartialColor::new().kelvin(4000);
        assert_eq!(partial.effective_saturation(), Some(0));
    }

    #[test]
    fn effective_saturation_defaults_to_full_with_hue() {
        let partial = PartialColor::new().hue(180);
        assert_eq!(partial.effective_saturation(), Some(100));
    }

    #[test]
    fn effective_saturation_kelvin_beats_hue() {
        // Both given: kelvin wins and the light renders a white temperature
        let partial = PartialColor::new().hue(180).kelvin(4000);
        assert_eq!(partial.effective_saturation(), Some(0));
    }

    #[test]
    fn effective_saturation_absent_without_hints() {
        let partial = PartialColor::new().brightness(50);
        assert_eq!(partial.effective_saturation(), None);
    }

    #[test]
    fn saturation_defaults_then_merge() {
        let cached = HsbkColor::new(10, 50, 80, 3500).unwrap();
        let merged = PartialColor::new()
            .kelvin(4000)
            .with_saturation_defaults()
            .merge_onto(cached)
            .unwrap();

        assert_eq!(merged.saturation(), 0);
        assert_eq!(merged.kelvin(), 4000);
        assert_eq!(merged.brightness(), 80);
    }

    #[test]
    fn partial_validate() {
        assert!(PartialColor::new().validate().is_ok());
        assert!(PartialColor::new().hue(359).kelvin(9500).validate().is_ok());
        assert!(matches!(
            PartialColor::new().saturation(101).validate(),
            Err(ValueError::InvalidSaturation(101))
        ));
    }

    #[test]
    fn partial_is_empty() {
        assert!(PartialColor::new().is_empty());
        assert!(!PartialColor::new().hue(1).is_empty());
    }

    #[test]
    fn partial_from_full_color() {
        let color = HsbkColor::new(30, 40, 50, 3000).unwrap();
        let partial: PartialColor = color.into();
        assert_eq!(partial.merge_onto(HsbkColor::white()).unwrap(), color);
    }
}
