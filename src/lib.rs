// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `LifxR` Lib - A Rust session layer for controlling LIFX lights.
//!
//! This library sits between a command layer (an interactive shell or a
//! one-shot CLI) and a LAN device-control client. The LAN protocol itself
//! (UDP discovery, packet codec, per-light polling) is an external
//! collaborator behind the [`LightTransport`] trait; this crate owns what
//! goes on top of it:
//!
//! - **Alias registry**: case-insensitive friendly-name to identifier
//!   mapping, fed from discovery events, with raw-identifier pass-through
//! - **State cache**: last-observed power/color snapshot per light, used
//!   to fill omitted color parameters without a read-before-write round
//!   trip
//! - **Command fan-out**: batch power/color/zone/infrared commands over
//!   many lights, isolating per-light failures
//!
//! # Quick Start
//!
//! ```no_run
//! use lifxr_lib::{LightSession, LightTransport};
//! use lifxr_lib::light::LightEvent;
//! use lifxr_lib::types::{PartialColor, Transition};
//!
//! # async fn example(transport: impl LightTransport, feed: Vec<LightEvent>) -> lifxr_lib::Result<()> {
//! let session = LightSession::new(transport);
//!
//! // Drive the session from the LAN client's discovery feed
//! for event in feed {
//!     session.handle_event(event).await;
//! }
//!
//! // Address lights by the labels they reported
//! session.power_on(&["kitchen", "desk-lamp"], None).await;
//!
//! // Change only the kelvin value; saturation defaults to 0 (white),
//! // brightness comes from the cached state
//! session
//!     .set_color(&["all"], PartialColor::new().kelvin(2700), None)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Settings
//!
//! An optional TOML file can scope discovery to known addresses and set
//! the default fade duration:
//!
//! ```no_run
//! use lifxr_lib::{LightSession, LightTransport};
//! use lifxr_lib::settings::Settings;
//!
//! # fn example(transport: impl LightTransport) -> lifxr_lib::Result<()> {
//! let settings = Settings::load_or_default("~/.lifxsh/settings.toml")?;
//! let session = LightSession::with_settings(transport, &settings);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod light;
pub mod registry;
mod session;
pub mod settings;
pub mod state;
mod transport;
pub mod types;

pub use error::{Error, Result, SettingsError, TransportError, ValueError};
pub use light::{EventBus, LightEvent, LightId};
pub use registry::{ALL_LIGHTS, AliasRegistry};
pub use session::{LightOverview, LightSession};
pub use settings::Settings;
pub use state::{LightState, StateCache};
pub use transport::LightTransport;
pub use types::{HsbkColor, PartialColor, PowerState, Transition, ZoneApply, ZoneRange};
