// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light session coordinating registry, cache and transport.

use futures::future::join_all;

use crate::error::{Error, Result};
use crate::light::{EventBus, LightEvent, LightId};
use crate::registry::{ALL_LIGHTS, AliasRegistry};
use crate::settings::Settings;
use crate::state::{LightState, StateCache};
use crate::transport::LightTransport;
use crate::types::{PartialColor, PowerState, Transition, ZoneApply, ZoneRange};

/// One row of a [`list`](LightSession::list) result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightOverview {
    /// The light's stable identifier.
    pub id: LightId,
    /// The registered alias key, if the light has one.
    pub label: Option<String>,
    /// The light's last-known state.
    pub state: LightState,
}

/// Session owning the alias registry, the state cache and the transport.
///
/// The session is the single entry point for command handlers: it resolves
/// user-supplied names to light identifiers, consults the cache to fill in
/// unset color parameters, and fans commands out over the transport.
/// Construct one explicitly and pass it by reference instead of relying on
/// process-wide state.
///
/// Batch commands never abort because one light fails: the failure is
/// logged, that light is skipped, and its siblings proceed.
///
/// # Examples
///
/// ```no_run
/// use lifxr_lib::{LightSession, LightTransport};
/// use lifxr_lib::light::{LightEvent, LightId};
/// use lifxr_lib::types::PartialColor;
///
/// # async fn example(transport: impl LightTransport) -> lifxr_lib::Result<()> {
/// let session = LightSession::new(transport);
///
/// // Feed discovery events from the LAN client
/// session
///     .handle_event(LightEvent::discovered(
///         LightId::new("d073d5123456"),
///         "Kitchen",
///         "192.168.1.40".parse().unwrap(),
///     ))
///     .await;
///
/// // Change only the hue; other color fields come from cached state
/// session
///     .set_color(&["kitchen"], PartialColor::new().hue(180), None)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct LightSession<T: LightTransport> {
    transport: T,
    registry: AliasRegistry,
    cache: StateCache,
    events: EventBus,
    transition: Transition,
}

impl<T: LightTransport> LightSession<T> {
    /// Creates a session over the given transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            registry: AliasRegistry::new(),
            cache: StateCache::new(),
            events: EventBus::new(),
            transition: Transition::default(),
        }
    }

    /// Creates a session configured from loaded settings.
    #[must_use]
    pub fn with_settings(transport: T, settings: &Settings) -> Self {
        let mut session = Self::new(transport);
        if let Some(transition) = settings.transition() {
            session.transition = transition;
        }
        session
    }

    /// Returns the alias registry.
    #[must_use]
    pub fn registry(&self) -> &AliasRegistry {
        &self.registry
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the default transition for commands that omit one.
    #[must_use]
    pub fn default_transition(&self) -> Transition {
        self.transition
    }

    /// Subscribes to the re-published discovery events.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<LightEvent> {
        self.events.subscribe()
    }

    // =========================================================================
    // Discovery feed
    // =========================================================================

    /// Consumes one event from the LAN discovery feed.
    ///
    /// A discovered light gets an alias and a warm cache entry; a light
    /// coming back online gets its cache entry refreshed. An offline
    /// light keeps both its alias and its stale snapshot. Every event is
    /// re-published to subscribers.
    pub async fn handle_event(&self, event: LightEvent) {
        match &event {
            LightEvent::Discovered { id, label, addr } => {
                tracing::info!(%id, label, %addr, "light discovered");
                self.registry.register(id, label);
                self.warm_cache(id).await;
            }
            LightEvent::Online { id } => {
                tracing::info!(%id, "light online");
                self.warm_cache(id).await;
            }
            LightEvent::Offline { id } => {
                tracing::info!(%id, "light offline");
            }
            LightEvent::DiscoveryCompleted => {
                tracing::debug!("discovery completed");
            }
        }
        self.events.publish(event);
    }

    async fn warm_cache(&self, id: &LightId) {
        if let Err(error) = self.cache.refresh(id, &self.transport).await {
            tracing::warn!(%id, %error, "could not pre-warm state cache");
        }
    }

    // =========================================================================
    // Target resolution
    // =========================================================================

    /// Resolves user-supplied names to light identifiers.
    ///
    /// An empty list or the reserved name [`ALL_LIGHTS`] expands to every
    /// currently known light, bypassing the registry. Otherwise each name
    /// (or raw identifier) is resolved individually; unknown names are
    /// logged by the registry and skipped.
    #[must_use]
    pub fn resolve_targets<S: AsRef<str>>(&self, names: &[S]) -> Vec<LightId> {
        if names.is_empty() {
            return self.registry.ids();
        }

        let mut targets = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if name == ALL_LIGHTS {
                return self.registry.ids();
            }
            if let Some(id) = self.registry.resolve(name) {
                targets.push(id);
            }
        }
        targets
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Returns an overview row for every known light.
    ///
    /// State fetches fan out concurrently and are joined; a fetch failure
    /// for one light is logged and that light omitted from the result,
    /// which itself never fails.
    pub async fn list(&self) -> Vec<LightOverview> {
        let ids = self.registry.ids();
        let rows = join_all(ids.into_iter().map(|id| async move {
            match self.cache.get(&id, &self.transport).await {
                Ok(state) => Some(LightOverview {
                    label: self.registry.label_for(&id),
                    id,
                    state,
                }),
                Err(error) => {
                    tracing::warn!(%id, %error, "skipping light in list");
                    None
                }
            }
        }))
        .await;

        rows.into_iter().flatten().collect()
    }

    /// Turns the named lights on.
    ///
    /// Returns the identifiers of the lights that accepted the command.
    pub async fn power_on<S: AsRef<str>>(
        &self,
        names: &[S],
        transition: Option<Transition>,
    ) -> Vec<LightId> {
        self.set_power(names, PowerState::On, transition).await
    }

    /// Turns the named lights off.
    ///
    /// Returns the identifiers of the lights that accepted the command.
    pub async fn power_off<S: AsRef<str>>(
        &self,
        names: &[S],
        transition: Option<Transition>,
    ) -> Vec<LightId> {
        self.set_power(names, PowerState::Off, transition).await
    }

    async fn set_power<S: AsRef<str>>(
        &self,
        names: &[S],
        power: PowerState,
        transition: Option<Transition>,
    ) -> Vec<LightId> {
        let transition = transition.unwrap_or(self.transition);
        let targets = self.resolve_targets(names);

        let done = join_all(targets.into_iter().map(|id| async move {
            match self
                .transport
                .set_power(&id, power.is_on(), transition)
                .await
            {
                Ok(()) => {
                    // The cached snapshot converges to what was just sent
                    if let Some(state) = self.cache.peek(&id).await {
                        self.cache.store(&id, state.with_power(power)).await;
                    }
                    Some(id)
                }
                Err(error) => {
                    tracing::warn!(%id, %error, "power command failed");
                    None
                }
            }
        }))
        .await;

        done.into_iter().flatten().collect()
    }

    /// Changes the color of the named lights.
    ///
    /// Fields unset in `color` are filled from each light's cached state,
    /// after applying the saturation defaults (omitted saturation becomes
    /// 0 with kelvin, 100 with hue). On success the cache is overwritten
    /// with the exact values sent. Returns the identifiers of the lights
    /// that accepted the command.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`](crate::error::ValueError) immediately if
    /// an explicitly set field is out of range; per-light transport
    /// failures are logged and skipped instead.
    pub async fn set_color<S: AsRef<str>>(
        &self,
        names: &[S],
        color: PartialColor,
        transition: Option<Transition>,
    ) -> Result<Vec<LightId>> {
        let color = color.with_saturation_defaults();
        color.validate().map_err(Error::Value)?;

        let transition = transition.unwrap_or(self.transition);
        let targets = self.resolve_targets(names);

        let done = join_all(targets.into_iter().map(|id| async move {
            let cached = match self.cache.get(&id, &self.transport).await {
                Ok(state) => state,
                Err(error) => {
                    tracing::warn!(%id, %error, "could not read state for color merge");
                    return None;
                }
            };

            // Explicit fields already validated, cached fields always valid
            let merged = color.merge_onto(cached.color()).ok()?;

            match self.transport.set_color(&id, merged, transition).await {
                Ok(()) => {
                    self.cache.store(&id, cached.with_color(merged)).await;
                    Some(id)
                }
                Err(error) => {
                    tracing::warn!(%id, %error, "color command failed");
                    None
                }
            }
        }))
        .await;

        Ok(done.into_iter().flatten().collect())
    }

    /// Changes the color of a zone range on one MultiZone light.
    ///
    /// Unset fields merge from the light's whole-light snapshot, like
    /// [`set_color`](Self::set_color); the cache is not written back
    /// since the snapshot cannot represent per-zone state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LightNotFound`] for an unknown name, a
    /// [`ValueError`](crate::error::ValueError) for an out-of-range
    /// field, or the transport error for this single light.
    pub async fn set_color_zones(
        &self,
        name: &str,
        range: ZoneRange,
        color: PartialColor,
        transition: Option<Transition>,
        apply: ZoneApply,
    ) -> Result<()> {
        let color = color.with_saturation_defaults();
        color.validate().map_err(Error::Value)?;

        let id = self
            .registry
            .resolve(name)
            .ok_or_else(|| Error::LightNotFound(name.to_string()))?;

        let cached = self.cache.get(&id, &self.transport).await?;
        let merged = color.merge_onto(cached.color())?;

        self.transport
            .set_color_zones(&id, range, merged, transition.unwrap_or(self.transition), apply)
            .await?;
        Ok(())
    }

    /// Sets the maximum infrared brightness on the named lights.
    ///
    /// Returns the identifiers of the lights that accepted the command.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`](crate::error::ValueError) if `brightness`
    /// exceeds 100.
    pub async fn set_infrared<S: AsRef<str>>(
        &self,
        names: &[S],
        brightness: u8,
    ) -> Result<Vec<LightId>> {
        if brightness > 100 {
            return Err(crate::error::ValueError::InvalidBrightness(brightness).into());
        }

        let targets = self.resolve_targets(names);

        let done = join_all(targets.into_iter().map(|id| async move {
            match self.transport.set_infrared(&id, brightness).await {
                Ok(()) => Some(id),
                Err(error) => {
                    tracing::warn!(%id, %error, "infrared command failed");
                    None
                }
            }
        }))
        .await;

        Ok(done.into_iter().flatten().collect())
    }
}
