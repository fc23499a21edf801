// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State cache keyed by light identifier.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::TransportError;
use crate::light::LightId;
use crate::transport::LightTransport;

use super::LightState;

/// Cache of the most-recently-observed state per light.
///
/// The cache lets color commands fill omitted parameters from the current
/// state without a read-before-write round trip on every invocation.
/// Entries are created on first fetch, overwritten by later fetches and by
/// committed color commands, and never expire; the cache is not
/// invalidated when a light changes behind our back.
///
/// A fetch failure leaves any prior entry untouched and is returned to the
/// caller unchanged, so a batch command can skip the one failing light and
/// proceed with its siblings.
#[derive(Debug, Default)]
pub struct StateCache {
    states: RwLock<HashMap<LightId, LightState>>,
}

impl StateCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached snapshot, fetching it once on a miss.
    ///
    /// On a hit no I/O happens. On a miss exactly one fetch is issued and
    /// its result stored. Concurrent calls for the same id that all miss
    /// before the first fetch resolves each issue their own fetch; the
    /// race is accepted, the last store wins and all callers get a valid
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns the transport error from the fetch; the cache entry (if
    /// any) is left untouched.
    pub async fn get<T: LightTransport>(
        &self,
        id: &LightId,
        transport: &T,
    ) -> Result<LightState, TransportError> {
        if let Some(state) = self.states.read().await.get(id) {
            return Ok(*state);
        }
        self.refresh(id, transport).await
    }

    /// Unconditionally fetches and overwrites the cached snapshot.
    ///
    /// Used on discovery and online events to pre-warm the cache.
    ///
    /// # Errors
    ///
    /// Returns the transport error from the fetch; the cache entry (if
    /// any) is left untouched.
    pub async fn refresh<T: LightTransport>(
        &self,
        id: &LightId,
        transport: &T,
    ) -> Result<LightState, TransportError> {
        // Guard must not be held across the fetch await
        let state = transport.fetch_state(id).await?;
        tracing::debug!(%id, %state, "cached light state");
        self.states.write().await.insert(id.clone(), state);
        Ok(state)
    }

    /// Overwrites the cached snapshot with locally known values.
    ///
    /// Called after a successful write command with the exact values just
    /// sent, since that is what the light will converge to.
    pub async fn store(&self, id: &LightId, state: LightState) {
        self.states.write().await.insert(id.clone(), state);
    }

    /// Returns the cached snapshot without fetching, if present.
    pub async fn peek(&self, id: &LightId) -> Option<LightState> {
        self.states.read().await.get(id).copied()
    }

    /// Returns the number of cached snapshots.
    pub async fn len(&self) -> usize {
        self.states.read().await.len()
    }

    /// Returns `true` if no snapshot is cached.
    pub async fn is_empty(&self) -> bool {
        self.states.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HsbkColor, PowerState, Transition, ZoneApply, ZoneRange};

    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Transport double that counts fetches and can be set to fail.
    #[derive(Default)]
    struct CountingTransport {
        fetches: AtomicUsize,
        fail: bool,
    }

    impl CountingTransport {
        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    impl LightTransport for CountingTransport {
        async fn fetch_state(&self, id: &LightId) -> Result<LightState, TransportError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(TransportError::Offline(id.to_string()));
            }
            Ok(LightState::new(PowerState::On, HsbkColor::white()))
        }

        async fn set_power(
            &self,
            _id: &LightId,
            _on: bool,
            _transition: Transition,
        ) -> Result<(), TransportError> {
            Ok(())
        }

        async fn set_color(
            &self,
            _id: &LightId,
            _color: HsbkColor,
            _transition: Transition,
        ) -> Result<(), TransportError> {
            Ok(())
        }

        async fn set_color_zones(
            &self,
            _id: &LightId,
            _range: ZoneRange,
            _color: HsbkColor,
            _transition: Transition,
            _apply: ZoneApply,
        ) -> Result<(), TransportError> {
            Ok(())
        }

        async fn set_infrared(&self, _id: &LightId, _brightness: u8) -> Result<(), TransportError> {
            Ok(())
        }
    }

    fn id(serial: &str) -> LightId {
        LightId::new(serial)
    }

    #[tokio::test]
    async fn cold_get_fetches_once_and_populates() {
        let cache = StateCache::new();
        let transport = CountingTransport::default();
        let light = id("d073d5000001");

        let state = cache.get(&light, &transport).await.unwrap();
        assert_eq!(state.power(), PowerState::On);
        assert_eq!(transport.fetch_count(), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn warm_get_does_not_fetch_again() {
        let cache = StateCache::new();
        let transport = CountingTransport::default();
        let light = id("d073d5000001");

        cache.get(&light, &transport).await.unwrap();
        cache.get(&light, &transport).await.unwrap();
        cache.get(&light, &transport).await.unwrap();

        assert_eq!(transport.fetch_count(), 1);
    }

    #[tokio::test]
    async fn refresh_always_fetches() {
        let cache = StateCache::new();
        let transport = CountingTransport::default();
        let light = id("d073d5000001");

        cache.refresh(&light, &transport).await.unwrap();
        cache.refresh(&light, &transport).await.unwrap();

        assert_eq!(transport.fetch_count(), 2);
    }

    #[tokio::test]
    async fn fetch_failure_propagates_and_leaves_cache_untouched() {
        let cache = StateCache::new();
        let light = id("d073d5000001");

        // Warm the cache, then make the transport fail
        let ok = CountingTransport::default();
        let cached = cache.get(&light, &ok).await.unwrap();

        let failing = CountingTransport {
            fail: true,
            ..Default::default()
        };
        let result = cache.refresh(&light, &failing).await;
        assert!(matches!(result, Err(TransportError::Offline(_))));

        // Prior entry survives the failed refresh
        assert_eq!(cache.peek(&light).await, Some(cached));
    }

    #[tokio::test]
    async fn failed_cold_get_does_not_populate() {
        let cache = StateCache::new();
        let failing = CountingTransport {
            fail: true,
            ..Default::default()
        };
        let light = id("d073d5000001");

        assert!(cache.get(&light, &failing).await.is_err());
        assert!(cache.is_empty().await);

        // Next get tries again rather than caching the failure
        assert!(cache.get(&light, &failing).await.is_err());
        assert_eq!(failing.fetch_count(), 2);
    }

    #[tokio::test]
    async fn store_overwrites_without_fetching() {
        let cache = StateCache::new();
        let transport = CountingTransport::default();
        let light = id("d073d5000001");

        let written = LightState::new(PowerState::Off, HsbkColor::red());
        cache.store(&light, written).await;

        let state = cache.get(&light, &transport).await.unwrap();
        assert_eq!(state, written);
        assert_eq!(transport.fetch_count(), 0);
    }

    #[tokio::test]
    async fn entries_are_independent_per_light() {
        let cache = StateCache::new();
        let transport = CountingTransport::default();

        cache.get(&id("d073d5000001"), &transport).await.unwrap();
        cache.get(&id("d073d5000002"), &transport).await.unwrap();

        assert_eq!(transport.fetch_count(), 2);
        assert_eq!(cache.len().await, 2);
    }
}
