// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Alias registry mapping friendly names to light identifiers.
//!
//! Lights report a user-assigned label when discovered; the registry maps
//! a normalized form of that label to the light's stable identifier so
//! commands can address lights by name. Interactive users type labels
//! inconsistently, so keys are lowercased and spaces become hyphens, and
//! the same normalization is applied at registration and lookup.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::light::LightId;

/// Reserved name addressing every currently known light.
///
/// `"all"` is never stored as an alias. Callers recognize it themselves
/// (see [`LightSession::resolve_targets`](crate::LightSession::resolve_targets))
/// and bypass the registry entirely.
pub const ALL_LIGHTS: &str = "all";

/// Registry of friendly-name aliases for lights.
///
/// Aliases are registered from discovery events and never removed: an
/// offline light keeps its alias, and re-labeling a light adds a second
/// alias without compacting the old one (last write wins per name).
///
/// The registry uses interior mutability so it can be shared by reference
/// from a session; no lock is held across an await point.
///
/// # Examples
///
/// ```
/// use lifxr_lib::light::LightId;
/// use lifxr_lib::registry::AliasRegistry;
///
/// let registry = AliasRegistry::new();
/// registry.register(&LightId::new("d073d5123456"), "Kitchen Table");
///
/// // Lookup is case-insensitive, spaces match hyphens
/// let id = registry.resolve("kitchen table").unwrap();
/// assert_eq!(id.as_str(), "d073d5123456");
/// ```
#[derive(Debug, Default)]
pub struct AliasRegistry {
    aliases: RwLock<HashMap<String, LightId>>,
}

impl AliasRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a raw label into a registry key.
    ///
    /// Lowercases and replaces spaces with hyphens. Idempotent: applying
    /// it to its own output yields the same key.
    #[must_use]
    pub fn key_for(name: &str) -> String {
        name.to_lowercase().replace(' ', "-")
    }

    /// Registers an alias for a light.
    ///
    /// Normalizes `name` and stores the mapping, overwriting any previous
    /// light registered under the same name. An empty identifier or name
    /// is logged and ignored; registration never fails loudly because it
    /// runs inside the discovery event handler.
    ///
    /// A light labeled [`ALL_LIGHTS`] is refused: the name stays reserved
    /// for addressing every light.
    pub fn register(&self, id: &LightId, name: &str) {
        if id.is_empty() || name.is_empty() {
            tracing::error!("could not add light mapping: id or name not defined");
            return;
        }

        let key = Self::key_for(name);
        if key == ALL_LIGHTS {
            tracing::warn!(%id, "refusing to register reserved name as alias");
            return;
        }
        tracing::debug!(%id, key, "registered light alias");
        self.aliases.write().insert(key, id.clone());
    }

    /// Resolves a friendly name or raw identifier to a light identifier.
    ///
    /// A raw identifier that is already a registered value passes through
    /// unchanged, so call sites can accept either form. Otherwise the
    /// name is normalized and looked up. An unknown name logs a warning
    /// and returns `None`; callers treat that as "skip this target", not
    /// as a fatal error for a batch command.
    #[must_use]
    pub fn resolve(&self, name_or_id: &str) -> Option<LightId> {
        if name_or_id.is_empty() {
            tracing::error!("could not resolve light mapping: no name defined");
            return None;
        }

        let aliases = self.aliases.read();

        // The caller may have passed a raw identifier instead of a name
        if aliases.values().any(|id| id.as_str() == name_or_id) {
            return Some(LightId::new(name_or_id));
        }

        if let Some(id) = aliases.get(&Self::key_for(name_or_id)) {
            return Some(id.clone());
        }

        tracing::warn!(name = name_or_id, "no light found with name");
        None
    }

    /// Returns all known alias keys, sorted, with [`ALL_LIGHTS`] appended
    /// last.
    ///
    /// Produces a fresh sequence on each call; the registry may have
    /// grown since the last one. Used for interactive completion.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.aliases.read().keys().cloned().collect();
        names.sort_unstable();
        names.push(ALL_LIGHTS.to_string());
        names
    }

    /// Returns the distinct identifiers of all known lights.
    ///
    /// A light that was re-labeled appears under several aliases but only
    /// once here. Order is unspecified.
    #[must_use]
    pub fn ids(&self) -> Vec<LightId> {
        let aliases = self.aliases.read();
        let mut ids: Vec<LightId> = aliases.values().cloned().collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Returns the alias key currently mapped to `id`, if any.
    ///
    /// When a light has several aliases the lexicographically first one
    /// is returned.
    #[must_use]
    pub fn label_for(&self, id: &LightId) -> Option<String> {
        let aliases = self.aliases.read();
        let mut keys: Vec<&String> = aliases
            .iter()
            .filter_map(|(key, mapped)| (mapped == id).then_some(key))
            .collect();
        keys.sort_unstable();
        keys.first().map(|k| (*k).clone())
    }

    /// Returns the number of registered aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.read().len()
    }

    /// Returns `true` if no alias is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(serial: &str) -> LightId {
        LightId::new(serial)
    }

    #[test]
    fn key_normalization_is_idempotent() {
        let key = AliasRegistry::key_for("Kitchen Table Lamp");
        assert_eq!(key, "kitchen-table-lamp");
        assert_eq!(AliasRegistry::key_for(&key), key);
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let registry = AliasRegistry::new();
        registry.register(&id("d073d5000001"), "Kitchen");

        for variant in ["kitchen", "KITCHEN", "KiTcHeN"] {
            assert_eq!(registry.resolve(variant), Some(id("d073d5000001")));
        }
    }

    #[test]
    fn resolve_matches_spaces_and_hyphens() {
        let registry = AliasRegistry::new();
        registry.register(&id("d073d5000001"), "Desk Lamp");

        assert_eq!(registry.resolve("desk lamp"), Some(id("d073d5000001")));
        assert_eq!(registry.resolve("desk-lamp"), Some(id("d073d5000001")));
    }

    #[test]
    fn resolve_passes_raw_identifier_through() {
        let registry = AliasRegistry::new();
        registry.register(&id("d073d5000001"), "Kitchen");

        assert_eq!(
            registry.resolve("d073d5000001"),
            Some(id("d073d5000001"))
        );
    }

    #[test]
    fn resolve_unknown_returns_none_without_mutation() {
        let registry = AliasRegistry::new();
        registry.register(&id("d073d5000001"), "Kitchen");

        assert_eq!(registry.resolve("bedroom"), None);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["kitchen", "all"]);
    }

    #[test]
    fn register_empty_is_a_noop() {
        let registry = AliasRegistry::new();

        registry.register(&id(""), "Kitchen");
        registry.register(&id("d073d5000001"), "");

        assert!(registry.is_empty());
    }

    #[test]
    fn resolve_empty_returns_none() {
        let registry = AliasRegistry::new();
        assert_eq!(registry.resolve(""), None);
    }

    #[test]
    fn names_sorted_with_all_sentinel_last() {
        let registry = AliasRegistry::new();
        registry.register(&id("d073d5000002"), "Zebra");
        registry.register(&id("d073d5000001"), "Bedroom");

        assert_eq!(registry.names(), vec!["bedroom", "zebra", "all"]);
    }

    #[test]
    fn names_never_contains_duplicates() {
        let registry = AliasRegistry::new();
        registry.register(&id("d073d5000001"), "Kitchen");
        registry.register(&id("d073d5000001"), "kitchen");

        assert_eq!(registry.names(), vec!["kitchen", "all"]);
    }

    #[test]
    fn all_is_never_stored_as_alias() {
        let registry = AliasRegistry::new();
        assert_eq!(registry.resolve(ALL_LIGHTS), None);
        assert!(registry.is_empty());

        // A light labeled "All" must not shadow the reserved name
        registry.register(&id("d073d5000001"), "All");
        assert!(registry.is_empty());
    }

    #[test]
    fn last_registration_wins_per_name() {
        let registry = AliasRegistry::new();
        registry.register(&id("d073d5000001"), "Lamp");
        registry.register(&id("d073d5000002"), "Lamp");

        assert_eq!(registry.resolve("lamp"), Some(id("d073d5000002")));
    }

    #[test]
    fn relabeling_keeps_old_alias_resolvable() {
        let registry = AliasRegistry::new();
        registry.register(&id("d073d5000001"), "Lamp");
        registry.register(&id("d073d5000001"), "Reading Light");

        // Both labels resolve; nothing compacts the defunct alias
        assert_eq!(registry.resolve("lamp"), Some(id("d073d5000001")));
        assert_eq!(registry.resolve("reading light"), Some(id("d073d5000001")));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn ids_are_distinct() {
        let registry = AliasRegistry::new();
        registry.register(&id("d073d5000001"), "Lamp");
        registry.register(&id("d073d5000001"), "Reading Light");
        registry.register(&id("d073d5000002"), "Kitchen");

        let ids = registry.ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&id("d073d5000001")));
        assert!(ids.contains(&id("d073d5000002")));
    }

    #[test]
    fn label_for_reverse_lookup() {
        let registry = AliasRegistry::new();
        registry.register(&id("d073d5000001"), "Kitchen");

        assert_eq!(
            registry.label_for(&id("d073d5000001")),
            Some("kitchen".to_string())
        );
        assert_eq!(registry.label_for(&id("d073d5000099")), None);
    }
}
