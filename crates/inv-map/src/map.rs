//! The city mapping and its graph-level operations.

use rustc_hash::{FxHashMap, FxHashSet};

use inv_core::SimRng;

use crate::{City, MapError, MapResult};

/// Mapping from city name to [`City`].
///
/// Backed by an `FxHashMap` — city names are short strings on a hot path,
/// and FxHash has no per-process random state, so iteration order (and with
/// it uniform key sampling) is reproducible for a fixed input map and seed.
#[derive(Clone, Debug, Default)]
pub struct CityMap {
    cities: FxHashMap<String, City>,
}

impl CityMap {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Map surface ───────────────────────────────────────────────────────

    /// Insert a city under its own name.  A duplicate name replaces the
    /// earlier city (last map line wins, as in the original format).
    pub fn insert(&mut self, city: City) {
        self.cities.insert(city.name.clone(), city);
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut City> {
        self.cities.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    /// Delete the named city.  Removing a name that is already gone is a
    /// silent no-op — the engine never does it, but it must not panic.
    pub fn remove(&mut self, name: &str) {
        self.cities.remove(name);
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    // ── Graph operations ──────────────────────────────────────────────────

    /// Uniformly chosen city name, for initial alien placement.
    ///
    /// An empty map is a guarded invariant violation: it cannot occur given
    /// a non-empty loaded map (cities only disappear by destruction, which
    /// requires occupants), but sampling must not panic on it.
    pub fn random_city_name(&self, rng: &mut SimRng) -> MapResult<String> {
        if self.cities.is_empty() {
            return Err(MapError::EmptyMap);
        }
        let names: Vec<&String> = self.cities.keys().collect();
        Ok(names[rng.index(names.len())].clone())
    }

    /// Drop every link whose destination is no longer in the map,
    /// preserving the relative order of the survivors.
    ///
    /// Occupant state is not consulted.  Idempotent; called once after the
    /// simulation ends so the reported map carries no stale edges.
    pub fn prune_dangling_links(&mut self) {
        let live: FxHashSet<String> = self.cities.keys().cloned().collect();
        for city in self.cities.values_mut() {
            city.links.retain(|link| live.contains(&link.to));
        }
    }
}
