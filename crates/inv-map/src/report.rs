//! Final-state snapshot of the surviving map.
//!
//! The simulation itself guarantees no city ordering; the report sorts by
//! name so that output is diffable across runs and platforms.

use std::fmt;

use crate::{CityMap, Link};

/// One surviving city with its surviving outbound links.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityReport {
    pub name:  String,
    pub links: Vec<Link>,
}

/// Snapshot of every surviving city, sorted by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapReport {
    pub cities: Vec<CityReport>,
}

impl MapReport {
    /// Snapshot `map` as it stands.  Call after
    /// [`CityMap::prune_dangling_links`] if stale edges should be absent.
    pub fn from_map(map: &CityMap) -> Self {
        let mut cities: Vec<CityReport> = map
            .iter()
            .map(|c| CityReport { name: c.name.clone(), links: c.links.clone() })
            .collect();
        cities.sort_by(|a, b| a.name.cmp(&b.name));
        Self { cities }
    }
}

impl fmt::Display for MapReport {
    /// One map-format line per city: `Name north=Bar east=Baz`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in &self.cities {
            f.write_str(&city.name)?;
            for link in &city.links {
                write!(f, " {link}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
