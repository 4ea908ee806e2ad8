//! Cities and their outbound links.

use std::fmt;

use inv_core::AlienId;

use crate::Direction;

// ── Link ──────────────────────────────────────────────────────────────────────

/// A directed, labeled edge from one city to another **by name**.
///
/// The destination may name a city that no longer exists — links go stale
/// when their destination is destroyed, and stale links are pruned lazily
/// (or in one final sweep), never treated as corruption.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub direction: Direction,
    pub to:        String,
}

impl Link {
    pub fn new(direction: Direction, to: impl Into<String>) -> Self {
        Self { direction, to: to.into() }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.direction, self.to)
    }
}

// ── City ──────────────────────────────────────────────────────────────────────

/// A named node in the map.
///
/// Fields are `pub` for direct mutation by the movement engine.  The
/// occupant is an [`AlienId`], never a reference: whether that alien is
/// alive is answered by the alien arena, so a stale id can never dangle.
///
/// Invariant: at most one occupant at any time, and (outside the atomic
/// destruction step) the occupant's recorded location equals this city's
/// name.
#[derive(Clone, Debug)]
pub struct City {
    pub name:     String,
    /// Outbound links in map-file order.  Pruning preserves relative order.
    pub links:    Vec<Link>,
    pub occupant: Option<AlienId>,
}

impl City {
    pub fn new(name: impl Into<String>, links: Vec<Link>) -> Self {
        Self { name: name.into(), links, occupant: None }
    }

    /// `true` once every outbound link has been pruned — any resident alien
    /// is permanently immobile.
    pub fn is_stranding(&self) -> bool {
        self.links.is_empty()
    }
}

impl fmt::Display for City {
    /// Echoes the map-file line format: `Name north=Bar east=Baz`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for link in &self.links {
            write!(f, " {link}")?;
        }
        Ok(())
    }
}
