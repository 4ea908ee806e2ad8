//! Alien state and the arena that owns it.
//!
//! Aliens are created once at simulation start and never destroyed as
//! objects: a dead alien stays in the arena with its terminal state
//! queryable, it is merely dropped from future round processing.  Cities
//! refer to their occupant by [`AlienId`], so nothing outside the arena can
//! hold a stale alien reference.

use inv_core::AlienId;

// ── Alien ─────────────────────────────────────────────────────────────────────

/// One mobile invader.
///
/// State machine: unplaced (`location == None`) → alive → dead.  `dead` is
/// terminal; a dead alien's location is never updated again, but it keeps
/// the name of the last city it attempted, for bookkeeping.
#[derive(Clone, Debug)]
pub struct Alien {
    pub id:       AlienId,
    /// Name of the current city; `None` until first placement.  A lookup
    /// key into the map, not an ownership edge.
    pub location: Option<String>,
    pub dead:     bool,
}

// ── AlienStore ────────────────────────────────────────────────────────────────

/// Arena of all aliens, indexed by [`AlienId`].
///
/// `AlienId(i)` is always the element at index `i`; the population is fixed
/// for the run.
pub struct AlienStore {
    aliens: Vec<Alien>,
}

impl AlienStore {
    /// Create `population` aliens with ids `0..population`, all unplaced.
    pub fn new(population: usize) -> Self {
        let aliens = (0..population as u32)
            .map(|i| Alien { id: AlienId(i), location: None, dead: false })
            .collect();
        Self { aliens }
    }

    #[inline]
    pub fn get(&self, id: AlienId) -> &Alien {
        &self.aliens[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: AlienId) -> &mut Alien {
        &mut self.aliens[id.index()]
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    /// All ids in ascending order — the fixed processing order of a round.
    pub fn ids(&self) -> impl Iterator<Item = AlienId> + '_ {
        (0..self.aliens.len() as u32).map(AlienId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alien> {
        self.aliens.iter()
    }

    pub fn live_count(&self) -> usize {
        self.aliens.iter().filter(|a| !a.dead).count()
    }
}
