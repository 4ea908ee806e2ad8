//! The `Invasion` driver and its movement engine.

use inv_core::{AlienId, SimRng};
use inv_map::{CityMap, MapReport};

use crate::{AlienStore, Destruction, InvasionConfig, InvasionObserver, SimResult};

/// Safety ceiling on the number of rounds.
///
/// Guards against pathological non-termination (e.g. a lone survivor
/// walking a large connected map forever).  Not exposed as configuration.
pub const MAX_ROUNDS: u64 = 10_000;

// ── Invasion ──────────────────────────────────────────────────────────────────

/// The simulation driver.
///
/// Owns the map, the alien arena, and the injected RNG for the duration of
/// the run; the movement engine mutates the map in place, one alien at a
/// time.  Create with [`Invasion::new`], drive with [`run`](Self::run) (or
/// [`run_rounds`](Self::run_rounds) for incremental stepping), then read
/// the surviving map off `self.map` or via [`report`](Self::report).
pub struct Invasion {
    /// The city graph, mutated in place as cities are destroyed and links
    /// go stale.
    pub map: CityMap,

    /// Arena of all aliens.  Dead aliens stay here with terminal state.
    pub aliens: AlienStore,

    /// The single deterministic random source for the run.
    pub rng: SimRng,

    /// Ids still processed each round, in fixed population order.  Aliens
    /// leave this list (only) by dying; compacted after every round.
    tracked: Vec<AlienId>,

    rounds_run: u64,
}

impl Invasion {
    // ── Construction ──────────────────────────────────────────────────────

    pub fn new(map: CityMap, config: InvasionConfig) -> Self {
        let aliens = AlienStore::new(config.population);
        let tracked = aliens.ids().collect();
        Self {
            map,
            aliens,
            rng: SimRng::new(config.seed),
            tracked,
            rounds_run: 0,
        }
    }

    /// Rounds completed so far.
    pub fn rounds_run(&self) -> u64 {
        self.rounds_run
    }

    /// Name-sorted snapshot of the surviving map.
    pub fn report(&self) -> MapReport {
        MapReport::from_map(&self.map)
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until every alien is dead or [`MAX_ROUNDS`] is exhausted, then
    /// prune dangling links once so the surviving map reports cleanly.
    ///
    /// Calls observer hooks at round boundaries and on every destruction.
    pub fn run<O: InvasionObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.rounds_run < MAX_ROUNDS && !self.tracked.is_empty() {
            self.process_round(observer)?;
        }
        self.map.prune_dangling_links();
        observer.on_sim_end(self.rounds_run);
        Ok(())
    }

    /// Run exactly `n` rounds from the current position, without the final
    /// pruning pass.  Useful for tests and incremental stepping.
    pub fn run_rounds<O: InvasionObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_round(observer)?;
        }
        Ok(())
    }

    // ── Round processing ──────────────────────────────────────────────────

    fn process_round<O: InvasionObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let round = self.rounds_run;
        observer.on_round_start(round);

        // Strictly sequential, in fixed population order: this order decides
        // which alien is recorded as a collision's mover.  An alien killed
        // earlier in the same round still gets its (inert) step.
        let order: Vec<AlienId> = self.tracked.clone();
        for id in order {
            self.advance_one_step(id, observer)?;
        }

        // Newly-dead aliens leave the tracked list; relative order of the
        // survivors is preserved.
        let aliens = &self.aliens;
        self.tracked.retain(|&id| !aliens.get(id).dead);

        self.rounds_run += 1;
        observer.on_round_end(round, self.tracked.len());
        Ok(())
    }

    // ── Movement engine ───────────────────────────────────────────────────

    /// Advance one alien by one step: first placement, or a random hop
    /// along a surviving link, resolving collisions as a side effect.
    fn advance_one_step<O: InvasionObserver>(
        &mut self,
        id:       AlienId,
        observer: &mut O,
    ) -> SimResult<()> {
        let Some(origin) = self.aliens.get(id).location.clone() else {
            return self.first_placement(id, observer);
        };

        if self.aliens.get(id).dead {
            return Ok(()); // dead aliens are inert
        }

        // Pick a destination, lazily pruning links whose city turns out to
        // be gone ("road discovered to have been destroyed").
        let dest = loop {
            let (index, to) = {
                let Some(city) = self.map.get(&origin) else {
                    // A live alien's city is never destroyed under it; if the
                    // invariant were ever broken, staying put beats panicking.
                    return Ok(());
                };
                if city.is_stranding() {
                    return Ok(()); // stays put this round
                }
                let index = self.rng.index(city.links.len());
                (index, city.links[index].to.clone())
            };

            if self.map.contains(&to) {
                break to;
            }
            // Drop exactly the picked link; survivors keep their order.
            if let Some(city) = self.map.get_mut(&origin) {
                city.links.remove(index);
            }
        };

        // The mover vacates its origin whatever happens next, and its
        // location records the destination even if it dies there.
        self.aliens.get_mut(id).location = Some(dest.clone());

        match self.live_occupant(&dest) {
            Some(other) => self.destroy_city(&dest, id, other, observer),
            None => {
                if let Some(city) = self.map.get_mut(&dest) {
                    city.occupant = Some(id);
                }
            }
        }
        if let Some(city) = self.map.get_mut(&origin) {
            city.occupant = None;
        }
        Ok(())
    }

    /// First activation: drop the alien into a uniformly random city.
    ///
    /// Landing on a live occupant is an immediate collision with the new
    /// alien as the mover.  The chosen city is recorded as the alien's
    /// location either way.
    fn first_placement<O: InvasionObserver>(
        &mut self,
        id:       AlienId,
        observer: &mut O,
    ) -> SimResult<()> {
        let name = self.map.random_city_name(&mut self.rng)?;
        self.aliens.get_mut(id).location = Some(name.clone());

        match self.live_occupant(&name) {
            Some(other) => self.destroy_city(&name, id, other, observer),
            None => {
                if let Some(city) = self.map.get_mut(&name) {
                    city.occupant = Some(id);
                }
            }
        }
        Ok(())
    }

    /// The city's occupant, if present and still alive.
    fn live_occupant(&self, name: &str) -> Option<AlienId> {
        self.map
            .get(name)
            .and_then(|c| c.occupant)
            .filter(|&other| !self.aliens.get(other).dead)
    }

    /// The atomic destruction step: both aliens die, the city leaves the
    /// map, the event goes out.  Mover first, prior occupant second.
    fn destroy_city<O: InvasionObserver>(
        &mut self,
        name:     &str,
        mover:    AlienId,
        occupant: AlienId,
        observer: &mut O,
    ) {
        self.aliens.get_mut(mover).dead = true;
        self.aliens.get_mut(occupant).dead = true;
        self.map.remove(name);
        observer.on_destruction(&Destruction {
            city:     name.to_string(),
            mover,
            occupant,
        });
    }
}
