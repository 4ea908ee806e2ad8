//! Observer trait for round progress and the destruction event stream.

use inv_core::AlienId;

// ── Destruction ───────────────────────────────────────────────────────────────

/// One city destruction: the only path by which a city disappears and the
/// only path by which an alien dies.
///
/// `mover` is the alien whose step triggered the collision, `occupant` the
/// alien that was already there.  The order is part of the observable
/// output and is never normalized — in a self-collision on a degenerate
/// self-link the two ids are equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destruction {
    pub city:     String,
    pub mover:    AlienId,
    pub occupant: AlienId,
}

// ── InvasionObserver ──────────────────────────────────────────────────────────

/// Callbacks invoked by [`Invasion::run`][crate::Invasion::run] at key
/// points in the round loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — destruction printer
///
/// ```rust,ignore
/// struct Reporter;
///
/// impl InvasionObserver for Reporter {
///     fn on_destruction(&mut self, d: &Destruction) {
///         println!("{} has been destroyed by alien {} and alien {}!",
///                  d.city, d.mover, d.occupant);
///     }
/// }
/// ```
pub trait InvasionObserver {
    /// Called at the start of each round, before any alien advances.
    fn on_round_start(&mut self, _round: u64) {}

    /// Called at the end of each round.  `live` is the number of aliens
    /// still tracked for the next round.
    fn on_round_end(&mut self, _round: u64, _live: usize) {}

    /// Called from inside the atomic destruction step, after both aliens
    /// are marked dead and the city is removed.
    fn on_destruction(&mut self, _event: &Destruction) {}

    /// Called once after the final round, before the caller inspects the
    /// surviving map.
    fn on_sim_end(&mut self, _rounds_run: u64) {}
}

/// An [`InvasionObserver`] that does nothing.  Use when you need to call
/// `run` but don't want callbacks.
pub struct NoopObserver;

impl InvasionObserver for NoopObserver {}
