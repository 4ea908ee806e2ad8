//! Deterministic simulation RNG.
//!
//! All randomness in the engine flows through a single injected `SimRng`
//! seeded from an explicit `u64`.  The engine never touches the wall clock:
//! the same seed over the same map and population reproduces the identical
//! sequence of placements, moves, and destruction events, which is what the
//! scenario tests rely on.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// The engine is single-threaded and strictly sequential, so one stream is
/// enough; there is no per-alien RNG state.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform index into a collection of `len` elements.
    ///
    /// # Panics
    /// Panics if `len == 0` — callers guard emptiness first (the map layer
    /// turns an empty map into an error before ever sampling).
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
