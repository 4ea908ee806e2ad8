//! Run configuration.

/// What the caller decides about a run.
///
/// The round ceiling is deliberately **not** here: it is a fixed safety
/// bound against pathological non-termination
/// ([`MAX_ROUNDS`][crate::MAX_ROUNDS]), not a tunable simulation parameter.
#[derive(Copy, Clone, Debug)]
pub struct InvasionConfig {
    /// Number of aliens unleashed on the map.  Zero is legal — the run ends
    /// before the first round.
    pub population: usize,

    /// Master RNG seed.  The same seed over the same map and population
    /// always reproduces the identical sequence of destruction events.
    pub seed: u64,
}
