//! `inv-sim` — round loop and movement engine for the alien-invasion
//! simulator.
//!
//! # Round loop
//!
//! ```text
//! for round in 0..MAX_ROUNDS:
//!   ① Advance  — every tracked alien takes one step, in ascending id order:
//!                  unplaced  → drop into a uniformly random city
//!                  dead      → inert
//!                  stranded  → stay put
//!                  otherwise → hop along a random surviving link
//!                Two aliens meeting in one city destroy the city and both
//!                aliens (observer::on_destruction fires).
//!   ② Compact  — newly-dead aliens leave the tracked list (their terminal
//!                state stays queryable); stop early once nobody is left.
//! then: prune dangling links once, for clean reporting.
//! ```
//!
//! All processing is strictly sequential — the fixed order decides which
//! alien is recorded as a collision's mover.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use inv_map::parse_map_file;
//! use inv_sim::{Invasion, InvasionConfig, NoopObserver};
//!
//! let map = parse_map_file(Path::new("cities.txt"))?;
//! let mut sim = Invasion::new(map, InvasionConfig { population: 3, seed: 42 });
//! sim.run(&mut NoopObserver)?;
//! println!("{}", sim.report());
//! ```

pub mod alien;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use alien::{Alien, AlienStore};
pub use config::InvasionConfig;
pub use error::{SimError, SimResult};
pub use observer::{Destruction, InvasionObserver, NoopObserver};
pub use sim::{Invasion, MAX_ROUNDS};
