//! `inv-core` — foundational types for the alien-invasion simulator.
//!
//! This crate is a dependency of every other `inv-*` crate.  It intentionally
//! has no `inv-*` dependencies and a single external one (`rand`).
//!
//! # What lives here
//!
//! | Module  | Contents                                  |
//! |---------|-------------------------------------------|
//! | [`ids`] | `AlienId`                                 |
//! | [`rng`] | `SimRng` (explicit-seed random source)    |

pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::AlienId;
pub use rng::SimRng;
