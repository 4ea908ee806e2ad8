//! `inv-map` — the city graph and its text-map loader.
//!
//! # Crate layout
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`direction`] | `Direction` (the four cardinal symbols)           |
//! | [`city`]      | `Link`, `City`                                    |
//! | [`map`]       | `CityMap` (name → city mapping, pruning, sampling)|
//! | [`loader`]    | `parse_map_file` / `parse_map_reader`             |
//! | [`report`]    | `MapReport` (final-state snapshot)                |
//! | [`error`]     | `MapError`, `MapResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `Direction`, `Link`, and  |
//! |         | the report types.                                           |

pub mod city;
pub mod direction;
pub mod error;
pub mod loader;
pub mod map;
pub mod report;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use city::{City, Link};
pub use direction::Direction;
pub use error::{MapError, MapResult};
pub use loader::{parse_map_file, parse_map_reader};
pub use map::CityMap;
pub use report::{CityReport, MapReport};
