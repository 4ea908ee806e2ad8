//! Strongly typed alien identifier.
//!
//! Identifiers are assigned densely from `0..population` at simulation start
//! and never change for the lifetime of a run, so an `AlienId` doubles as a
//! direct index into the alien arena (`id.index()`).

use std::fmt;

/// Identity of one alien, stable for the whole run.
///
/// `Copy + Ord + Hash` so it can be used as a map key and sorted without
/// ceremony.  The inner integer is `pub` for direct arena indexing, but
/// callers should prefer [`AlienId::index`] for clarity.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct AlienId(pub u32);

impl AlienId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AlienId {
    /// Bare number — ids appear verbatim in destruction report lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AlienId> for usize {
    #[inline(always)]
    fn from(id: AlienId) -> usize {
        id.0 as usize
    }
}
