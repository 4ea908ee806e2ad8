//! The four cardinal symbols a link may carry.
//!
//! Directions are informational only: the engine never steers by them, it
//! just echoes them back when the surviving map is reported.

use std::str::FromStr;

use crate::MapError;

/// Cardinal label on an outbound link.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// The lowercase token used in the map format.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::West  => "west",
            Direction::South => "south",
            Direction::East  => "east",
        }
    }
}

impl FromStr for Direction {
    type Err = MapError;

    /// Accepts exactly the lowercase map tokens; anything else is a parse
    /// error naming the offending token.
    fn from_str(s: &str) -> Result<Self, MapError> {
        match s {
            "north" => Ok(Direction::North),
            "west"  => Ok(Direction::West),
            "south" => Ok(Direction::South),
            "east"  => Ok(Direction::East),
            other   => Err(MapError::UnknownDirection { token: other.to_string() }),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
