//! Compass headings and their rotation/translation tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal headings.
///
/// Clockwise order is NORTH → EAST → SOUTH → WEST → NORTH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// Error returned when a string does not name a heading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown heading: {0:?}")]
pub struct ParseHeadingError(pub String);

impl Heading {
    /// All headings in clockwise order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Rotate 90 degrees counter-clockwise.
    pub fn rotate_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Rotate 90 degrees clockwise.
    pub fn rotate_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Unit step `(dx, dy)` for one forward move on this heading.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }

    /// Upper-case wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heading {
    type Err = ParseHeadingError;

    // Exact match only: "north" is not a heading.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heading::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| ParseHeadingError(s.to_string()))
    }
}
