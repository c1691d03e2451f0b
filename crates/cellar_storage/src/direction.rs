//! Cardinal directions.

use std::fmt;
use std::str::FromStr;

/// One of the four directions an exit can point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North (`n`).
    North,
    /// South (`s`).
    South,
    /// East (`e`).
    East,
    /// West (`w`).
    West,
}

impl Direction {
    /// All directions, in `n`, `s`, `e`, `w` order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Returns the one-letter command for this direction.
    #[must_use]
    pub const fn short(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
        }
    }

    /// Parses a one-letter direction command. Case-sensitive.
    #[must_use]
    pub fn from_short(s: &str) -> Option<Self> {
        match s {
            "n" => Some(Self::North),
            "s" => Some(Self::South),
            "e" => Some(Self::East),
            "w" => Some(Self::West),
            _ => None,
        }
    }

    /// Slot of this direction in a four-element exit table.
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::North => 0,
            Self::South => 1,
            Self::East => 2,
            Self::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        })
    }
}

/// Error returned when a string is not a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a direction: {:?}", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the one-letter form or the full lowercase name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_short(s)
            .or_else(|| Self::ALL.into_iter().find(|dir| dir.to_string() == s))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}
