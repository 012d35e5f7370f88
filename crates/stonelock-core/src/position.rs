//! Named positions around a disc.
//!
//! A disc face is read against the horn marker. The six slots have fixed
//! indices, and every index-based query on a [`Disc`](crate::Disc) uses the
//! same numbering:
//!
//! | name     | index |
//! |----------|-------|
//! | `above`  | 0     |
//! | `right`  | 1     |
//! | `front`  | 2     |
//! | `below`  | 3     |
//! | `left`   | 4     |
//! | `behind` | 5     |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six named slots around a disc.
///
/// # Examples
///
/// ```
/// use stonelock_core::Position;
///
/// assert_eq!(Position::Below.index(), 3);
/// assert_eq!(Position::from_index(4), Ok(Position::Left));
/// assert!(Position::from_index(6).is_err());
///
/// let pos: Position = "behind".parse().unwrap();
/// assert_eq!(pos, Position::Behind);
/// assert_eq!(pos.to_string(), "behind");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Index 0, where the horn points.
    #[display("above")]
    Above,
    /// Index 1.
    #[display("right")]
    Right,
    /// Index 2.
    #[display("front")]
    Front,
    /// Index 3, opposite the horn.
    #[display("below")]
    Below,
    /// Index 4.
    #[display("left")]
    Left,
    /// Index 5.
    #[display("behind")]
    Behind,
}

impl Position {
    /// All positions in index order.
    pub const ALL: [Self; 6] = [
        Self::Above,
        Self::Right,
        Self::Front,
        Self::Below,
        Self::Left,
        Self::Behind,
    ];

    /// Number of named positions.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the index (0-5) of this position.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Above => 0,
            Self::Right => 1,
            Self::Front => 2,
            Self::Below => 3,
            Self::Left => 4,
            Self::Behind => 5,
        }
    }

    /// Returns the position with the given index.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `index` is not in `0..=5`.
    pub fn from_index(index: usize) -> Result<Self, InvalidPosition> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(InvalidPosition { index })
    }

    /// Returns the lowercase name of this position.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Above => "above",
            Self::Right => "right",
            Self::Front => "front",
            Self::Below => "below",
            Self::Left => "left",
            Self::Behind => "behind",
        }
    }

    /// Returns the names of all positions in index order.
    #[must_use]
    pub fn names() -> [&'static str; 6] {
        Self::ALL.map(Self::name)
    }
}

impl TryFrom<usize> for Position {
    type Error = InvalidPosition;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl From<Position> for usize {
    fn from(position: Position) -> usize {
        position.index()
    }
}

impl FromStr for Position {
    type Err = InvalidPositionName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pos| pos.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidPositionName { name: s.to_owned() })
    }
}

/// A position index outside the six named slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid position index: {index}")]
pub struct InvalidPosition {
    /// The rejected index.
    pub index: usize,
}

/// A position name that is not one of the six named slots.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid position name: {name:?}")]
pub struct InvalidPositionName {
    /// The rejected name.
    pub name: String,
}
