//! Target symbols per stone.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use stonelock_core::{StoneType, SymbolId, UnknownStoneType};

/// Mapping from stone type to the symbol that stone must bring into place.
///
/// A solution is always replaced as a whole; build one with
/// [`FromIterator`], [`From`] an array of pairs, or by parsing
/// `stone=symbol` pairs.
///
/// # Examples
///
/// ```
/// use stonelock_core::StoneType;
/// use stonelock_puzzle::Solution;
///
/// let solution: Solution = "cavernstone=resonance_water, godstone=apsu".parse()?;
/// assert_eq!(solution.len(), 2);
/// assert_eq!(
///     solution.get(StoneType::Godstone).map(|id| id.as_str()),
///     Some("apsu")
/// );
/// assert_eq!(solution.to_string(), "cavernstone=resonance_water, godstone=apsu");
/// # Ok::<(), stonelock_puzzle::SolutionParseError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution(BTreeMap<StoneType, SymbolId>);

impl Solution {
    /// Creates an empty solution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the target symbol of `stone`.
    #[must_use]
    pub fn get(&self, stone: StoneType) -> Option<&SymbolId> {
        self.0.get(&stone)
    }

    /// Returns `true` if `stone` has a target symbol.
    #[must_use]
    pub fn contains(&self, stone: StoneType) -> bool {
        self.0.contains_key(&stone)
    }

    /// Iterates over `(stone, symbol)` pairs in stone-type order.
    pub fn iter(&self) -> impl Iterator<Item = (StoneType, &SymbolId)> {
        self.0.iter().map(|(stone, id)| (*stone, id))
    }

    /// Returns the number of stones with a target.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no stone has a target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(StoneType, SymbolId)> for Solution {
    fn from_iter<I: IntoIterator<Item = (StoneType, SymbolId)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(StoneType, &str); N]> for Solution {
    fn from(pairs: [(StoneType, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(stone, id)| (stone, SymbolId::from(id)))
            .collect()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (stone, id)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{stone}={id}")?;
        }
        Ok(())
    }
}

impl FromStr for Solution {
    type Err = SolutionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (stone, id) = entry
                    .split_once('=')
                    .ok_or_else(|| SolutionParseError::MissingSeparator {
                        entry: entry.to_owned(),
                    })?;
                let stone = stone.parse::<StoneType>()?;
                let id = id.trim();
                if id.is_empty() {
                    return Err(SolutionParseError::EmptySymbol { stone });
                }
                Ok((stone, SymbolId::from(id)))
            })
            .collect()
    }
}

/// Errors that can occur when parsing a [`Solution`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolutionParseError {
    /// An entry is not of the form `stone=symbol`.
    #[display("expected `stone=symbol`, got {entry:?}")]
    MissingSeparator {
        /// The offending entry.
        entry: String,
    },
    /// The stone name is not a known stone type.
    #[display("{_0}")]
    UnknownStone(UnknownStoneType),
    /// The symbol part is empty.
    #[display("missing symbol for {stone}")]
    EmptySymbol {
        /// Stone whose symbol is missing.
        stone: StoneType,
    },
}

impl From<UnknownStoneType> for SolutionParseError {
    fn from(err: UnknownStoneType) -> Self {
        Self::UnknownStone(err)
    }
}
