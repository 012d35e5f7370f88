//! Stone (disc) kinds.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of a disc.
///
/// The declaration order is the canonical chain order: the cavernstone is the
/// foundation, the godstone is read against it, and the worldstone is read
/// against the godstone.
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
pub enum StoneType {
    /// The foundation disc, whose target positions are absolute.
    #[display("cavernstone")]
    Cavernstone,
    /// The secondary disc.
    #[display("godstone")]
    Godstone,
    /// The tertiary disc.
    #[display("worldstone")]
    Worldstone,
}

impl StoneType {
    /// All stone types in chain order.
    pub const ALL: [Self; 3] = [Self::Cavernstone, Self::Godstone, Self::Worldstone];

    /// Returns the lowercase name used in configuration documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cavernstone => "cavernstone",
            Self::Godstone => "godstone",
            Self::Worldstone => "worldstone",
        }
    }
}

impl FromStr for StoneType {
    type Err = UnknownStoneType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stone| stone.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStoneType { name: s.to_owned() })
    }
}

/// A stone name that does not match any [`StoneType`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown stone type: {name:?}")]
pub struct UnknownStoneType {
    /// The rejected name.
    pub name: String,
}
