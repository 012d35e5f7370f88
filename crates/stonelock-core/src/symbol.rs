//! Ring symbols and their orientation clues.

use std::{borrow::Borrow, collections::BTreeSet};

use serde::{Deserialize, Serialize};

use crate::Position;

/// Identifier of a symbol, unique within its ring.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct SymbolId(String);

impl SymbolId {
    /// Creates a symbol identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SymbolId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl Borrow<str> for SymbolId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SymbolId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SymbolId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A hint telling where a symbol belongs.
///
/// `target_position` is expressed in the position space of the disc the clue
/// is read against: absolute for the foundation disc, the previous disc's ring
/// otherwise. `applies_to` lists the previous-disc symbols for which the clue
/// holds; it is empty for foundation clues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    /// Text shown to the player.
    pub clue: String,
    /// Free-text description of the situation the clue describes.
    pub solution: String,
    /// Slot the symbol must occupy when this clue holds.
    pub target_position: usize,
    /// Previous-disc symbols this clue applies to.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub applies_to: BTreeSet<SymbolId>,
}

impl Clue {
    /// Returns `true` if this clue holds when the previous disc targets `previous`.
    #[must_use]
    pub fn applies_to(&self, previous: &str) -> bool {
        self.applies_to.contains(previous)
    }
}

/// A symbol mounted on a disc ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Identifier, unique within the ring.
    pub id: SymbolId,
    /// Human-readable name.
    pub label: String,
    /// Clues for this symbol; index 0 is authoritative on a foundation disc.
    #[serde(default)]
    pub orientations: Vec<Clue>,
    /// Designated slot, used on the foundation disc.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Foundation symbols this symbol resonates with.
    #[serde(
        default,
        alias = "alignsWithResonance",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub aligns_with_resonance: Vec<SymbolId>,
}

impl Symbol {
    /// Creates a symbol without clues.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: SymbolId::new(id),
            label: label.into(),
            orientations: Vec::new(),
            position: None,
            aligns_with_resonance: Vec::new(),
        }
    }

    /// Adds a clue and returns self for chaining.
    #[must_use]
    pub fn with_clue(mut self, clue: Clue) -> Self {
        self.orientations.push(clue);
        self
    }

    /// Sets the designated position and returns self for chaining.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Returns the absolute slot this symbol takes on a foundation disc.
    ///
    /// The first clue's `target_position` wins; the designated `position` is
    /// used only when the symbol carries no clues.
    #[must_use]
    pub fn foundation_target(&self) -> Option<usize> {
        self.orientations
            .first()
            .map(|clue| clue.target_position)
            .or_else(|| self.position.map(Position::index))
    }

    /// Returns `true` if this symbol may align with the foundation resonance
    /// `resonance`.
    ///
    /// A symbol without `aligns_with_resonance` entries accepts every
    /// resonance.
    #[must_use]
    pub fn resonates_with(&self, resonance: &str) -> bool {
        self.aligns_with_resonance.is_empty()
            || self.aligns_with_resonance.iter().any(|id| id == resonance)
    }

    /// Returns the clues that hold when the previous disc targets `previous`.
    pub fn clues_for<'a>(&'a self, previous: &'a str) -> impl Iterator<Item = &'a Clue> + 'a {
        self.orientations
            .iter()
            .filter(move |clue| clue.applies_to(previous))
    }
}
