//! The orientation document: symbol rings and clue data for every stone.
//!
//! The document is plain JSON with one entry per stone type plus informational
//! horn metadata:
//!
//! ```json
//! {
//!   "horn": { "description": "...", "sample_clues": ["..."] },
//!   "cavernstone": { "note": "...", "symbols": [ ... ] },
//!   "godstone": { "symbols": [ ... ] },
//!   "worldstone": { "symbols": [ ... ] }
//! }
//! ```
//!
//! A clue may list the previous-disc symbols it holds for in `applies_to`.
//! When it does not, the set is derived once while loading, from the clue's
//! free-text `solution` (see [`solution_mentions`]).

use std::{fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use stonelock_core::{Position, StoneType, Symbol, SymbolId};

/// Capability to look up the symbol ring of a stone type.
///
/// [`StonePuzzle`](crate::StonePuzzle) depends only on this trait, so rings can
/// come from an embedded document, a file, or a fixture built in a test.
pub trait SymbolSource: std::fmt::Debug + Send + Sync {
    /// Returns the ring for `stone`, or `None` if the source has no such stone.
    fn symbols(&self, stone: StoneType) -> Option<&[Symbol]>;
}

/// Informational metadata about the horn reference marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horn {
    /// Free-text description.
    pub description: String,
    /// Example clues referring to the horn.
    #[serde(default)]
    pub sample_clues: Vec<String>,
}

/// Ring definition for one stone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneData {
    /// Free-text note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// The ring, in order.
    pub symbols: Vec<Symbol>,
    /// Slots used by this stone, informational.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_positions: Vec<Position>,
}

/// The complete orientation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationData {
    /// Horn metadata.
    pub horn: Horn,
    /// Foundation stone.
    pub cavernstone: StoneData,
    /// Secondary stone.
    pub godstone: StoneData,
    /// Tertiary stone.
    pub worldstone: StoneData,
}

const EMBEDDED: &str = include_str!("../data/orientations.json");

impl OrientationData {
    /// Loads the document bundled with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if the bundled document is malformed.
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_json_str(EMBEDDED)
    }

    /// Loads a document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Parse`] if its contents are malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_owned(),
            source,
        })?;
        let data = Self::from_json_str(&text)?;
        log::debug!("loaded orientation data from {}", path.display());
        Ok(data)
    }

    /// Parses a document from JSON text and resolves clue contexts.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if the text is not a valid document.
    pub fn from_json_str(text: &str) -> Result<Self, LoadError> {
        let mut data: Self = serde_json::from_str(text).map_err(LoadError::Parse)?;
        data.resolve_clue_contexts();
        Ok(data)
    }

    /// Returns the ring definition of `stone`.
    #[must_use]
    pub fn stone(&self, stone: StoneType) -> &StoneData {
        match stone {
            StoneType::Cavernstone => &self.cavernstone,
            StoneType::Godstone => &self.godstone,
            StoneType::Worldstone => &self.worldstone,
        }
    }

    fn stone_mut(&mut self, stone: StoneType) -> &mut StoneData {
        match stone {
            StoneType::Cavernstone => &mut self.cavernstone,
            StoneType::Godstone => &mut self.godstone,
            StoneType::Worldstone => &mut self.worldstone,
        }
    }

    /// Fills `applies_to` for every clue that does not list it, using the
    /// symbols of the other stones as candidates.
    fn resolve_clue_contexts(&mut self) {
        for stone in StoneType::ALL {
            let candidates = StoneType::ALL
                .into_iter()
                .filter(|other| *other != stone)
                .flat_map(|other| self.stone(other).symbols.iter().map(|s| s.id.clone()))
                .collect::<Vec<SymbolId>>();

            for symbol in &mut self.stone_mut(stone).symbols {
                for clue in &mut symbol.orientations {
                    if !clue.applies_to.is_empty() {
                        continue;
                    }
                    clue.applies_to = candidates
                        .iter()
                        .filter(|id| solution_mentions(&clue.solution, id.as_str()))
                        .cloned()
                        .collect();
                    log::trace!(
                        "{stone} {}: clue {:?} applies to {:?}",
                        symbol.id,
                        clue.solution,
                        clue.applies_to
                    );
                }
            }
        }
    }
}

impl SymbolSource for OrientationData {
    fn symbols(&self, stone: StoneType) -> Option<&[Symbol]> {
        Some(&self.stone(stone).symbols)
    }
}

/// Returns `true` if a clue's `solution` text names the symbol `id`.
///
/// Both sides are lowercased and split into words on anything that is not
/// alphanumeric, so `first_ones` and "First Ones" are the same phrase. An id of
/// the form `resonance_<kind>` is named by `<kind>` alone. The phrase must
/// appear as whole words.
///
/// # Examples
///
/// ```
/// use stonelock_puzzle::orientation::solution_mentions;
///
/// assert!(solution_mentions("Desna aligned with the life resonance", "resonance_life"));
/// assert!(solution_mentions("Deep Springs beneath the First Ones", "first_ones"));
/// assert!(!solution_mentions("Deep Springs beneath Apsu", "desna"));
/// assert!(!solution_mentions("lifeless plains", "resonance_life"));
/// ```
#[must_use]
pub fn solution_mentions(solution: &str, id: &str) -> bool {
    let id = id.to_lowercase();
    let name = id.strip_prefix("resonance_").unwrap_or(&id);
    let needle = words(name);
    if needle.is_empty() {
        return false;
    }
    words(solution)
        .windows(needle.len())
        .any(|window| window == needle.as_slice())
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Errors that can occur when loading an orientation document.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The document could not be read.
    #[display("failed to read orientation data from {path:?}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The document is not valid JSON or does not match the schema.
    #[display("malformed orientation data: {_0}")]
    Parse(serde_json::Error),
}
