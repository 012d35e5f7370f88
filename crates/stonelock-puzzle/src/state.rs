//! Read-only snapshots of a puzzle for display.

use std::fmt;

use serde::Serialize;
use stonelock_core::{StoneType, SymbolId};

use crate::Solution;

/// Snapshot of one disc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscState {
    /// Kind of the disc.
    pub stone_type: StoneType,
    /// Rotation offset.
    pub rotation: usize,
    /// Identifier of the symbol at position 0.
    pub current_symbol: Option<SymbolId>,
    /// Label of the symbol at position 0.
    pub current_label: Option<String>,
}

/// Snapshot of a whole puzzle, as returned by
/// [`StonePuzzle::state`](crate::StonePuzzle::state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleState {
    /// Discs in chain order.
    pub discs: Vec<DiscState>,
    /// Whether every target is in place.
    pub is_solved: bool,
    /// The target symbols.
    pub solution: Solution,
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for disc in &self.discs {
            let label = disc.current_label.as_deref().unwrap_or("Unknown");
            write!(f, "{}: {label} (rotation {})", disc.stone_type, disc.rotation)?;
            f.write_str("; ")?;
        }
        let status = if self.is_solved { "solved" } else { "unsolved" };
        write!(f, "{status}")
    }
}
