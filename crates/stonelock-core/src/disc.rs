//! Disc rotation and position arithmetic.
//!
//! A disc never stores a rotated copy of its ring. Every query derives from one
//! relation between the ring index `i` of a symbol, the rotation offset `r`,
//! and the slot `p` the symbol occupies:
//!
//! ```text
//! p = (i - r) mod n        i = (r + p) mod n        r = (i - p) mod n
//! ```
//!
//! where `n` is the ring size. Rotating by `n` therefore always restores the
//! original state.

use crate::{StoneType, Symbol};

/// A single rotating disc.
///
/// # Examples
///
/// ```
/// use stonelock_core::{Disc, StoneType, Symbol};
///
/// let ring = ["a", "b", "c", "d"].map(|id| Symbol::new(id, id)).to_vec();
/// let mut disc = Disc::new(StoneType::Godstone, ring);
///
/// disc.rotate(3);
/// assert_eq!(disc.rotation(), 3);
/// assert_eq!(disc.symbol_at_position(0).map(|s| s.id.as_str()), Some("d"));
/// assert_eq!(disc.symbol_position("a"), Some(1));
///
/// disc.rotate(-3);
/// assert_eq!(disc.rotation(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disc {
    stone_type: StoneType,
    symbols: Vec<Symbol>,
    rotation: usize,
}

impl Disc {
    /// Creates a disc at rotation 0.
    #[must_use]
    pub fn new(stone_type: StoneType, symbols: Vec<Symbol>) -> Self {
        Self {
            stone_type,
            symbols,
            rotation: 0,
        }
    }

    /// Returns the kind of this disc.
    #[must_use]
    pub fn stone_type(&self) -> StoneType {
        self.stone_type
    }

    /// Returns the ring in its fixed order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Returns the ring size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the ring has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the rotation offset, always in `0..len()`.
    #[must_use]
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Looks up a symbol on this ring by identifier.
    #[must_use]
    pub fn symbol(&self, id: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|symbol| symbol.id == *id)
    }

    fn ring_index(&self, id: &str) -> Option<usize> {
        self.symbols.iter().position(|symbol| symbol.id == *id)
    }

    /// Returns the symbol at position 0.
    ///
    /// Returns `None` only for an empty ring.
    #[must_use]
    pub fn current_symbol(&self) -> Option<&Symbol> {
        self.symbols.get(self.rotation)
    }

    /// Rotates the disc by `steps` positions; negative values turn it back.
    pub fn rotate(&mut self, steps: isize) {
        let n = self.len();
        if n == 0 {
            return;
        }
        #[expect(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
        let steps = steps.rem_euclid(n as isize) as usize;
        self.rotation = (self.rotation + steps) % n;
    }

    /// Turns the disc back to rotation 0.
    pub fn reset(&mut self) {
        self.rotation = 0;
    }

    /// Returns the position currently occupied by the symbol `id`.
    ///
    /// Returns `None` if the symbol is not on this ring.
    #[must_use]
    pub fn symbol_position(&self, id: &str) -> Option<usize> {
        let n = self.len();
        let index = self.ring_index(id)?;
        Some((index + n - self.rotation) % n)
    }

    /// Returns `true` if the symbol `id` currently sits at `position`.
    #[must_use]
    pub fn is_symbol_at_position(&self, id: &str, position: usize) -> bool {
        self.symbol_position(id) == Some(position)
    }

    /// Returns the symbol currently sitting at `position`.
    ///
    /// Positions wrap around the ring. Returns `None` only for an empty ring.
    #[must_use]
    pub fn symbol_at_position(&self, position: usize) -> Option<&Symbol> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        self.symbols.get((self.rotation + position % n) % n)
    }

    /// Returns the rotation offset that would put the symbol `id` at `position`,
    /// without applying it.
    #[must_use]
    pub fn rotation_for_position(&self, id: &str, position: usize) -> Option<usize> {
        let n = self.len();
        let index = self.ring_index(id)?;
        Some((index + n - position % n) % n)
    }

    /// Rotates the disc so that the symbol `id` sits exactly at `position`.
    ///
    /// Returns `false` and leaves the disc untouched if the symbol is not on
    /// this ring.
    pub fn set_symbol_to_position(&mut self, id: &str, position: usize) -> bool {
        let Some(rotation) = self.rotation_for_position(id, position) else {
            return false;
        };
        self.rotation = rotation;
        true
    }
}
