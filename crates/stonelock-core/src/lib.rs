//! Core data structures for the stone alignment puzzle.
//!
//! This crate provides the building blocks shared by puzzle evaluation and any
//! front end: the named positions around a disc, the stone types, the symbols
//! mounted on a disc ring, and the [`Disc`] itself with its rotation arithmetic.
//!
//! # Overview
//!
//! 1. **Positions** - [`position`]: the six named slots around a disc
//!    (`above`, `right`, `front`, `below`, `left`, `behind`) and their indices.
//! 2. **Stones** - [`stone`]: the three disc kinds, foundation first.
//! 3. **Symbols** - [`symbol`]: ring entries and the orientation clues that say
//!    where a symbol belongs.
//! 4. **Discs** - [`disc`]: a fixed ring plus a single rotation offset.
//!
//! # Examples
//!
//! ```
//! use stonelock_core::{Disc, StoneType, Symbol};
//!
//! let ring = ["sun", "moon", "star"].map(|id| Symbol::new(id, id.to_uppercase()));
//! let mut disc = Disc::new(StoneType::Cavernstone, ring.to_vec());
//!
//! assert_eq!(disc.current_symbol().map(|s| s.id.as_str()), Some("sun"));
//! disc.rotate(1);
//! assert_eq!(disc.current_symbol().map(|s| s.id.as_str()), Some("moon"));
//!
//! assert!(disc.set_symbol_to_position("star", 2));
//! assert_eq!(disc.symbol_position("star"), Some(2));
//! ```

pub mod disc;
pub mod position;
pub mod stone;
pub mod symbol;

pub use self::{
    disc::Disc,
    position::{InvalidPosition, InvalidPositionName, Position},
    stone::{StoneType, UnknownStoneType},
    symbol::{Clue, Symbol, SymbolId},
};
