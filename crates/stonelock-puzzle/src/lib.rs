//! Stone alignment puzzle engine.
//!
//! A puzzle is a chain of up to three [`Disc`](stonelock_core::Disc)s and a
//! [`Solution`] naming the symbol each disc must bring into place. The first
//! disc's target slot is absolute; each later disc's slot depends on the
//! previous disc's target symbol, as described by the clues of the
//! [orientation document](orientation).
//!
//! # Overview
//!
//! - [`orientation`]: the configuration document and the [`SymbolSource`]
//!   capability the engine loads rings from.
//! - [`alignment`]: the cross-disc alignment rule.
//! - [`StonePuzzle`]: solution generation, solved checking, solution
//!   application, clue selection, and resonance alignment.
//! - [`PuzzleFactory`]: preset puzzles with one, two, or three discs.
//! - [`testing`]: a fluent assertion harness for puzzle scenarios.
//!
//! # Examples
//!
//! ```
//! use stonelock_core::StoneType;
//! use stonelock_puzzle::PuzzleFactory;
//!
//! let factory = PuzzleFactory::embedded()?;
//! let mut puzzle = factory.create_intermediate_puzzle();
//!
//! for clue in puzzle.clues_for_solution() {
//!     println!("{clue}");
//! }
//!
//! puzzle.disc_mut(StoneType::Godstone).unwrap().rotate(1);
//! puzzle.apply_solution();
//! assert!(puzzle.is_solved());
//! # Ok::<(), stonelock_puzzle::LoadError>(())
//! ```

pub use self::{
    factory::{PuzzleFactory, PuzzleLevel},
    orientation::{LoadError, OrientationData, SymbolSource},
    puzzle::StonePuzzle,
    solution::{Solution, SolutionParseError},
    state::{DiscState, PuzzleState},
};

pub mod alignment;
mod factory;
pub mod orientation;
mod puzzle;
mod solution;
mod state;
pub mod testing;
