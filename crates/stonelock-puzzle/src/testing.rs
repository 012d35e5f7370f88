//! Test utilities for puzzle scenarios.
//!
//! This module provides [`PuzzleTester`], a fluent harness that drives a
//! [`StonePuzzle`] and asserts on its state.
//!
//! # Example
//!
//! ```
//! use stonelock_core::StoneType;
//! use stonelock_puzzle::testing::PuzzleTester;
//!
//! PuzzleTester::with_solution([
//!     (StoneType::Cavernstone, "resonance_water"),
//!     (StoneType::Godstone, "apsu"),
//! ])
//! .assert_unsolved()
//! .apply_solution()
//! .assert_solved()
//! .assert_symbol_at(StoneType::Cavernstone, 3, "resonance_water")
//! .rotate(StoneType::Godstone, 1)
//! .assert_unsolved();
//! ```

use std::sync::Arc;

use stonelock_core::StoneType;

use crate::{OrientationData, PuzzleFactory, PuzzleLevel, Solution, StonePuzzle};

/// A test harness for puzzle scenarios.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// Constructors panic if the bundled orientation document cannot be loaded.
/// Assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug, Clone)]
pub struct PuzzleTester {
    puzzle: StonePuzzle,
}

impl PuzzleTester {
    /// Wraps an existing puzzle.
    #[must_use]
    pub fn new(puzzle: StonePuzzle) -> Self {
        Self { puzzle }
    }

    /// Creates a preset puzzle whose random solution is drawn from `seed`.
    #[must_use]
    #[track_caller]
    pub fn preset(level: PuzzleLevel, seed: u64) -> Self {
        let factory = PuzzleFactory::embedded().unwrap().with_seed(seed);
        Self::new(factory.create_puzzle(level))
    }

    /// Creates a puzzle with the given stones installed in order and the
    /// given solution.
    #[must_use]
    #[track_caller]
    pub fn with_solution<const N: usize>(pairs: [(StoneType, &str); N]) -> Self {
        let stones = pairs.map(|(stone, _)| stone);
        let factory = PuzzleFactory::new(Arc::new(OrientationData::embedded().unwrap()));
        Self::new(factory.create_custom_puzzle(&stones, Some(Solution::from(pairs))))
    }

    /// Returns the puzzle under test.
    #[must_use]
    pub fn puzzle(&self) -> &StonePuzzle {
        &self.puzzle
    }

    /// Consumes the tester and returns the puzzle.
    #[must_use]
    pub fn into_puzzle(self) -> StonePuzzle {
        self.puzzle
    }

    /// Rotates the disc of `stone` by `steps`.
    ///
    /// # Panics
    ///
    /// Panics if the puzzle has no such disc.
    #[must_use]
    #[track_caller]
    pub fn rotate(mut self, stone: StoneType, steps: isize) -> Self {
        self.puzzle
            .disc_mut(stone)
            .unwrap_or_else(|| panic!("Expected a {stone} disc"))
            .rotate(steps);
        self
    }

    /// Places the symbol `id` of `stone` at `position`.
    ///
    /// # Panics
    ///
    /// Panics if the puzzle has no such disc or the symbol is unknown.
    #[must_use]
    #[track_caller]
    pub fn place(mut self, stone: StoneType, id: &str, position: usize) -> Self {
        let placed = self
            .puzzle
            .disc_mut(stone)
            .unwrap_or_else(|| panic!("Expected a {stone} disc"))
            .set_symbol_to_position(id, position);
        assert!(placed, "Expected {id} to be a symbol of {stone}");
        self
    }

    /// Applies the solution to every disc.
    #[must_use]
    pub fn apply_solution(mut self) -> Self {
        self.puzzle.apply_solution();
        self
    }

    /// Turns every disc back to rotation 0.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.puzzle.reset();
        self
    }

    /// Asserts that the puzzle is solved.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        assert!(
            self.puzzle.is_solved(),
            "Expected the puzzle to be solved, state: {}, solution: {}",
            self.puzzle.state(),
            self.puzzle.solution()
        );
        self
    }

    /// Asserts that the puzzle is not solved.
    #[track_caller]
    pub fn assert_unsolved(self) -> Self {
        assert!(
            !self.puzzle.is_solved(),
            "Expected the puzzle to be unsolved, state: {}, solution: {}",
            self.puzzle.state(),
            self.puzzle.solution()
        );
        self
    }

    /// Asserts that the disc of `stone` shows `id` at `position`.
    #[track_caller]
    pub fn assert_symbol_at(self, stone: StoneType, position: usize, id: &str) -> Self {
        let actual = self
            .puzzle
            .disc(stone)
            .and_then(|disc| disc.symbol_at_position(position))
            .map(|symbol| symbol.id.as_str());
        assert_eq!(
            actual,
            Some(id),
            "Expected {id} at position {position} of {stone}"
        );
        self
    }

    /// Asserts that the puzzle has exactly `stones` installed, in order.
    #[track_caller]
    pub fn assert_stones(self, stones: &[StoneType]) -> Self {
        let actual = self
            .puzzle
            .discs()
            .iter()
            .map(stonelock_core::Disc::stone_type)
            .collect::<Vec<_>>();
        assert_eq!(actual, stones, "Expected discs {stones:?}");
        self
    }

    /// Asserts that every target resolves to a slot.
    #[track_caller]
    pub fn assert_targets_resolve(self) -> Self {
        for (stone, id) in self.puzzle.solution().iter() {
            assert!(
                self.puzzle.effective_target_position(stone).is_some(),
                "Expected the target {id} of {stone} to resolve, solution: {}",
                self.puzzle.solution()
            );
        }
        self
    }
}
