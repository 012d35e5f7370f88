//! Preset puzzle construction.

use std::{path::Path, sync::Arc};

use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use stonelock_core::StoneType;

use crate::{LoadError, OrientationData, Solution, StonePuzzle, SymbolSource};

/// Preset disc sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PuzzleLevel {
    /// Cavernstone only.
    #[display("basic")]
    Basic,
    /// Cavernstone and godstone.
    #[display("intermediate")]
    Intermediate,
    /// All three stones.
    #[display("full")]
    Full,
}

impl PuzzleLevel {
    /// Returns the stones of this preset in chain order.
    #[must_use]
    pub fn stones(self) -> &'static [StoneType] {
        match self {
            Self::Basic => &[StoneType::Cavernstone],
            Self::Intermediate => &[StoneType::Cavernstone, StoneType::Godstone],
            Self::Full => &StoneType::ALL,
        }
    }
}

/// Builds puzzles that share one orientation document.
///
/// Without a seed, random solutions come from the thread-local generator. With
/// [`with_seed`](Self::with_seed), every puzzle draws its solution from a fresh
/// PCG generator seeded with the same value, so a factory with a given seed
/// always produces the same puzzles.
///
/// # Example
///
/// ```
/// use stonelock_core::StoneType;
/// use stonelock_puzzle::PuzzleFactory;
///
/// let factory = PuzzleFactory::embedded()?.with_seed(7);
/// let mut puzzle = factory.create_full_puzzle();
/// assert_eq!(puzzle.discs().len(), 3);
/// assert_eq!(puzzle.solution(), factory.create_full_puzzle().solution());
///
/// puzzle.apply_solution();
/// assert!(puzzle.is_solved());
/// # Ok::<(), stonelock_puzzle::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleFactory {
    source: Arc<dyn SymbolSource>,
    seed: Option<u64>,
}

impl PuzzleFactory {
    /// Creates a factory that loads rings from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn SymbolSource>) -> Self {
        Self { source, seed: None }
    }

    /// Creates a factory backed by the bundled orientation document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled document cannot be parsed.
    pub fn embedded() -> Result<Self, LoadError> {
        Ok(Self::new(Arc::new(OrientationData::embedded()?)))
    }

    /// Creates a factory backed by the orientation document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Ok(Self::new(Arc::new(OrientationData::from_path(path)?)))
    }

    /// Makes random solutions reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Creates a single-disc puzzle (cavernstone) with a random solution.
    #[must_use]
    pub fn create_basic_puzzle(&self) -> StonePuzzle {
        self.create_puzzle(PuzzleLevel::Basic)
    }

    /// Creates a two-disc puzzle (cavernstone, godstone) with a random solution.
    #[must_use]
    pub fn create_intermediate_puzzle(&self) -> StonePuzzle {
        self.create_puzzle(PuzzleLevel::Intermediate)
    }

    /// Creates a three-disc puzzle with a random solution.
    #[must_use]
    pub fn create_full_puzzle(&self) -> StonePuzzle {
        self.create_puzzle(PuzzleLevel::Full)
    }

    /// Creates the puzzle of a preset level with a random solution.
    #[must_use]
    pub fn create_puzzle(&self, level: PuzzleLevel) -> StonePuzzle {
        self.create_custom_puzzle(level.stones(), None)
    }

    /// Creates a puzzle with `stones` installed in order.
    ///
    /// The puzzle gets `solution` if one is supplied, a random one otherwise.
    #[must_use]
    pub fn create_custom_puzzle(
        &self,
        stones: &[StoneType],
        solution: Option<Solution>,
    ) -> StonePuzzle {
        let mut puzzle = StonePuzzle::new(Arc::clone(&self.source));
        for stone in stones {
            puzzle.add_disc(*stone);
        }

        match (solution, self.seed) {
            (Some(solution), _) => puzzle.set_solution(solution),
            (None, Some(seed)) => {
                puzzle.generate_random_solution_with_rng(&mut Pcg64Mcg::seed_from_u64(seed));
            }
            (None, None) => puzzle.generate_random_solution(),
        }
        puzzle
    }
}

#[cfg(test)]
mod tests {
    use stonelock_core::Disc;

    use super::*;

    fn stones(puzzle: &StonePuzzle) -> Vec<StoneType> {
        puzzle.discs().iter().map(Disc::stone_type).collect()
    }

    #[test]
    fn test_presets() {
        let factory = PuzzleFactory::embedded().unwrap();
        for _ in 0..20 {
            let basic = factory.create_basic_puzzle();
            assert_eq!(stones(&basic), [StoneType::Cavernstone]);
            assert_eq!(basic.solution().len(), 1);

            let intermediate = factory.create_intermediate_puzzle();
            assert_eq!(
                stones(&intermediate),
                [StoneType::Cavernstone, StoneType::Godstone]
            );
            assert_eq!(intermediate.solution().len(), 2);

            let full = factory.create_full_puzzle();
            assert_eq!(stones(&full), StoneType::ALL);
            assert_eq!(full.solution().len(), 3);
        }
    }

    #[test]
    fn test_custom_puzzle_keeps_supplied_solution() {
        let factory = PuzzleFactory::embedded().unwrap().with_seed(5);
        let solution = Solution::from([
            (StoneType::Cavernstone, "resonance_thunder"),
            (StoneType::Worldstone, "blighted_wastes"),
        ]);
        let puzzle = factory.create_custom_puzzle(
            &[StoneType::Cavernstone, StoneType::Worldstone],
            Some(solution.clone()),
        );
        assert_eq!(
            stones(&puzzle),
            [StoneType::Cavernstone, StoneType::Worldstone]
        );
        assert_eq!(puzzle.solution(), &solution);
    }

    #[test]
    fn test_seeded_factory_is_reproducible() {
        let factory = PuzzleFactory::embedded().unwrap().with_seed(99);
        assert_eq!(factory.seed(), Some(99));
        let first = factory.create_full_puzzle();
        for _ in 0..5 {
            assert_eq!(factory.create_full_puzzle().solution(), first.solution());
        }
    }

    #[test]
    fn test_level_stones() {
        assert_eq!(PuzzleLevel::Basic.stones().len(), 1);
        assert_eq!(PuzzleLevel::Intermediate.stones().len(), 2);
        assert_eq!(PuzzleLevel::Full.stones(), StoneType::ALL);
        assert_eq!(PuzzleLevel::Full.to_string(), "full");
    }
}
