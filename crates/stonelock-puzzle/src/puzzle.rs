use std::sync::Arc;

use rand::{Rng, seq::IndexedRandom as _};
use stonelock_core::{Disc, StoneType};

use crate::{
    DiscState, LoadError, OrientationData, PuzzleState, Solution, SymbolSource, alignment,
};

/// A stone alignment puzzle: a chain of discs and the symbols they must show.
///
/// Discs are kept in installation order; the first installed disc is the
/// foundation, and every later disc is read against the one before it (see
/// [`alignment`](crate::alignment)). Whether the puzzle is solved is recomputed
/// from the discs on every query.
///
/// Lookups never fail loudly: a missing disc, an unknown symbol, or a clue
/// that does not apply simply means the condition is not met.
///
/// # Example
///
/// ```
/// use stonelock_core::StoneType;
/// use stonelock_puzzle::{Solution, StonePuzzle};
///
/// let mut puzzle = StonePuzzle::embedded()?;
/// puzzle.add_disc(StoneType::Cavernstone);
/// puzzle.add_disc(StoneType::Godstone);
/// puzzle.set_solution(Solution::from([
///     (StoneType::Cavernstone, "resonance_water"),
///     (StoneType::Godstone, "desna"),
/// ]));
///
/// assert!(!puzzle.is_solved());
/// puzzle.apply_solution();
/// assert!(puzzle.is_solved());
///
/// // Water sits below the horn.
/// let cavernstone = puzzle.disc(StoneType::Cavernstone).unwrap();
/// assert_eq!(cavernstone.symbol_position("resonance_water"), Some(3));
/// # Ok::<(), stonelock_puzzle::LoadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StonePuzzle {
    source: Arc<dyn SymbolSource>,
    discs: Vec<Disc>,
    solution: Solution,
}

impl StonePuzzle {
    /// Creates a puzzle without discs that loads rings from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn SymbolSource>) -> Self {
        Self {
            source,
            discs: Vec::new(),
            solution: Solution::new(),
        }
    }

    /// Creates a puzzle backed by the bundled orientation document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled document cannot be parsed.
    pub fn embedded() -> Result<Self, LoadError> {
        Ok(Self::new(Arc::new(OrientationData::embedded()?)))
    }

    /// Installs the disc for `stone` at rotation 0 and returns it.
    ///
    /// Installing a stone that is already present replaces that disc in place,
    /// keeping its slot in the chain. Returns `None` if the source has no ring
    /// for `stone`.
    pub fn add_disc(&mut self, stone: StoneType) -> Option<&mut Disc> {
        let Some(symbols) = self.source.symbols(stone) else {
            log::warn!("no symbols defined for {stone}");
            return None;
        };
        let disc = Disc::new(stone, symbols.to_vec());
        log::debug!("installed {stone} with {} symbols", disc.len());

        let index = match self.index_of(stone) {
            Some(index) => {
                self.discs[index] = disc;
                index
            }
            None => {
                self.discs.push(disc);
                self.discs.len() - 1
            }
        };
        Some(&mut self.discs[index])
    }

    /// Removes the disc for `stone` and returns it.
    pub fn remove_disc(&mut self, stone: StoneType) -> Option<Disc> {
        let index = self.index_of(stone)?;
        Some(self.discs.remove(index))
    }

    /// Returns the disc for `stone`.
    #[must_use]
    pub fn disc(&self, stone: StoneType) -> Option<&Disc> {
        self.discs.iter().find(|disc| disc.stone_type() == stone)
    }

    /// Returns the disc for `stone` for rotation.
    pub fn disc_mut(&mut self, stone: StoneType) -> Option<&mut Disc> {
        self.discs.iter_mut().find(|disc| disc.stone_type() == stone)
    }

    /// Returns all discs in chain order.
    #[must_use]
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    /// Returns the foundation (first installed) disc.
    #[must_use]
    pub fn foundation(&self) -> Option<&Disc> {
        self.discs.first()
    }

    fn index_of(&self, stone: StoneType) -> Option<usize> {
        self.discs.iter().position(|disc| disc.stone_type() == stone)
    }

    /// Picks a uniformly random target symbol for every installed disc,
    /// replacing the whole solution.
    pub fn generate_random_solution(&mut self) {
        self.generate_random_solution_with_rng(&mut rand::rng());
    }

    /// Like [`generate_random_solution`](Self::generate_random_solution), drawing
    /// from `rng`.
    pub fn generate_random_solution_with_rng<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.solution = self
            .discs
            .iter()
            .filter_map(|disc| {
                let symbol = disc.symbols().choose(&mut *rng)?;
                Some((disc.stone_type(), symbol.id.clone()))
            })
            .collect();
        log::debug!("generated solution: {}", self.solution);
    }

    /// Replaces the solution verbatim.
    ///
    /// Symbols are not checked; an entry naming an unknown symbol just never
    /// counts as solved.
    pub fn set_solution(&mut self, solution: Solution) {
        for (stone, id) in solution.iter() {
            if self.disc(stone).is_some_and(|disc| disc.symbol(id.as_str()).is_none()) {
                log::warn!("{id} is not a symbol of {stone}");
            }
        }
        self.solution = solution;
    }

    /// Returns the current solution.
    #[must_use]
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Returns the slot the target symbol of `stone` must occupy, given the
    /// current solution.
    #[must_use]
    pub fn effective_target_position(&self, stone: StoneType) -> Option<usize> {
        let index = self.index_of(stone)?;
        alignment::effective_target_position(&self.discs, &self.solution, index)
    }

    /// Checks whether every target symbol sits at its effective slot.
    ///
    /// An entry for a stone without a disc, an unknown symbol, or a target with
    /// no applicable clue makes the puzzle unsolved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.iter().all(|(stone, id)| {
            let Some(disc) = self.disc(stone) else {
                return false;
            };
            self.effective_target_position(stone)
                .is_some_and(|position| disc.is_symbol_at_position(id.as_str(), position))
        })
    }

    /// Rotates every disc so that its target symbol sits at its effective slot.
    ///
    /// Discs whose target cannot be resolved are left untouched.
    pub fn apply_solution(&mut self) {
        for index in 0..self.discs.len() {
            let stone = self.discs[index].stone_type();
            let Some(position) =
                alignment::effective_target_position(&self.discs, &self.solution, index)
            else {
                log::debug!("cannot place {stone}: target unresolved");
                continue;
            };
            let Some(id) = self.solution.get(stone) else {
                continue;
            };
            self.discs[index].set_symbol_to_position(id.as_str(), position);
        }
    }

    /// Returns one clue per disc for the current solution, chosen at random
    /// among the clues that hold in the current context.
    ///
    /// Discs without an applicable clue contribute nothing, so the result may
    /// be shorter than the number of discs.
    #[must_use]
    pub fn clues_for_solution(&self) -> Vec<String> {
        self.clues_for_solution_with_rng(&mut rand::rng())
    }

    /// Like [`clues_for_solution`](Self::clues_for_solution), drawing from `rng`.
    pub fn clues_for_solution_with_rng<R>(&self, rng: &mut R) -> Vec<String>
    where
        R: Rng + ?Sized,
    {
        (0..self.discs.len())
            .filter_map(|index| {
                let clues = alignment::valid_clues(&self.discs, &self.solution, index);
                clues.choose(&mut *rng).map(|clue| clue.clue.clone())
            })
            .collect()
    }

    /// Returns `true` if the symbol `id` of `stone` sits where the cavernstone
    /// resonance `resonance` currently points.
    ///
    /// The resonance's slot on the cavernstone is rescaled onto the ring of
    /// `stone`. A symbol listing the resonances it aligns with accepts only
    /// those. The cavernstone itself never aligns.
    #[must_use]
    pub fn is_alignment_valid(&self, stone: StoneType, id: &str, resonance: &str) -> bool {
        let Some(disc) = self.disc(stone) else {
            return false;
        };
        self.resonance_slot(disc, id, resonance)
            .is_some_and(|position| disc.is_symbol_at_position(id, position))
    }

    /// Rotates the disc of `stone` so that the symbol `id` aligns with the
    /// cavernstone resonance `resonance`.
    ///
    /// Returns `false` and leaves the disc untouched when the alignment is
    /// impossible (see [`is_alignment_valid`](Self::is_alignment_valid)).
    pub fn align_symbol_with_resonance(
        &mut self,
        stone: StoneType,
        id: &str,
        resonance: &str,
    ) -> bool {
        let Some(position) = self
            .disc(stone)
            .and_then(|disc| self.resonance_slot(disc, id, resonance))
        else {
            log::debug!("cannot align {stone} {id} with {resonance}");
            return false;
        };
        self.disc_mut(stone)
            .is_some_and(|disc| disc.set_symbol_to_position(id, position))
    }

    fn resonance_slot(&self, disc: &Disc, id: &str, resonance: &str) -> Option<usize> {
        if disc.stone_type() == StoneType::Cavernstone {
            return None;
        }
        if !disc.symbol(id)?.resonates_with(resonance) {
            return None;
        }
        let cavernstone = self.disc(StoneType::Cavernstone)?;
        let slot = cavernstone.symbol_position(resonance)?;
        alignment::rescale_position(slot, cavernstone.len(), disc.len())
    }

    /// Turns every disc back to rotation 0.
    pub fn reset(&mut self) {
        for disc in &mut self.discs {
            disc.reset();
        }
    }

    /// Returns a read-only snapshot for display.
    #[must_use]
    pub fn state(&self) -> PuzzleState {
        PuzzleState {
            discs: self
                .discs
                .iter()
                .map(|disc| {
                    let current = disc.current_symbol();
                    DiscState {
                        stone_type: disc.stone_type(),
                        rotation: disc.rotation(),
                        current_symbol: current.map(|symbol| symbol.id.clone()),
                        current_label: current.map(|symbol| symbol.label.clone()),
                    }
                })
                .collect(),
            is_solved: self.is_solved(),
            solution: self.solution.clone(),
        }
    }
}
