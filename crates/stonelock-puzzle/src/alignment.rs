//! Cross-disc alignment rule.
//!
//! The installed discs form a chain in installation order. The first disc is
//! the foundation: its target symbol has an absolute slot, taken from the
//! symbol's first clue. Every later disc is read against the disc before it:
//! the target symbol's clue that applies to the previous disc's target symbol
//! gives a slot on the previous disc's ring, which is rescaled onto this ring.
//!
//! A disc whose target clues name no symbol of the previous ring has nothing
//! to be read against, so it stands alone: its slot comes from its first clue
//! without an `applies_to` set, then its designated position, then slot 0.
//! Only those context-free clues are offered for it.

use stonelock_core::{Clue, Disc, Position, Symbol};

use crate::Solution;

/// Rescales a slot from a ring of `from_len` slots onto a ring of `to_len`
/// slots, rounding half up.
///
/// Returns `None` if either ring is empty. Slots past the end of the source
/// ring wrap around it first.
///
/// # Examples
///
/// ```
/// use stonelock_puzzle::alignment::rescale_position;
///
/// assert_eq!(rescale_position(3, 6, 4), Some(2));
/// assert_eq!(rescale_position(5, 6, 4), Some(3));
/// assert_eq!(rescale_position(2, 4, 4), Some(2));
/// assert_eq!(rescale_position(9, 6, 4), Some(2));
/// assert_eq!(rescale_position(1, 0, 4), None);
/// ```
#[must_use]
pub fn rescale_position(position: usize, from_len: usize, to_len: usize) -> Option<usize> {
    if from_len == 0 || to_len == 0 {
        return None;
    }
    let position = position % from_len;
    let scaled = position
        .checked_mul(to_len)?
        .checked_mul(2)?
        .checked_add(from_len)?;
    Some(scaled / from_len.checked_mul(2)? % to_len)
}

/// Returns `true` if some clue of `symbol` names a symbol of `previous`.
fn reads_against(symbol: &Symbol, previous: &Disc) -> bool {
    symbol.orientations.iter().any(|clue| {
        previous
            .symbols()
            .iter()
            .any(|other| clue.applies_to(other.id.as_str()))
    })
}

fn context_free_clues(symbol: &Symbol) -> impl Iterator<Item = &Clue> {
    symbol
        .orientations
        .iter()
        .filter(|clue| clue.applies_to.is_empty())
}

fn standalone_target(symbol: &Symbol) -> usize {
    context_free_clues(symbol)
        .next()
        .map(|clue| clue.target_position)
        .or_else(|| symbol.position.map(Position::index))
        .unwrap_or(0)
}

/// Returns the slot the target symbol of `chain[index]` must occupy.
///
/// Returns `None` when the disc has no target, the target is not on its ring,
/// or, for a non-foundation disc read against the previous one, no clue
/// applies to the previous disc's target.
pub(crate) fn effective_target_position(
    chain: &[Disc],
    solution: &Solution,
    index: usize,
) -> Option<usize> {
    let disc = chain.get(index)?;
    let target = solution.get(disc.stone_type())?;
    let symbol = disc.symbol(target.as_str())?;

    let Some(previous) = index.checked_sub(1).and_then(|i| chain.get(i)) else {
        let position = symbol.foundation_target()? % disc.len();
        log::trace!("{} {target}: foundation slot {position}", disc.stone_type());
        return Some(position);
    };

    if !reads_against(symbol, previous) {
        let position = standalone_target(symbol) % disc.len();
        log::trace!(
            "{} {target}: standalone slot {position}, nothing to read against {}",
            disc.stone_type(),
            previous.stone_type()
        );
        return Some(position);
    }

    let previous_target = solution.get(previous.stone_type())?;
    let Some(clue) = symbol.clues_for(previous_target.as_str()).next() else {
        log::trace!(
            "{} {target}: no clue applies to {} {previous_target}",
            disc.stone_type(),
            previous.stone_type()
        );
        return None;
    };
    let position = rescale_position(clue.target_position, previous.len(), disc.len())?;
    log::trace!(
        "{} {target}: slot {position} against {} {previous_target}",
        disc.stone_type(),
        previous.stone_type()
    );
    Some(position)
}

/// Returns the clues of `chain[index]`'s target symbol that hold in the
/// current context.
///
/// Every clue holds on the foundation disc; on a later disc only the clues
/// applying to the previous disc's target do, or the context-free clues if
/// the disc stands alone.
pub(crate) fn valid_clues<'a>(
    chain: &'a [Disc],
    solution: &'a Solution,
    index: usize,
) -> Vec<&'a Clue> {
    let Some(disc) = chain.get(index) else {
        return Vec::new();
    };
    let Some(symbol) = solution
        .get(disc.stone_type())
        .and_then(|target| disc.symbol(target.as_str()))
    else {
        return Vec::new();
    };

    let Some(previous) = index.checked_sub(1).and_then(|i| chain.get(i)) else {
        return symbol.orientations.iter().collect();
    };
    if !reads_against(symbol, previous) {
        return context_free_clues(symbol).collect();
    }
    match solution.get(previous.stone_type()) {
        Some(previous_target) => symbol.clues_for(previous_target.as_str()).collect(),
        None => Vec::new(),
    }
}
