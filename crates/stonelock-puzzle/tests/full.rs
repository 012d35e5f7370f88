//! Three-disc puzzles.

use proptest::prelude::*;
use stonelock_core::StoneType;
use stonelock_puzzle::{PuzzleFactory, PuzzleLevel, testing::PuzzleTester};

#[test]
fn full_puzzle_has_clues_and_solves() {
    let factory = PuzzleFactory::embedded().unwrap();
    let mut puzzle = factory.create_full_puzzle();
    assert_eq!(puzzle.state().discs.len(), 3);
    assert_eq!(puzzle.clues_for_solution().len(), 3);

    puzzle.apply_solution();
    assert!(puzzle.is_solved());
}

#[test]
fn presets_install_the_documented_stones() {
    let factory = PuzzleFactory::embedded().unwrap();
    PuzzleTester::new(factory.create_basic_puzzle()).assert_stones(&[StoneType::Cavernstone]);
    PuzzleTester::new(factory.create_intermediate_puzzle())
        .assert_stones(&[StoneType::Cavernstone, StoneType::Godstone]);
    PuzzleTester::new(factory.create_full_puzzle()).assert_stones(&StoneType::ALL);
}

#[test]
fn full_rotation_of_every_disc_restores_state() {
    let mut puzzle = PuzzleTester::preset(PuzzleLevel::Full, 3).into_puzzle();
    let initial = puzzle.state();
    for stone in StoneType::ALL {
        let disc = puzzle.disc_mut(stone).unwrap();
        for _ in 0..disc.len() {
            disc.rotate(1);
        }
    }
    assert_eq!(puzzle.state(), initial);
}

#[test]
fn brute_force_finds_the_solution() {
    let factory = PuzzleFactory::embedded().unwrap();
    let mut puzzle = factory.create_full_puzzle();
    let mut solved = false;
    'search: for _ in 0..6 {
        puzzle.disc_mut(StoneType::Cavernstone).unwrap().rotate(1);
        for _ in 0..4 {
            puzzle.disc_mut(StoneType::Godstone).unwrap().rotate(1);
            for _ in 0..4 {
                puzzle.disc_mut(StoneType::Worldstone).unwrap().rotate(1);
                if puzzle.is_solved() {
                    solved = true;
                    break 'search;
                }
            }
        }
    }
    assert!(solved, "solution: {}", puzzle.solution());
}

#[test]
fn worldstone_is_read_against_the_godstone() {
    // Molten Veins: slot 0 beneath Apsu, slot 3 beneath Desna.
    PuzzleTester::with_solution([
        (StoneType::Cavernstone, "resonance_life"),
        (StoneType::Godstone, "apsu"),
        (StoneType::Worldstone, "molten_veins"),
    ])
    .apply_solution()
    .assert_solved()
    .assert_symbol_at(StoneType::Worldstone, 0, "molten_veins");

    PuzzleTester::with_solution([
        (StoneType::Cavernstone, "resonance_life"),
        (StoneType::Godstone, "desna"),
        (StoneType::Worldstone, "molten_veins"),
    ])
    .apply_solution()
    .assert_solved()
    .assert_symbol_at(StoneType::Worldstone, 3, "molten_veins")
    .rotate(StoneType::Worldstone, 2)
    .assert_unsolved();
}

#[test]
fn clues_name_each_target_symbol() {
    let factory = PuzzleFactory::embedded().unwrap();
    for _ in 0..20 {
        let puzzle = factory.create_full_puzzle();
        let clues = puzzle.clues_for_solution();
        assert_eq!(clues.len(), 3);
        for (disc, clue) in puzzle.discs().iter().zip(&clues) {
            let target = puzzle.solution().get(disc.stone_type()).unwrap();
            let symbol = disc.symbol(target.as_str()).unwrap();
            assert!(
                symbol.orientations.iter().any(|c| &c.clue == clue),
                "{clue:?} is not a clue of {target}"
            );
        }
    }
}

#[test]
fn state_serializes_for_display() {
    let puzzle = PuzzleTester::with_solution([
        (StoneType::Cavernstone, "resonance_light"),
        (StoneType::Godstone, "first_ones"),
        (StoneType::Worldstone, "deep_springs"),
    ])
    .apply_solution()
    .into_puzzle();
    let json = serde_json::to_value(puzzle.state()).unwrap();
    assert_eq!(json["is_solved"], true);
    assert_eq!(json["solution"]["godstone"], "first_ones");
    assert_eq!(json["discs"][0]["stone_type"], "cavernstone");
    assert_eq!(json["discs"].as_array().unwrap().len(), 3);
}

const ORDERS: [&[StoneType]; 8] = [
    &[StoneType::Cavernstone, StoneType::Worldstone],
    &[StoneType::Godstone, StoneType::Cavernstone],
    &[StoneType::Worldstone, StoneType::Godstone],
    &[StoneType::Godstone],
    &[StoneType::Worldstone],
    &[StoneType::Godstone, StoneType::Cavernstone, StoneType::Worldstone],
    &[StoneType::Worldstone, StoneType::Cavernstone, StoneType::Godstone],
    &[StoneType::Cavernstone, StoneType::Worldstone, StoneType::Godstone],
];

#[test]
fn worldstone_on_the_cavernstone_stands_alone() {
    PuzzleTester::with_solution([
        (StoneType::Cavernstone, "resonance_water"),
        (StoneType::Worldstone, "blighted_wastes"),
    ])
    .assert_stones(&[StoneType::Cavernstone, StoneType::Worldstone])
    .assert_targets_resolve()
    .assert_unsolved()
    .apply_solution()
    .assert_solved()
    .assert_symbol_at(StoneType::Cavernstone, 3, "resonance_water")
    .assert_symbol_at(StoneType::Worldstone, 0, "blighted_wastes")
    .rotate(StoneType::Worldstone, 1)
    .assert_unsolved();
}

#[test]
fn resonances_guide_gods_and_realms() {
    let mut puzzle = PuzzleTester::with_solution([
        (StoneType::Cavernstone, "resonance_life"),
        (StoneType::Godstone, "desna"),
        (StoneType::Worldstone, "verdant_garden"),
    ])
    .apply_solution()
    .into_puzzle();

    // Life sits above the horn, so Desna aligns at the top.
    assert!(puzzle.is_alignment_valid(StoneType::Godstone, "desna", "resonance_life"));
    assert!(!puzzle.is_alignment_valid(StoneType::Godstone, "apsu", "resonance_life"));
    assert!(puzzle.align_symbol_with_resonance(StoneType::Godstone, "apsu", "resonance_light"));
    assert!(puzzle.is_alignment_valid(StoneType::Godstone, "apsu", "resonance_light"));

    // Light is on slot 3 of six, which maps to slot 2 of four.
    let godstone = puzzle.disc(StoneType::Godstone).unwrap();
    assert_eq!(godstone.symbol_position("apsu"), Some(2));
    assert!(puzzle.is_alignment_valid(StoneType::Worldstone, "verdant_garden", "resonance_life"));
}

proptest! {
    #[test]
    fn custom_orders_apply_then_check(seed: u64, order in 0..ORDERS.len()) {
        let factory = PuzzleFactory::embedded().unwrap().with_seed(seed);
        let mut puzzle = factory.create_custom_puzzle(ORDERS[order], None);
        prop_assert_eq!(puzzle.solution().len(), ORDERS[order].len());
        puzzle.apply_solution();
        prop_assert!(puzzle.is_solved(), "{}", puzzle.state());
    }

    #[test]
    fn apply_then_check(seed: u64, steps in proptest::collection::vec(-20..20_isize, 3)) {
        let mut puzzle = PuzzleTester::preset(PuzzleLevel::Full, seed).into_puzzle();
        for (stone, steps) in StoneType::ALL.into_iter().zip(steps) {
            puzzle.disc_mut(stone).unwrap().rotate(steps);
        }
        puzzle.apply_solution();
        prop_assert!(puzzle.is_solved());
        prop_assert_eq!(puzzle.clues_for_solution().len(), 3);
    }
}
