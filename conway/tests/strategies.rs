//! Sequential and tiled strategies must agree on every cell.

mod common;

use std::sync::Arc;

use common::{assert_equivalent, compare, one_generation};
use conway::{CellBuffer, Grid, SequentialStrategy, Simulation, TiledStrategy, UpdateStrategy};
use proptest::prelude::*;

fn random_buffer(height: usize, width: usize, seed: u64) -> CellBuffer {
    Grid::new(height, width, Some(seed)).unwrap().current().clone()
}

#[test]
fn equivalent_on_random_50x50() {
    let tiled = TiledStrategy::new(32, Some(4)).unwrap();
    assert_equivalent(&SequentialStrategy, &tiled, &random_buffer(50, 50, 2024));
}

#[test]
fn equivalent_with_partial_edge_tiles() {
    let tiled = TiledStrategy::new(32, Some(4)).unwrap();
    assert_equivalent(&SequentialStrategy, &tiled, &random_buffer(50, 70, 11));
}

#[test]
fn equivalent_across_tile_sizes() {
    let current = random_buffer(37, 53, 5);
    for tile_size in [1, 3, 8, 16, 32, 64, 100] {
        let tiled = TiledStrategy::new(tile_size, Some(3)).unwrap();
        assert_equivalent(&SequentialStrategy, &tiled, &current);
    }
}

#[test]
fn equivalent_on_degenerate_shapes() {
    let tiled = TiledStrategy::new(32, Some(2)).unwrap();
    for (h, w) in [(1, 1), (1, 40), (40, 1), (2, 2), (33, 33)] {
        assert_equivalent(&SequentialStrategy, &tiled, &random_buffer(h, w, (h * 100 + w) as u64));
    }
}

#[test]
fn simulations_stay_in_lockstep() {
    let grid = Grid::new(64, 48, Some(99)).unwrap();
    let mut seq = Simulation::new(grid.clone(), Box::new(SequentialStrategy));
    let mut par = Simulation::new(grid, Box::new(TiledStrategy::new(32, Some(4)).unwrap()));
    for generation in 1..=40 {
        seq.step().unwrap();
        par.step().unwrap();
        if let Err(d) = compare(seq.grid().current(), par.grid().current()) {
            panic!("generation {generation}: {d}");
        }
    }
    assert_eq!(seq.generation(), 40);
    assert_eq!(par.generation(), 40);
}

#[test]
fn repeated_runs_are_deterministic() {
    let current = Arc::new(random_buffer(45, 45, 8));
    let tiled = TiledStrategy::new(16, Some(4)).unwrap();
    let strategies: [&dyn UpdateStrategy; 2] = [&SequentialStrategy, &tiled];
    for strategy in strategies {
        let first = one_generation(strategy, &current);
        for _ in 0..5 {
            assert_eq!(one_generation(strategy, &current), first, "{}", strategy.name());
        }
    }
}

#[test]
fn stale_next_contents_never_leak() {
    let current = Arc::new(random_buffer(50, 70, 3));
    let expected = one_generation(&SequentialStrategy, &current);
    let tiled = TiledStrategy::new(32, Some(2)).unwrap();
    for fill in [0u8, 1] {
        let mut next = CellBuffer::from_cells(50, 70, vec![fill; 50 * 70]).unwrap();
        tiled.compute(&current, &mut next).unwrap();
        assert_eq!(next, expected);
        SequentialStrategy.compute(&current, &mut next).unwrap();
        assert_eq!(next, expected);
    }
}

#[test]
fn mismatched_next_is_rejected() {
    let current = Arc::new(random_buffer(10, 10, 1));
    let mut next = CellBuffer::zeroed(10, 11).unwrap();
    assert!(SequentialStrategy.compute(&current, &mut next).is_err());
    let tiled = TiledStrategy::new(4, Some(1)).unwrap();
    assert!(tiled.compute(&current, &mut next).is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn equivalent_for_arbitrary_shapes(
        height in 1usize..80,
        width in 1usize..80,
        tile_size in 1usize..40,
        seed in any::<u64>(),
    ) {
        let current = Arc::new(random_buffer(height, width, seed));
        let tiled = TiledStrategy::new(tile_size, Some(2)).unwrap();
        let a = one_generation(&SequentialStrategy, &current);
        let b = one_generation(&tiled, &current);
        prop_assert_eq!(compare(&a, &b), Ok(()));
    }
}
