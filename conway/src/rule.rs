// rule.rs - Conway's B3/S23 rule on a toroidal neighbourhood

use crate::grid::{ALIVE, Cell, CellBuffer, DEAD};

/// The 8 Moore neighbours as (row, col) offsets.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Live neighbours of `(row, col)`, wrapping at every edge.
#[inline]
pub fn live_neighbors(current: &CellBuffer, row: usize, col: usize) -> u8 {
    let (r, c) = (row as isize, col as isize);
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dr, dc)| current.cell_at(r + dr, c + dc))
        .sum()
}

/// Next state of a cell from its current state and live neighbour count.
#[inline]
pub fn next_state(cell: Cell, live: u8) -> Cell {
    match (cell, live) {
        (ALIVE, 2) | (ALIVE, 3) => ALIVE, // Survival
        (DEAD, 3) => ALIVE,               // Birth
        _ => DEAD,                        // Death or stays dead
    }
}

/// Rule applied to one cell of `current`.
#[inline]
pub fn evolve_cell(current: &CellBuffer, row: usize, col: usize) -> Cell {
    let cell = current.cell_at(row as isize, col as isize);
    next_state(cell, live_neighbors(current, row, col))
}
