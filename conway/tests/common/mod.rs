//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::fmt;
use std::sync::Arc;

use conway::{CellBuffer, Grid, Pattern, UpdateStrategy};

/// Two strategies disagreed on a cell for the same input.
#[derive(Debug, PartialEq, Eq)]
pub struct StrategyDivergence {
    pub row: usize,
    pub col: usize,
    pub left: u8,
    pub right: u8,
}

impl fmt::Display for StrategyDivergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "strategies diverge at ({}, {}): {} vs {}",
            self.row, self.col, self.left, self.right
        )
    }
}

/// First cell where two buffers differ, scanning row-major.
pub fn compare(left: &CellBuffer, right: &CellBuffer) -> Result<(), StrategyDivergence> {
    assert_eq!(left.dims(), right.dims(), "buffers must share a shape");
    for row in 0..left.height() {
        for col in 0..left.width() {
            let (l, r) = (left.get(row, col).unwrap(), right.get(row, col).unwrap());
            if l != r {
                return Err(StrategyDivergence { row, col, left: l, right: r });
            }
        }
    }
    Ok(())
}

/// One generation of `strategy` from `current`, into a fresh buffer.
pub fn one_generation(strategy: &dyn UpdateStrategy, current: &Arc<CellBuffer>) -> CellBuffer {
    let mut next = CellBuffer::zeroed(current.height(), current.width()).unwrap();
    strategy.compute(current, &mut next).unwrap();
    next
}

/// Runs both strategies on the same input and compares cell by cell.
pub fn assert_equivalent(left: &dyn UpdateStrategy, right: &dyn UpdateStrategy, current: &CellBuffer) {
    let current = Arc::new(current.clone());
    let a = one_generation(left, &current);
    let b = one_generation(right, &current);
    if let Err(divergence) = compare(&a, &b) {
        panic!("{} vs {}: {divergence}", left.name(), right.name());
    }
}

/// Empty grid with `pattern` stamped at `(row, col)`.
pub fn grid_with(height: usize, width: usize, pattern: &str, row: isize, col: isize) -> Grid {
    let mut grid = Grid::empty(height, width).unwrap();
    Pattern::find(pattern)
        .unwrap_or_else(|| panic!("no pattern named {pattern}"))
        .stamp(grid.current_mut(), row, col);
    grid
}

/// Live cells as sorted (row, col) pairs.
pub fn live_cells(buffer: &CellBuffer) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for (r, row) in buffer.rows().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell == 1 {
                out.push((r, c));
            }
        }
    }
    out
}
