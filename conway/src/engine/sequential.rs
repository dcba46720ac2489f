use std::sync::Arc;

use crate::engine::{UpdateStrategy, check_shapes};
use crate::error::Result;
use crate::grid::CellBuffer;
use crate::rule::evolve_cell;

/// Single-threaded, row-major sweep over every cell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialStrategy;

impl UpdateStrategy for SequentialStrategy {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn compute(&self, current: &Arc<CellBuffer>, next: &mut CellBuffer) -> Result<()> {
        check_shapes(current, next)?;
        for row in 0..current.height() {
            for (col, cell) in next.row_mut(row).iter_mut().enumerate() {
                *cell = evolve_cell(current, row, col);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ALIVE;

    #[test]
    fn overwrites_stale_next() {
        let current = Arc::new(CellBuffer::zeroed(6, 9).unwrap());
        let mut next = CellBuffer::from_cells(6, 9, vec![ALIVE; 54]).unwrap();
        SequentialStrategy.compute(&current, &mut next).unwrap();
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn single_cell_grid_is_its_own_neighbourhood() {
        // on a 1x1 torus all 8 neighbours are the cell itself
        let current = Arc::new(CellBuffer::from_cells(1, 1, vec![ALIVE]).unwrap());
        let mut next = CellBuffer::zeroed(1, 1).unwrap();
        SequentialStrategy.compute(&current, &mut next).unwrap();
        assert_eq!(next.get(0, 0), Some(0));
    }
}
