// grid.rs - Double-buffered toroidal grid for Conway's Game of Life

use std::sync::Arc;

use tracing::info;

use crate::error::{LifeError, Result};
use crate::random::RandomSource;

/// A single cell: 1 is alive, 0 is dead.
pub type Cell = u8;

pub const DEAD: Cell = 0;
pub const ALIVE: Cell = 1;

/// Maps `n` into `0..m` with true modulo, so `-1` lands on `m - 1`.
#[inline]
pub fn wrap(n: isize, m: usize) -> usize {
    n.rem_euclid(m as isize) as usize
}

fn checked_len(height: usize, width: usize) -> Result<usize> {
    if height == 0 || width == 0 {
        return Err(LifeError::InvalidDimension { height, width });
    }
    height
        .checked_mul(width)
        .ok_or(LifeError::AllocationFailure { height, width })
}

/// One `height x width` plane of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBuffer {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl CellBuffer {
    /// All-dead buffer.
    pub fn zeroed(height: usize, width: usize) -> Result<Self> {
        let len = checked_len(height, width)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| LifeError::AllocationFailure { height, width })?;
        cells.resize(len, DEAD);
        Ok(Self { height, width, cells })
    }

    /// Buffer from explicit row-major contents. Every value must be 0 or 1.
    pub fn from_cells(height: usize, width: usize, cells: Vec<Cell>) -> Result<Self> {
        let expected = checked_len(height, width)?;
        if cells.len() != expected {
            return Err(LifeError::LengthMismatch { expected, actual: cells.len() });
        }
        if let Some((index, &value)) = cells.iter().enumerate().find(|&(_, &v)| v > ALIVE) {
            return Err(LifeError::InvalidCell { index, value });
        }
        Ok(Self { height, width, cells })
    }

    /// Buffer where every cell is an independent draw from `source`.
    pub fn random(height: usize, width: usize, source: &mut RandomSource) -> Result<Self> {
        let mut buffer = Self::zeroed(height, width)?;
        source.fill(&mut buffer.cells);
        Ok(buffer)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn dims(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// In-bounds lookup, `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Toroidal lookup: any integer coordinate wraps into the grid.
    #[inline]
    pub fn cell_at(&self, row: isize, col: isize) -> Cell {
        let r = wrap(row, self.height);
        let c = wrap(col, self.width);
        self.cells[self.index(r, c)]
    }

    /// Toroidal write. Only ever stores `ALIVE` or `DEAD`.
    pub fn set(&mut self, row: isize, col: isize, alive: bool) {
        let r = wrap(row, self.height);
        let c = wrap(col, self.width);
        let i = self.index(r, c);
        self.cells[i] = if alive { ALIVE } else { DEAD };
    }

    /// Flips an in-bounds cell. Returns false if `(row, col)` is outside the grid.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        if row >= self.height || col >= self.width {
            return false;
        }
        let i = self.index(row, col);
        self.cells[i] ^= ALIVE;
        true
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        let start = row * self.width;
        &mut self.cells[start..start + self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width)
    }

    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }
}

/// The two buffer slots. `current` is what the world looks like now, `next`
/// is scratch space the engine overwrites before the slots are swapped.
///
/// Both slots are reference counted so a parallel dispatch can share
/// `current` with its workers without copying it. `next` is always handed out
/// through `Arc::make_mut`, so it is never aliased with `current` or with a
/// reader that kept an old handle.
#[derive(Debug, Clone)]
pub struct Grid {
    current: Arc<CellBuffer>,
    next: Arc<CellBuffer>,
}

impl Grid {
    /// Random grid. `seed: None` draws from OS entropy.
    pub fn new(height: usize, width: usize, seed: Option<u64>) -> Result<Self> {
        let mut source = RandomSource::new(seed);
        let current = CellBuffer::random(height, width, &mut source)?;
        info!(height, width, ?seed, live = current.population(), "grid created");
        Self::from_buffer(current)
    }

    /// All-dead grid.
    pub fn empty(height: usize, width: usize) -> Result<Self> {
        Self::from_buffer(CellBuffer::zeroed(height, width)?)
    }

    pub fn from_cells(height: usize, width: usize, cells: Vec<Cell>) -> Result<Self> {
        Self::from_buffer(CellBuffer::from_cells(height, width, cells)?)
    }

    pub fn from_buffer(current: CellBuffer) -> Result<Self> {
        let next = CellBuffer::zeroed(current.height(), current.width())?;
        Ok(Self {
            current: Arc::new(current),
            next: Arc::new(next),
        })
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    #[inline]
    pub fn cell_at(&self, row: isize, col: isize) -> Cell {
        self.current.cell_at(row, col)
    }

    pub fn current(&self) -> &CellBuffer {
        &self.current
    }

    /// Shared handle to the current buffer, e.g. for a renderer on another thread.
    pub fn shared_current(&self) -> Arc<CellBuffer> {
        Arc::clone(&self.current)
    }

    /// Editable current buffer (pattern stamping, toggling).
    pub fn current_mut(&mut self) -> &mut CellBuffer {
        Arc::make_mut(&mut self.current)
    }

    /// Read-only current and exclusive next, for one update pass.
    pub fn buffers(&mut self) -> (&Arc<CellBuffer>, &mut CellBuffer) {
        (&self.current, Arc::make_mut(&mut self.next))
    }

    /// Exchanges the two slots. O(1): only the handles move.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Replaces the current contents with a buffer of the same shape.
    pub fn replace(&mut self, buffer: CellBuffer) -> Result<()> {
        if buffer.dims() != self.current.dims() {
            return Err(LifeError::ReplacementMismatch {
                expected: self.current.dims(),
                actual: buffer.dims(),
            });
        }
        self.current = Arc::new(buffer);
        Ok(())
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn clear(&mut self) {
        self.current_mut().clear();
    }
}
