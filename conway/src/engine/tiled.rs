// tiled.rs - Data-parallel update: one unit of work per 2D tile
//
// The grid is cut into tile_size x tile_size blocks, the way a device kernel
// is launched as a grid of thread blocks. Every block runs as its own task on
// a tokio worker pool, reads the shared current buffer and produces the cells
// it owns. Blocks on the bottom and right edges are partial; local indices
// that fall outside the grid do nothing.

use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info, warn};

use crate::engine::{UpdateStrategy, check_shapes};
use crate::error::{LifeError, Result};
use crate::grid::{Cell, CellBuffer, DEAD};
use crate::rule::evolve_cell;

/// Reference block size.
pub const DEFAULT_TILE_SIZE: usize = 32;

/// The in-bounds part of one block: origin plus clipped extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    pub height: usize,
    pub width: usize,
}

impl Tile {
    pub fn area(&self) -> usize {
        self.height * self.width
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.height).contains(&row)
            && (self.col..self.col + self.width).contains(&col)
    }
}

/// Partition of a `height x width` grid into blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiling {
    height: usize,
    width: usize,
    tile_size: usize,
}

impl Tiling {
    pub fn new(height: usize, width: usize, tile_size: usize) -> Result<Self> {
        if tile_size == 0 {
            return Err(LifeError::InvalidTileSize);
        }
        Ok(Self { height, width, tile_size })
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Blocks along the row axis, `ceil(height / tile_size)`.
    pub fn tiles_down(&self) -> usize {
        self.height.div_ceil(self.tile_size)
    }

    /// Blocks along the column axis, `ceil(width / tile_size)`.
    pub fn tiles_across(&self) -> usize {
        self.width.div_ceil(self.tile_size)
    }

    pub fn len(&self) -> usize {
        self.tiles_down() * self.tiles_across()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Block at block coordinates `(ty, tx)`, clipped to the grid.
    pub fn tile(&self, ty: usize, tx: usize) -> Tile {
        let row = ty * self.tile_size;
        let col = tx * self.tile_size;
        Tile {
            row,
            col,
            height: self.tile_size.min(self.height - row),
            width: self.tile_size.min(self.width - col),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.tiles_down())
            .flat_map(move |ty| (0..self.tiles_across()).map(move |tx| self.tile(ty, tx)))
    }
}

/// Body of one unit. Walks the block's clipped extent and skips anything
/// outside the grid, so partial edge blocks never touch out-of-range cells.
/// Returns the block's cells row-major over that extent.
pub(crate) fn run_unit(current: &CellBuffer, tile: Tile) -> Vec<Cell> {
    let mut out = vec![DEAD; tile.area()];
    for ly in 0..tile.height {
        for lx in 0..tile.width {
            let row = tile.row + ly;
            let col = tile.col + lx;
            if row >= current.height() || col >= current.width() {
                continue;
            }
            out[ly * tile.width + lx] = evolve_cell(current, row, col);
        }
    }
    out
}

/// Copies a finished unit's cells into their place in `next`.
fn place(next: &mut CellBuffer, tile: Tile, cells: &[Cell]) {
    for (ly, src) in cells.chunks_exact(tile.width).enumerate() {
        let row = next.row_mut(tile.row + ly);
        row[tile.col..tile.col + tile.width].copy_from_slice(src);
    }
}

/// Tile-parallel strategy backed by its own multi-threaded tokio runtime.
///
/// `compute` blocks on that runtime, so it must not be called from inside
/// another tokio runtime.
pub struct TiledStrategy {
    runtime: Runtime,
    tile_size: usize,
}

impl TiledStrategy {
    /// `workers: None` lets tokio pick one worker per core.
    pub fn new(tile_size: usize, workers: Option<usize>) -> Result<Self> {
        if tile_size == 0 {
            return Err(LifeError::InvalidTileSize);
        }
        let mut builder = Builder::new_multi_thread();
        builder.thread_name("conway-tile");
        if let Some(n) = workers {
            builder.worker_threads(n.max(1));
        }
        let runtime = builder.build()?;
        info!(tile_size, ?workers, "tiled strategy ready");
        Ok(Self { runtime, tile_size })
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Launches `unit` once per block and places every result into `next`.
    /// A unit that panics comes back as `LifeError::Dispatch`.
    fn dispatch<F>(&self, current: &Arc<CellBuffer>, next: &mut CellBuffer, unit: F) -> Result<()>
    where
        F: Fn(&CellBuffer, Tile) -> Vec<Cell> + Copy + Send + 'static,
    {
        check_shapes(current, next)?;
        let tiling = Tiling::new(current.height(), current.width(), self.tile_size)?;

        self.runtime.block_on(async {
            // Launch every block at once; they run in any order
            let handles: Vec<_> = tiling
                .iter()
                .map(|tile| {
                    let current = Arc::clone(current);
                    tokio::spawn(async move { (tile, unit(&current, tile)) })
                })
                .collect();
            debug!(units = handles.len(), "dispatched");

            // Barrier: next is only complete once every unit has reported
            for handle in handles {
                let (tile, cells) = handle.await.map_err(|e| {
                    warn!(error = %e, "tile unit failed");
                    LifeError::from(e)
                })?;
                place(next, tile, &cells);
            }
            Ok::<(), LifeError>(())
        })
    }
}

impl UpdateStrategy for TiledStrategy {
    fn name(&self) -> &'static str {
        "tiled"
    }

    fn compute(&self, current: &Arc<CellBuffer>, next: &mut CellBuffer) -> Result<()> {
        self.dispatch(current, next, run_unit)
    }
}
