//! Conway's Game of Life on a fixed-size torus.
//!
//! A [`Grid`] holds two cell buffers, `current` and `next`. An
//! [`UpdateStrategy`] fills `next` from `current`, the grid swaps the two, and
//! the host renders `current`. [`Simulation`] bundles that loop together with
//! per-generation timing.
//!
//! Two strategies are provided and produce identical results:
//!
//! - [`SequentialStrategy`]: one thread, row-major.
//! - [`TiledStrategy`]: the grid is cut into 2D tiles, each tile runs as an
//!   independent task on a tokio worker pool, joined before the swap.
//!
//! ```no_run
//! use conway::{EngineConfig, Grid, Simulation, TextSurface};
//!
//! let grid = Grid::new(24, 80, Some(42))?;
//! let mut sim = Simulation::new(grid, EngineConfig::default().build()?);
//! sim.run(100)?;
//! sim.render(&mut TextSurface::new(std::io::stdout()))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod random;
pub mod rule;
pub mod simulation;
pub mod timing;

pub use config::{EngineConfig, GridConfig, LifeConfig};
pub use display::{RenderSurface, TextSurface, row_to_string, status_line};
pub use engine::{SequentialStrategy, StrategyKind, TiledStrategy, UpdateStrategy};
pub use error::{LifeError, Result};
pub use grid::{ALIVE, Cell, CellBuffer, DEAD, Grid};
pub use patterns::{PATTERNS, Pattern};
pub use simulation::{GenerationReport, Simulation};
pub use timing::GenerationTimer;
