// cli.rs - Command line flags and how they combine with the config file

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use conway::{EngineConfig, LifeConfig, Pattern, StrategyKind};

/// Used when the terminal size cannot be read (e.g. output is piped).
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Conway's Game of Life on a toroidal grid, in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "conway-term")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Grid rows (default: terminal height minus the status line)
    #[arg(long)]
    pub height: Option<usize>,

    /// Grid columns (default: terminal width)
    #[arg(long)]
    pub width: Option<usize>,

    /// Seed for the initial random grid
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Update strategy: sequential or tiled
    #[arg(long)]
    pub strategy: Option<StrategyKind>,

    /// Tile edge length for the tiled strategy
    #[arg(long)]
    pub tile_size: Option<usize>,

    /// Worker threads for the tiled strategy
    #[arg(long)]
    pub workers: Option<usize>,

    /// Stop after this many generations
    #[arg(short = 'n', long)]
    pub generations: Option<u64>,

    /// Start from a named pattern instead of random cells
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Don't take over the terminal; print the final generation to stdout
    #[arg(long)]
    pub headless: bool,

    /// TOML file with [grid] and [engine] sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything the driver needs, after flags override the config file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub height: usize,
    pub width: usize,
    pub seed: Option<u64>,
    pub engine: EngineConfig,
    pub generations: Option<u64>,
    pub pattern: Option<&'static Pattern>,
    pub headless: bool,
}

impl Cli {
    /// Flags win over the file; dimensions fall back to the terminal size
    /// with one row kept for the status line.
    pub fn resolve(&self, file: LifeConfig, terminal: Option<(u16, u16)>) -> Result<Settings> {
        let (cols, rows) = terminal.unwrap_or(FALLBACK_SIZE);
        let height = self
            .height
            .or(file.grid.height)
            .unwrap_or_else(|| usize::from(rows).saturating_sub(1).max(1));
        let width = self.width.or(file.grid.width).unwrap_or(usize::from(cols).max(1));

        let mut engine = file.engine;
        if let Some(strategy) = self.strategy {
            engine.strategy = strategy;
        }
        if let Some(tile_size) = self.tile_size {
            engine.tile_size = tile_size;
        }
        if self.workers.is_some() {
            engine.workers = self.workers;
        }

        let pattern = match &self.pattern {
            Some(name) => match Pattern::find(name) {
                Some(p) => Some(p),
                None => bail!("unknown pattern '{name}'"),
            },
            None => None,
        };

        Ok(Settings {
            height,
            width,
            seed: self.seed.or(file.grid.seed),
            engine,
            generations: self.generations,
            pattern,
            headless: self.headless,
        })
    }
}
