// main.rs - Desktop viewer for the conway engine
// Generations come from the configured update strategy; the tiled one fans
// its tiles out over tokio workers and joins them before every swap.

use eframe::egui;
use egui::Color32;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, Instant};

use anyhow::anyhow;
use clap::Parser;
use conway::{EngineConfig, Grid, PATTERNS, Simulation, StrategyKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod ui;

/// Window viewer for Conway's Game of Life on a torus
#[derive(Parser, Debug)]
#[command(name = "conway-coro", author, version, about)]
struct Args {
    /// Grid rows
    #[arg(long, default_value_t = 64)]
    height: usize,

    /// Grid columns
    #[arg(long, default_value_t = 64)]
    width: usize,

    /// Seed for the initial random grid
    #[arg(short, long)]
    seed: Option<u64>,

    /// Update strategy: sequential or tiled
    #[arg(long, default_value_t = StrategyKind::Tiled)]
    strategy: StrategyKind,

    /// Tile edge length for the tiled strategy
    #[arg(long, default_value_t = conway::engine::DEFAULT_TILE_SIZE)]
    tile_size: usize,

    /// Worker threads for the tiled strategy
    #[arg(long)]
    workers: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let app = GameOfLife::new(&args)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life (torus)",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}

/// Viewer state around one running simulation
pub struct GameOfLife {
    sim: Simulation,
    engine: EngineConfig,

    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    pub selected_strategy: StrategyKind,
    pub last_error: Option<String>,

    seed: Option<u64>,
    reseeds: u64,

    grid_history: [u64; 10],
    history_count: usize,
}

impl GameOfLife {
    fn new(args: &Args) -> conway::Result<Self> {
        let engine = EngineConfig {
            strategy: args.strategy,
            tile_size: args.tile_size,
            workers: args.workers,
        };
        Self::with_engine(Grid::new(args.height, args.width, args.seed)?, engine, args.seed)
    }

    fn with_engine(grid: Grid, engine: EngineConfig, seed: Option<u64>) -> conway::Result<Self> {
        let sim = Simulation::new(grid, engine.build()?);
        Ok(Self {
            sim,
            selected_strategy: engine.strategy,
            engine,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            last_error: None,
            seed,
            reseeds: 0,
            grid_history: [0; 10],
            history_count: 0,
        })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    fn reset_history(&mut self) {
        self.grid_history = [0; 10];
        self.history_count = 0;
    }
}

/// Operations the UI drives
pub trait GameOfLifeInterface {
    fn update_generation(&mut self);
    fn hash_grid(&self) -> u64;
    fn check_for_cycle(&mut self) -> bool;
    fn clear_grid(&mut self);
    fn apply_selected_pattern(&mut self);
    fn apply_random_pattern(&mut self);
    fn toggle_cell(&mut self, row: usize, col: usize);
    fn apply_selected_strategy(&mut self);
}

impl GameOfLifeInterface for GameOfLife {
    fn update_generation(&mut self) {
        match self.sim.step() {
            Ok(_) => {
                if self.check_for_cycle() { self.is_running = false; }
            }
            Err(e) => {
                // A failed generation ends the run; the last complete one stays on screen
                error!(error = %e, "generation failed, stopping");
                self.last_error = Some(e.to_string());
                self.is_running = false;
            }
        }
    }

    fn hash_grid(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.sim.grid().current().as_slice().hash(&mut hasher);
        hasher.finish()
    }

    fn check_for_cycle(&mut self) -> bool {
        let current_hash = self.hash_grid();
        if self.grid_history.contains(&current_hash) { return true; }
        self.grid_history[self.history_count % 10] = current_hash;
        self.history_count += 1;
        false
    }

    fn clear_grid(&mut self) {
        self.sim.grid_mut().clear();
        self.sim.restart();
        self.reset_history();
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            pattern.apply_centered(self.sim.grid_mut().current_mut());
            self.sim.restart();
            self.reset_history();
        }
    }

    fn apply_random_pattern(&mut self) {
        // Step away from the launch seed so every press gives a new world
        self.reseeds += 1;
        let seed = self.seed.map(|s| s.wrapping_add(self.reseeds));
        let (height, width) = self.sim.grid().current().dims();
        match Grid::new(height, width, seed) {
            Ok(grid) => self.sim.reset(grid),
            Err(e) => self.last_error = Some(e.to_string()),
        }
        self.reset_history();
    }

    fn toggle_cell(&mut self, row: usize, col: usize) {
        self.sim.grid_mut().current_mut().toggle(row, col);
    }

    fn apply_selected_strategy(&mut self) {
        if self.selected_strategy == self.engine.strategy {
            return;
        }
        let engine = EngineConfig { strategy: self.selected_strategy, ..self.engine.clone() };
        match engine.build() {
            Ok(strategy) => {
                info!(strategy = strategy.name(), "strategy switched");
                self.sim.set_strategy(strategy);
                self.engine = engine;
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.selected_strategy = self.engine.strategy;
            }
        }
    }
}
