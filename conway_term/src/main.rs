//! conway-term - Game of Life in the terminal.
//!
//! Renders the grid, polls the keyboard without blocking, computes the next
//! generation and swaps, until `q`/`Esc`/`Ctrl-C` or `--generations` is hit.
//!
//! ```bash
//! # Fill the terminal, tiled strategy, fixed seed
//! conway-term --seed 42
//!
//! # 200 generations of a glider gun on the sequential strategy, no TUI
//! conway-term --pattern "gosper glider gun" --height 30 --width 60 \
//!     --strategy sequential -n 200 --headless
//! ```

use std::io;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use conway::{Grid, LifeConfig, Simulation, TextSurface};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod input;
mod surface;

use cli::{Cli, Settings};
use input::{Action, LoopState};
use surface::{TerminalGuard, TerminalSurface};

/// Headless runs with no `--generations` stop here.
const DEFAULT_HEADLESS_GENERATIONS: u64 = 100;
/// How often a paused loop looks at the keyboard.
const PAUSED_POLL: Duration = Duration::from_millis(50);

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn build_grid(settings: &Settings) -> Result<Grid> {
    let grid = match settings.pattern {
        Some(pattern) => {
            let mut grid = Grid::empty(settings.height, settings.width)?;
            pattern.apply_centered(grid.current_mut());
            grid
        }
        None => Grid::new(settings.height, settings.width, settings.seed)?,
    };
    Ok(grid)
}

fn run_headless(sim: &mut Simulation, generations: u64) -> Result<()> {
    sim.run(generations)?;
    info!(
        generations = sim.generation(),
        average = ?sim.timer().average(),
        population = sim.grid().population(),
        "headless run finished"
    );
    sim.render(&mut TextSurface::new(io::stdout().lock()))?;
    Ok(())
}

fn run_interactive(sim: &mut Simulation, limit: Option<u64>) -> Result<()> {
    let _guard = TerminalGuard::enter().context("failed to set up the terminal")?;
    let mut surface = TerminalSurface::new(io::stdout());
    let mut state = LoopState::new(limit);

    loop {
        sim.render(&mut surface)?;

        match state.decide(input::poll_command()?, sim.generation()) {
            Action::Exit => break,
            Action::Wait => thread::sleep(PAUSED_POLL),
            Action::Advance => {
                sim.step()?;
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let file = match &cli.config {
        Some(path) => LifeConfig::load(path)?,
        None => LifeConfig::default(),
    };
    let settings = cli.resolve(file, crossterm::terminal::size().ok())?;

    let grid = build_grid(&settings)?;
    let strategy = settings.engine.build()?;
    info!(
        height = settings.height,
        width = settings.width,
        strategy = strategy.name(),
        "starting"
    );
    let mut sim = Simulation::new(grid, strategy);

    if settings.headless {
        run_headless(&mut sim, settings.generations.unwrap_or(DEFAULT_HEADLESS_GENERATIONS))?;
    } else {
        run_interactive(&mut sim, settings.generations)?;
    }

    info!(
        generations = sim.generation(),
        elapsed = ?sim.timer().elapsed(),
        average = ?sim.timer().average(),
        "done"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
