// simulation.rs - Host-side generation loop: compute, swap, count, time

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::display::RenderSurface;
use crate::engine::UpdateStrategy;
use crate::error::Result;
use crate::grid::Grid;
use crate::timing::GenerationTimer;

/// What one successful step produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    pub generation: u64,
    /// Time spent in the update call for this generation.
    pub duration: Duration,
    /// Cumulative update time so far.
    pub elapsed: Duration,
}

/// A grid plus the strategy that advances it.
pub struct Simulation {
    grid: Grid,
    strategy: Box<dyn UpdateStrategy>,
    generation: u64,
    timer: GenerationTimer,
}

impl Simulation {
    pub fn new(grid: Grid, strategy: Box<dyn UpdateStrategy>) -> Self {
        Self {
            grid,
            strategy,
            generation: 0,
            timer: GenerationTimer::new(),
        }
    }

    /// Computes one generation. Either the whole generation lands (swap,
    /// counter, timer) or, on error, nothing observable changes.
    pub fn step(&mut self) -> Result<GenerationReport> {
        let (current, next) = self.grid.buffers();
        let started = Instant::now();
        let outcome = self.strategy.compute(current, next);
        let duration = started.elapsed();

        if let Err(e) = outcome {
            warn!(generation = self.generation + 1, error = %e, "update failed");
            return Err(e);
        }

        self.grid.swap();
        self.generation += 1;
        self.timer.record(duration);
        debug!(generation = self.generation, ?duration, strategy = self.strategy.name(), "generation computed");

        Ok(GenerationReport {
            generation: self.generation,
            duration,
            elapsed: self.timer.elapsed(),
        })
    }

    /// Steps `generations` times, stopping at the first failure.
    pub fn run(&mut self, generations: u64) -> Result<Option<GenerationReport>> {
        let mut last = None;
        for _ in 0..generations {
            last = Some(self.step()?);
        }
        Ok(last)
    }

    /// Hands the current buffer and status to a render surface.
    pub fn render<S: RenderSurface>(&self, surface: &mut S) -> std::result::Result<(), S::Error> {
        surface.render(self.grid.current(), self.generation, self.timer.elapsed())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for edits between generations.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn timer(&self) -> &GenerationTimer {
        &self.timer
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn UpdateStrategy>) {
        debug!(from = self.strategy.name(), to = strategy.name(), "strategy switched");
        self.strategy = strategy;
    }

    /// Starts over from `grid`: counter and timer go back to zero.
    pub fn reset(&mut self, grid: Grid) {
        self.grid = grid;
        self.restart();
    }

    /// Zeroes the counter and timer, keeping the grid.
    pub fn restart(&mut self) {
        self.generation = 0;
        self.timer.reset();
    }
}
