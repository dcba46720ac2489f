use std::time::Duration;

/// Accumulates wall-clock time spent inside update calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationTimer {
    total: Duration,
    generations: u64,
    last: Duration,
}

impl GenerationTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, duration: Duration) {
        self.total += duration;
        self.last = duration;
        self.generations += 1;
    }

    /// Cumulative time over all recorded generations.
    pub fn elapsed(&self) -> Duration {
        self.total
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }

    /// Duration of the most recent generation, zero before the first one.
    pub fn last(&self) -> Duration {
        self.last
    }

    /// `elapsed / generations`, zero before the first generation.
    pub fn average(&self) -> Duration {
        match u32::try_from(self.generations) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total / n,
            Err(_) => Duration::from_secs_f64(self.total.as_secs_f64() / self.generations as f64),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
