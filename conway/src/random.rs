// random.rs - Seedable source of initial cell states

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::Cell;

/// Produces independent, evenly distributed 0/1 cells.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// `Some(seed)` is reproducible across runs, `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn cell(&mut self) -> Cell {
        self.rng.gen_range(0..=1)
    }

    pub fn fill(&mut self, cells: &mut [Cell]) {
        for cell in cells.iter_mut() {
            *cell = self.cell();
        }
    }
}
