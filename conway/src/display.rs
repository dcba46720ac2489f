// display.rs - Text rendering of a generation plus its status line

use std::io::{self, Write};
use std::time::Duration;

use crate::grid::{ALIVE, Cell, CellBuffer};

pub const LIVE_GLYPH: char = 'O';
pub const DEAD_GLYPH: char = ' ';

/// Anything that can show a generation: a terminal, a window, a log.
pub trait RenderSurface {
    type Error;

    /// `elapsed` is the cumulative update time over `generation` generations.
    fn render(
        &mut self,
        cells: &CellBuffer,
        generation: u64,
        elapsed: Duration,
    ) -> std::result::Result<(), Self::Error>;
}

pub fn row_to_string(row: &[Cell]) -> String {
    row.iter()
        .map(|&c| if c == ALIVE { LIVE_GLYPH } else { DEAD_GLYPH })
        .collect()
}

/// `Generation: 000042, Elapsed: 0.000123[sec]`, where the seconds value is
/// the average update time per generation.
pub fn status_line(generation: u64, elapsed: Duration) -> String {
    let average = if generation == 0 {
        0.0
    } else {
        elapsed.as_secs_f64() / generation as f64
    };
    format!("Generation: {generation:06}, Elapsed: {average:.6}[sec]")
}

/// Plain-text surface: one line per row, then the status line.
pub struct TextSurface<W> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSurface for TextSurface<W> {
    type Error = io::Error;

    fn render(&mut self, cells: &CellBuffer, generation: u64, elapsed: Duration) -> io::Result<()> {
        for row in cells.rows() {
            writeln!(self.out, "{}", row_to_string(row))?;
        }
        writeln!(self.out, "{}", status_line(generation, elapsed))?;
        self.out.flush()
    }
}
