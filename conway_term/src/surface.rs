// surface.rs - crossterm render surface and raw-mode guard

use std::io::{self, Write};
use std::time::Duration;

use conway::{CellBuffer, RenderSurface, row_to_string, status_line};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

/// Raw mode + alternate screen for as long as it lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Nothing useful to do with a failure while tearing down
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Draws rows from the top-left corner, status line in reverse video below.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    type Error = io::Error;

    fn render(&mut self, cells: &CellBuffer, generation: u64, elapsed: Duration) -> io::Result<()> {
        let mut y = 0u16;
        for row in cells.rows() {
            queue!(self.out, MoveTo(0, y), Print(row_to_string(row)))?;
            y = y.saturating_add(1);
        }
        queue!(
            self.out,
            MoveTo(0, y),
            SetAttribute(Attribute::Reverse),
            Print(status_line(generation, elapsed)),
            SetAttribute(Attribute::Reset),
        )?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_every_row_and_the_status() {
        let cells = CellBuffer::from_cells(2, 2, vec![1, 0, 0, 1]).unwrap();
        let mut surface = TerminalSurface::new(Vec::new());
        surface.render(&cells, 3, Duration::from_millis(3)).unwrap();
        let text = String::from_utf8(surface.out).unwrap();
        assert!(text.contains("O "));
        assert!(text.contains(" O"));
        assert!(text.contains("Generation: 000003, Elapsed: 0.001000[sec]"));
    }
}
