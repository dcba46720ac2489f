use crate::grid::CellBuffer;

/// A named seed pattern as (row, col) offsets from its top-left corner.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// Looks a pattern up by name, ignoring case.
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// `(rows, cols)` of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Sets the pattern's cells alive with its corner at `(row, col)`. Cells
    /// past an edge wrap around; existing cells are left alone.
    pub fn stamp(&self, buffer: &mut CellBuffer, row: isize, col: isize) {
        for &(r, c) in self.cells {
            buffer.set(row + r as isize, col + c as isize, true);
        }
    }

    /// Clears the buffer and stamps the pattern in the middle.
    pub fn apply_centered(&self, buffer: &mut CellBuffer) {
        buffer.clear();
        let (h, w) = self.extent();
        let row = (buffer.height() as isize - h as isize) / 2;
        let col = (buffer.width() as isize - w as isize) / 2;
        self.stamp(buffer, row, col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ALIVE;

    #[test]
    fn extents() {
        assert_eq!(Pattern::find("block").unwrap().extent(), (2, 2));
        assert_eq!(Pattern::find("Blinker").unwrap().extent(), (1, 3));
        assert_eq!(Pattern::find("pulsar").unwrap().extent(), (13, 13));
        assert_eq!(Pattern::find("gosper glider gun").unwrap().extent(), (9, 36));
        assert!(Pattern::find("spaceship").is_none());
    }

    #[test]
    fn names_are_unique_and_cells_distinct() {
        for (i, p) in PATTERNS.iter().enumerate() {
            assert!(PATTERNS[i + 1..].iter().all(|q| q.name != p.name));
            let mut cells = p.cells.to_vec();
            cells.sort_unstable();
            cells.dedup();
            assert_eq!(cells.len(), p.cells.len(), "{}", p.name);
        }
    }

    #[test]
    fn stamp_wraps_past_edges() {
        let mut buf = CellBuffer::zeroed(5, 5).unwrap();
        Pattern::find("Block").unwrap().stamp(&mut buf, 4, 4);
        assert_eq!(buf.population(), 4);
        for (r, c) in [(4, 4), (4, 0), (0, 4), (0, 0)] {
            assert_eq!(buf.get(r, c), Some(ALIVE));
        }
    }

    #[test]
    fn apply_centered_clears_first() {
        let mut buf = CellBuffer::from_cells(7, 7, vec![ALIVE; 49]).unwrap();
        let blinker = Pattern::find("Blinker").unwrap();
        blinker.apply_centered(&mut buf);
        assert_eq!(buf.population(), 3);
        assert_eq!(buf.row(3), &[0, 0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn every_pattern_fits_and_stamps_fully() {
        for p in PATTERNS {
            let (h, w) = p.extent();
            let mut buf = CellBuffer::zeroed(h + 2, w + 2).unwrap();
            p.apply_centered(&mut buf);
            assert_eq!(buf.population(), p.cells.len(), "{}", p.name);
        }
    }
}
