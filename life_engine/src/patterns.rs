// patterns.rs - Catalog of well-known Life patterns

use crate::error::GridError;
use crate::seed::SeedSupplier;

/// A named pattern, stored as `(row, col)` offsets from its bounding box.
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
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
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

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    /// Places the pattern in the middle of a `width` x `height` grid.
    pub fn centered(&'static self, width: usize, height: usize) -> Result<PatternSeed, GridError> {
        let x = width.saturating_sub(self.width()) / 2;
        let y = height.saturating_sub(self.height()) / 2;
        self.placed_at(x, y, width, height)
    }

    /// Places the pattern's top-left corner at `(x, y)`.
    pub fn placed_at(&'static self, x: usize, y: usize, width: usize, height: usize) -> Result<PatternSeed, GridError> {
        let fits_x = x.checked_add(self.width()).is_some_and(|right| right <= width);
        let fits_y = y.checked_add(self.height()).is_some_and(|bottom| bottom <= height);
        if !(fits_x && fits_y) {
            return Err(GridError::PatternTooLarge {
                name: self.name,
                pattern_width: self.width(),
                pattern_height: self.height(),
                x,
                y,
                width,
                height,
            });
        }
        Ok(PatternSeed { pattern: self, x, y })
    }
}

/// A pattern at a fixed position on an otherwise dead grid.
#[derive(Clone, Copy, Debug)]
pub struct PatternSeed {
    pattern: &'static Pattern,
    x: usize,
    y: usize,
}

impl PatternSeed {
    pub fn pattern(&self) -> &'static Pattern {
        self.pattern
    }
}

impl SeedSupplier for PatternSeed {
    fn cell(&mut self, x: usize, y: usize) -> bool {
        let (Some(col), Some(row)) = (x.checked_sub(self.x), y.checked_sub(self.y)) else {
            return false;
        };
        self.pattern.cells.contains(&(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    #[test]
    fn catalog_names_are_unique_and_findable() {
        for pattern in PATTERNS {
            let found = find(pattern.name).unwrap();
            assert_eq!(found.name, pattern.name);
            assert_eq!(found.cells, pattern.cells);
        }
        assert_eq!(find("gosper glider gun").map(|p| p.name), Some("Gosper Glider Gun"));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn bounding_boxes() {
        assert_eq!((find("Glider").unwrap().width(), find("Glider").unwrap().height()), (3, 3));
        assert_eq!((find("Pulsar").unwrap().width(), find("Pulsar").unwrap().height()), (13, 13));
        let gun = find("Gosper Glider Gun").unwrap();
        assert_eq!((gun.width(), gun.height()), (36, 9));
    }

    #[test]
    fn centered_pattern_lands_in_the_middle() {
        let seed = find("Blinker").unwrap().centered(25, 25).unwrap();
        let grid = Grid::new(25, 25, seed).unwrap();
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.get(11, 12), Some(true));
        assert_eq!(grid.get(12, 12), Some(true));
        assert_eq!(grid.get(13, 12), Some(true));
    }

    #[test]
    fn oversized_pattern_is_rejected() {
        let gun = find("Gosper Glider Gun").unwrap();
        assert!(matches!(
            gun.centered(25, 25),
            Err(GridError::PatternTooLarge { pattern_width: 36, pattern_height: 9, .. })
        ));
        assert!(gun.centered(40, 20).is_ok());
        assert!(find("Block").unwrap().placed_at(24, 0, 25, 25).is_err());
    }

    #[test]
    fn pulsar_has_period_three() {
        let seed = find("Pulsar").unwrap().centered(17, 17).unwrap();
        let mut grid = Grid::new(17, 17, seed).unwrap();
        let start = grid.clone();
        grid.step();
        assert_ne!(grid.snapshot(), start.snapshot());
        grid.step();
        grid.step();
        assert_eq!(grid.snapshot(), start.snapshot());
    }
}
