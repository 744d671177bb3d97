// seed.rs - Suppliers of generation 0

use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SeedError;
use crate::snapshot::{ALIVE_GLYPH, DEAD_GLYPH};

/// Supplies the initial state of every cell.
///
/// [`Grid::new`](crate::Grid::new) calls `cell` exactly once per coordinate in
/// row-major order. The supplier owns validation of any raw input; the engine
/// trusts whatever it returns.
pub trait SeedSupplier {
    fn cell(&mut self, x: usize, y: usize) -> bool;
}

impl<F> SeedSupplier for F
where
    F: FnMut(usize, usize) -> bool,
{
    fn cell(&mut self, x: usize, y: usize) -> bool {
        self(x, y)
    }
}

/// Rows of `#` (alive) and `_` (dead), the same glyphs a snapshot renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextSeed {
    width: usize,
    cells: Vec<bool>,
}

impl TextSeed {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }
}

impl FromStr for TextSeed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Blank lines around the board are ignored; rows are numbered from the first non-blank one.
        let mut lines: Vec<&str> = s
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .skip_while(|line| line.is_empty())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        let Some(first) = lines.first() else {
            return Err(SeedError::Empty);
        };

        let width = first.chars().count();
        if width == 0 {
            return Err(SeedError::Empty);
        }

        let mut cells = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(SeedError::RaggedRow { y, found, expected: width });
            }
            for (x, glyph) in line.chars().enumerate() {
                cells.push(match glyph {
                    ALIVE_GLYPH => true,
                    DEAD_GLYPH => false,
                    glyph => return Err(SeedError::UnknownGlyph { glyph, x, y }),
                });
            }
        }

        Ok(Self { width, cells })
    }
}

impl SeedSupplier for TextSeed {
    fn cell(&mut self, x: usize, y: usize) -> bool {
        x < self.width && self.cells.get(y * self.width + x).copied().unwrap_or(false)
    }
}

/// Deterministic random soup.
#[derive(Clone, Debug)]
pub struct RandomSeed {
    rng: StdRng,
    density: f64,
}

impl RandomSeed {
    /// Roughly a third of the cells alive.
    pub const DEFAULT_DENSITY: f64 = 0.33;

    pub fn new(seed: u64, density: f64) -> Result<Self, SeedError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(SeedError::InvalidDensity(density));
        }
        Ok(Self { rng: StdRng::seed_from_u64(seed), density })
    }
}

impl SeedSupplier for RandomSeed {
    fn cell(&mut self, _x: usize, _y: usize) -> bool {
        self.rng.gen_bool(self.density)
    }
}
