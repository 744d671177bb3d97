// snapshot.rs - Read-only view of one generation

use std::fmt;

pub const ALIVE_GLYPH: char = '#';
pub const DEAD_GLYPH: char = '_';

/// Immutable view of the current generation of a [`Grid`](crate::Grid).
///
/// Cells are stored row-major. Two snapshots are equal when they have the
/// same shape and the same cells; the generation number is not compared, so a
/// blinker's generation 2 equals its seed.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    width: usize,
    height: usize,
    generation: u64,
    cells: &'a [bool],
}

impl<'a> Snapshot<'a> {
    pub(crate) fn new(width: usize, height: usize, generation: u64, cells: &'a [bool]) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, generation, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// State of the cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    /// Caller guarantees `x < width` and `y < height`.
    pub(crate) fn alive(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x]
    }

    pub fn cells(&self) -> &'a [bool] {
        self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [bool]> + use<'a> {
        self.cells.chunks_exact(self.width)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}

impl PartialEq for Snapshot<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Snapshot<'_> {}

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                let glyph = if alive { ALIVE_GLYPH } else { DEAD_GLYPH };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
