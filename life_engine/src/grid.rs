// grid.rs - Double-buffered grid for Conway's Game of Life

use std::str::FromStr;

use tracing::debug;

use crate::error::{GridError, SeedError};
use crate::seed::{SeedSupplier, TextSeed};
use crate::snapshot::Snapshot;
use crate::stepper::{SerialStepper, Stepper};

// Reference board size
pub const DEFAULT_WIDTH: usize = 25;
pub const DEFAULT_HEIGHT: usize = 25;

/// A fixed-size lattice holding the current generation and a scratch buffer
/// for the next one.
///
/// Outside of a step both buffers hold the same cells: publishing copies
/// *next* into *current* rather than swapping them.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<bool>,
    next: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Builds generation 0, asking `seed` for every cell in row-major order.
    pub fn new<S: SeedSupplier>(width: usize, height: usize, mut seed: S) -> Result<Self, GridError> {
        let len = Self::check_dimensions(width, height)?;

        let mut current = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                current.push(seed.cell(x, y));
            }
        }
        let next = current.clone();

        Ok(Self { width, height, current, next, generation: 0 })
    }

    /// Validates a board size and returns its cell count.
    pub fn check_dimensions(width: usize, height: usize) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        width
            .checked_mul(height)
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { width, height })
    }

    /// An all-dead grid.
    pub fn dead(width: usize, height: usize) -> Result<Self, GridError> {
        Self::new(width, height, |_, _| false)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of completed steps since the seed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.snapshot().get(x, y)
    }

    pub fn population(&self) -> usize {
        self.snapshot().population()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(self.width, self.height, self.generation, &self.current)
    }

    /// True when the scratch buffer mirrors the published generation, which
    /// holds whenever no step is in progress.
    pub fn buffers_consistent(&self) -> bool {
        self.current == self.next
    }

    /// Advances one generation with the serial stepper.
    pub fn step(&mut self) {
        SerialStepper.step(self);
    }

    /// Frozen current generation alongside the writable next buffer.
    pub(crate) fn split_for_step(&mut self) -> (Snapshot<'_>, &mut [bool]) {
        let current = Snapshot::new(self.width, self.height, self.generation, &self.current);
        (current, &mut self.next)
    }

    pub(crate) fn next_mut(&mut self) -> &mut [bool] {
        &mut self.next
    }

    /// Copies the fully evaluated next buffer into current and bumps the counter.
    pub(crate) fn publish(&mut self) {
        self.current.copy_from_slice(&self.next);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.population(),
            "published generation"
        );
    }
}

impl FromStr for Grid {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seed: TextSeed = s.parse()?;
        let (width, height) = (seed.width(), seed.height());
        Ok(Grid::new(width, height, seed)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_queried_row_major_once_per_cell() {
        let mut visited = Vec::new();
        let grid = Grid::new(3, 2, |x, y| {
            visited.push((x, y));
            x == y
        })
        .unwrap();

        assert_eq!(visited, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(grid.get(0, 0), Some(true));
        assert_eq!(grid.get(1, 1), Some(true));
        assert_eq!(grid.get(2, 1), Some(false));
    }

    #[test]
    fn seed_populates_both_buffers() {
        let grid = Grid::new(4, 4, |x, y| (x + y) % 2 == 0).unwrap();
        assert!(grid.buffers_consistent());
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.population(), 8);
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            Grid::dead(0, 5).unwrap_err(),
            GridError::EmptyDimensions { width: 0, height: 5 }
        );
        assert!(Grid::dead(5, 0).is_err());
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        assert_eq!(
            Grid::dead(usize::MAX, 2).unwrap_err(),
            GridError::TooLarge { width: usize::MAX, height: 2 }
        );
    }

    #[test]
    fn check_dimensions_returns_cell_count() {
        assert_eq!(Grid::check_dimensions(25, 25), Ok(625));
        assert_eq!(
            Grid::check_dimensions(usize::MAX / 2 + 1, 1),
            Err(GridError::TooLarge { width: usize::MAX / 2 + 1, height: 1 })
        );
        assert!(Grid::check_dimensions(0, 0).is_err());
    }

    #[test]
    fn parses_rendered_text() {
        let grid: Grid = "_#_\n_#_\n_#_\n".parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 3));
        assert_eq!(grid.population(), 3);
        assert_eq!(grid.snapshot().to_string(), "_#_\n_#_\n_#_\n");
    }

    #[test]
    fn step_publishes_and_counts() {
        let mut grid: Grid = "___\n###\n___\n".parse().unwrap();
        grid.step();
        assert_eq!(grid.generation(), 1);
        assert!(grid.buffers_consistent());
        assert_eq!(grid.snapshot().to_string(), "_#_\n_#_\n_#_\n");
    }
}
