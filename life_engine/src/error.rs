// error.rs - Error types for grid construction and seed parsing

use thiserror::Error;

/// Errors raised while building a grid. Stepping and observing never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("a {width}x{height} grid has more cells than can be addressed")]
    TooLarge { width: usize, height: usize },

    #[error("pattern `{name}` needs {pattern_width}x{pattern_height} cells at ({x}, {y}) but the grid is {width}x{height}")]
    PatternTooLarge {
        name: &'static str,
        pattern_width: usize,
        pattern_height: usize,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Errors raised by seed suppliers that validate raw input before it reaches the grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedError {
    #[error("seed text contains no rows")]
    Empty,

    #[error("unknown cell glyph {glyph:?} at column {x}, row {y} (expected '#' or '_')")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    #[error("row {y} has {found} cells, expected {expected}")]
    RaggedRow { y: usize, found: usize, expected: usize },

    #[error("density must be within 0.0..=1.0, got {0}")]
    InvalidDensity(f64),

    #[error(transparent)]
    Grid(#[from] GridError),
}
