//! Conway's Game of Life on a fixed-size grid with hard edges.
//!
//! A [`Grid`] is built once from a [`SeedSupplier`] and advanced one
//! generation at a time by a [`Stepper`]. Every cell of the next generation
//! is computed from the current one alone, then published in a single copy,
//! so observers only ever see complete generations through a [`Snapshot`].

pub mod cycle;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod seed;
pub mod simulation;
pub mod snapshot;
pub mod stepper;

pub use cycle::CycleDetector;
pub use error::{GridError, SeedError};
pub use grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Grid};
pub use patterns::{PATTERNS, Pattern, PatternSeed};
pub use rules::{count_live_neighbors, next_state};
pub use seed::{RandomSeed, SeedSupplier, TextSeed};
pub use simulation::{Simulation, StepReport};
pub use snapshot::{ALIVE_GLYPH, DEAD_GLYPH, Snapshot};
pub use stepper::{RowCoroutineStepper, SerialStepper, Stepper};
