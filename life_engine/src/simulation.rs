// simulation.rs - A grid, its stepper and cycle tracking for one run

use tracing::info;

use crate::cycle::CycleDetector;
use crate::error::GridError;
use crate::grid::Grid;
use crate::seed::SeedSupplier;
use crate::snapshot::Snapshot;
use crate::stepper::{SerialStepper, Stepper};

/// Outcome of one completed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepReport {
    pub generation: u64,
    pub population: usize,
    /// Set when this generation repeats one seen within the detector's history.
    pub cycle_period: Option<u64>,
}

/// Owns everything a run driver needs between steps.
pub struct Simulation {
    grid: Grid,
    stepper: Box<dyn Stepper>,
    cycles: CycleDetector,
    cycle_reported: bool,
}

impl Simulation {
    pub fn new(grid: Grid, stepper: impl Stepper + 'static) -> Self {
        let mut cycles = CycleDetector::default();
        cycles.observe(&grid.snapshot());
        Self { grid, stepper: Box::new(stepper), cycles, cycle_reported: false }
    }

    pub fn serial(grid: Grid) -> Self {
        Self::new(grid, SerialStepper)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.grid.snapshot()
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    /// Advances one generation.
    pub fn advance(&mut self) -> StepReport {
        self.stepper.step(&mut self.grid);

        let snapshot = self.grid.snapshot();
        let cycle_period = self.cycles.observe(&snapshot);
        if let Some(period) = cycle_period {
            if !self.cycle_reported {
                info!(generation = snapshot.generation(), period, "cycle detected");
                self.cycle_reported = true;
            }
        }

        StepReport {
            generation: snapshot.generation(),
            population: snapshot.population(),
            cycle_period,
        }
    }

    /// Advances `steps` generations, returning the last report.
    pub fn run(&mut self, steps: u64) -> Option<StepReport> {
        (0..steps).map(|_| self.advance()).last()
    }

    /// Starts a new run on a grid of the same size, reset to generation 0.
    pub fn restart<S: SeedSupplier>(&mut self, seed: S) -> Result<(), GridError> {
        self.grid = Grid::new(self.grid.width(), self.grid.height(), seed)?;
        self.cycles.reset();
        self.cycles.observe(&self.grid.snapshot());
        self.cycle_reported = false;
        Ok(())
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("grid", &self.grid)
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}
