// stepper.rs - Generation advance: evaluate every cell, then publish

use std::io;
use std::panic;
use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::grid::Grid;
use crate::rules;
use crate::snapshot::Snapshot;

/// Drives one full generation advance of a [`Grid`].
///
/// Implementations read only the current generation, write only the next
/// buffer, and publish once every cell has been evaluated. Callers never see
/// a half-advanced grid.
pub trait Stepper {
    fn step(&mut self, grid: &mut Grid);
}

/// Single pass over the grid in row-major order.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerialStepper;

impl Stepper for SerialStepper {
    fn step(&mut self, grid: &mut Grid) {
        {
            let (current, next) = grid.split_for_step();
            let width = current.width();
            for y in 0..current.height() {
                for x in 0..width {
                    next[y * width + x] = rules::evaluate(&current, x, y);
                }
            }
        }
        grid.publish();
    }
}

/// Evaluates each row as its own tokio task, yielding after every cell.
///
/// All row tasks read the same frozen copy of the current generation; the
/// rows are written into the next buffer only after every task has finished.
pub struct RowCoroutineStepper {
    runtime: Runtime,
}

impl RowCoroutineStepper {
    pub fn new() -> io::Result<Self> {
        Ok(Self::with_runtime(Runtime::new()?))
    }

    pub fn with_runtime(runtime: Runtime) -> Self {
        Self { runtime }
    }
}

/// Row coroutine: computes one row of the next generation.
async fn process_row(row: usize, width: usize, height: usize, frozen: Arc<[bool]>) -> (usize, Vec<bool>) {
    let current = Snapshot::new(width, height, 0, &frozen);
    let mut row_result = Vec::with_capacity(width);
    for x in 0..width {
        row_result.push(rules::evaluate(&current, x, row));
        tokio::task::yield_now().await; // Cooperative yielding
    }
    (row, row_result)
}

impl Stepper for RowCoroutineStepper {
    fn step(&mut self, grid: &mut Grid) {
        let (width, height) = (grid.width(), grid.height());
        let frozen: Arc<[bool]> = Arc::from(grid.snapshot().cells());

        let rows = self.runtime.block_on(async move {
            let handles: Vec<_> = (0..height)
                .map(|row| tokio::spawn(process_row(row, width, height, Arc::clone(&frozen))))
                .collect();

            let mut rows = Vec::with_capacity(height);
            for handle in handles {
                match handle.await {
                    Ok(completed) => rows.push(completed),
                    Err(err) if err.is_panic() => panic::resume_unwind(err.into_panic()),
                    Err(err) => unreachable!("row task cancelled while its runtime was alive: {err}"),
                }
            }
            rows
        });

        // Every row task has completed; only now touch the next buffer.
        let next = grid.next_mut();
        for (row, cells) in rows {
            next[row * width..(row + 1) * width].copy_from_slice(&cells);
        }
        grid.publish();
    }
}

impl std::fmt::Debug for RowCoroutineStepper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowCoroutineStepper").finish_non_exhaustive()
    }
}
