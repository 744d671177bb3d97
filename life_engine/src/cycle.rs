// cycle.rs - Detects recently repeated generations by hash

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::snapshot::Snapshot;

/// Remembers the hashes of the last few generations seen.
///
/// A match means the board has (almost certainly) repeated: a still life
/// reports period 1, a blinker period 2. Periods longer than the history
/// capacity go unnoticed.
#[derive(Clone, Debug)]
pub struct CycleDetector {
    history: Vec<(u64, u64)>, // (hash, generation)
    capacity: usize,
    cursor: usize,
}

impl CycleDetector {
    pub const DEFAULT_CAPACITY: usize = 10;

    pub fn new(capacity: usize) -> Self {
        Self { history: Vec::with_capacity(capacity), capacity: capacity.max(1), cursor: 0 }
    }

    /// Records `snapshot`; returns the period if it matches a remembered generation.
    pub fn observe(&mut self, snapshot: &Snapshot<'_>) -> Option<u64> {
        let hash = hash_cells(snapshot);
        let generation = snapshot.generation();

        let period = self
            .history
            .iter()
            .filter(|&&(seen, at)| seen == hash && at < generation)
            .map(|&(_, at)| generation - at)
            .min();

        if self.history.len() < self.capacity {
            self.history.push((hash, generation));
        } else {
            self.history[self.cursor] = (hash, generation);
        }
        self.cursor = (self.cursor + 1) % self.capacity;

        period
    }

    pub fn reset(&mut self) {
        self.history.clear();
        self.cursor = 0;
    }
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

fn hash_cells(snapshot: &Snapshot<'_>) -> u64 {
    let mut hasher = DefaultHasher::new();
    snapshot.width().hash(&mut hasher);
    snapshot.cells().hash(&mut hasher);
    hasher.finish()
}
