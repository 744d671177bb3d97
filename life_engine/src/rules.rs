// rules.rs - Neighbor counting and the Life transition rule

use crate::snapshot::Snapshot;

/// The eight surrounding positions as `(dx, dy)`, top row first.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Counts live neighbors of `(x, y)` in `cells`.
///
/// The grid has hard edges: positions past a border are absent and count as
/// dead, so corners see at most 3 neighbors and edge cells at most 5.
pub fn count_live_neighbors(cells: &Snapshot<'_>, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for &(dx, dy) in &NEIGHBOR_OFFSETS {
        let (Some(nx), Some(ny)) = (
            shift(x, dx, cells.width()),
            shift(y, dy, cells.height()),
        ) else {
            continue;
        };
        if cells.alive(nx, ny) {
            count += 1;
        }
    }
    count
}

fn shift(coord: usize, delta: isize, limit: usize) -> Option<usize> {
    coord.checked_add_signed(delta).filter(|&moved| moved < limit)
}

/// Conway's rule for one cell given its live neighbor count.
#[rustfmt::skip]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match live_neighbors {
        0 | 1 => false, // Underpopulation
        2     => alive, // Survival, or stays dead
        3     => true,  // Survival or birth
        _     => false, // Overpopulation
    }
}

/// State of `(x, y)` in the generation after `cells`.
pub fn evaluate(cells: &Snapshot<'_>, x: usize, y: usize) -> bool {
    next_state(cells.alive(x, y), count_live_neighbors(cells, x, y))
}
