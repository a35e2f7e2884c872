//! Island counting (connected land regions in a grid).
//!
//! Scans cells in row-major order. Each unvisited land cell starts a new
//! island, and a 4-directional flood fill marks the rest of that island so
//! it is not counted again.
//!
//! The input grid is never modified: flood fill "sinks" land in a private
//! copy of the land mask instead.

use crate::grid::{Grid, Terrain};
use crate::strategy::FloodFill;
use std::collections::VecDeque;

/// Number of islands in `grid`.
///
/// Returns 0 for an empty grid or a grid with no land.
///
/// Time: O(rows * cols). Space: O(rows * cols) for the land mask.
pub fn count_islands(grid: &Grid<Terrain>, strategy: FloodFill) -> usize {
    island_sizes(grid, strategy).len()
}

/// Cell count of every island, in the order their first cell is scanned.
#[tracing::instrument(skip(grid), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn island_sizes(grid: &Grid<Terrain>, strategy: FloodFill) -> Vec<usize> {
    // true = land not yet sunk
    let mut land = grid.map(|t| t.is_land());
    let mut sizes = Vec::new();

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            if land.get(r, c) == Some(&true) {
                let size = match strategy {
                    FloodFill::DepthFirst => sink_depth_first(&mut land, r, c),
                    FloodFill::BreadthFirst => sink_breadth_first(&mut land, r, c),
                };
                tracing::trace!(row = r, col = c, size, "island");
                sizes.push(size);
            }
        }
    }

    tracing::debug!(islands = sizes.len(), "island scan complete");
    sizes
}

/// Sink the island containing (row, col) with an explicit stack.
/// Returns how many cells were sunk.
fn sink_depth_first(land: &mut Grid<bool>, row: usize, col: usize) -> usize {
    let mut sunk = 0;
    let mut stack = vec![(row, col)];

    while let Some((r, c)) = stack.pop() {
        // Water, already sunk, or out of bounds: nothing to do
        if !take_land(land, r, c) {
            continue;
        }
        sunk += 1;
        stack.extend(land.neighbors(r, c));
    }

    sunk
}

/// Sink the island containing (row, col) with a FIFO queue.
/// Cells are sunk when enqueued so none is queued twice.
fn sink_breadth_first(land: &mut Grid<bool>, row: usize, col: usize) -> usize {
    if !take_land(land, row, col) {
        return 0;
    }
    let mut sunk = 1;
    let mut queue = VecDeque::from([(row, col)]);

    while let Some((r, c)) = queue.pop_front() {
        let next: Vec<_> = land.neighbors(r, c).collect();
        for (nr, nc) in next {
            if take_land(land, nr, nc) {
                sunk += 1;
                queue.push_back((nr, nc));
            }
        }
    }

    sunk
}

/// Turn a land cell into water. Returns whether it was land.
fn take_land(land: &mut Grid<bool>, row: usize, col: usize) -> bool {
    if !land.contains(row, col) {
        return false;
    }
    let idx = land.index(row, col);
    std::mem::replace(&mut land.cells_mut()[idx], false)
}
