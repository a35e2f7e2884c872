//! Breadth-first search over a 2-D grid.

use crate::error::Result;
use crate::grid::Grid;
use std::collections::VecDeque;

/// Cells reachable from (start_row, start_col) through orthogonal moves onto
/// cells accepted by `passable`, in breadth-first visit order.
///
/// The start cell is always part of the result, whether or not it is
/// passable itself. Fails with `InvalidStartCell` if the start lies outside
/// the grid.
#[tracing::instrument(skip(grid, passable), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn grid_breadth_first<T, F>(
    grid: &Grid<T>,
    start_row: usize,
    start_col: usize,
    passable: F,
) -> Result<Vec<(usize, usize)>>
where
    F: Fn(&T) -> bool,
{
    grid.check_start(start_row, start_col)?;

    let mut visited = vec![false; grid.len()];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[grid.index(start_row, start_col)] = true;
    queue.push_back((start_row, start_col));

    while let Some((r, c)) = queue.pop_front() {
        tracing::trace!(row = r, col = c, "visit");
        order.push((r, c));
        for (nr, nc) in grid.neighbors(r, c) {
            let idx = grid.index(nr, nc);
            if !visited[idx] && grid.get(nr, nc).is_some_and(&passable) {
                visited[idx] = true;
                queue.push_back((nr, nc));
            }
        }
    }

    tracing::debug!(visited = order.len(), "grid breadth-first traversal complete");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    fn maze() -> Grid<u8> {
        Grid::from_rows(vec![
            vec![1, 1, 0, 1],
            vec![0, 1, 0, 1],
            vec![1, 1, 1, 1],
            vec![1, 0, 0, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_visits_connected_open_cells() {
        let grid = maze();
        let mut cells = grid_breadth_first(&grid, 0, 0, |&v| v == 1).unwrap();
        assert_eq!(cells.len(), 10);
        cells.sort_unstable();
        assert!(cells.contains(&(0, 3)));
        assert!(cells.contains(&(3, 0)));
        assert!(!cells.contains(&(0, 2)));
    }

    #[test]
    fn test_breadth_first_order() {
        let grid = maze();
        let cells = grid_breadth_first(&grid, 0, 0, |&v| v == 1).unwrap();
        assert_eq!(&cells[..3], &[(0, 0), (0, 1), (1, 1)]);
        // (3, 0) is 5 steps away, (0, 3) is 7
        let near = cells.iter().position(|&c| c == (3, 0)).unwrap();
        let far = cells.iter().position(|&c| c == (0, 3)).unwrap();
        assert!(near < far);
        assert_eq!(cells.last(), Some(&(0, 3)));
    }

    #[test]
    fn test_impassable_start_still_expands() {
        let grid = maze();
        let cells = grid_breadth_first(&grid, 3, 3, |&v| v == 1).unwrap();
        assert_eq!(
            cells,
            vec![
                (3, 3),
                (2, 3),
                (1, 3),
                (2, 2),
                (0, 3),
                (2, 1),
                (1, 1),
                (2, 0),
                (0, 1),
                (3, 0),
                (0, 0)
            ]
        );
    }

    #[test]
    fn test_start_always_included() {
        let grid = Grid::from_rows(vec![vec![0, 0], vec![0, 0]]).unwrap();
        let cells = grid_breadth_first(&grid, 1, 1, |&v| v == 1).unwrap();
        assert_eq!(cells, vec![(1, 1)]);
    }

    #[test]
    fn test_out_of_bounds_start() {
        let grid = maze();
        let err = grid_breadth_first(&grid, 4, 0, |&v| v == 1).unwrap_err();
        assert_eq!(
            err,
            SearchError::InvalidStartCell {
                row: 4,
                col: 0,
                rows: 4,
                cols: 4
            }
        );

        let empty: Grid<u8> = Grid::from_rows(Vec::new()).unwrap();
        assert!(grid_breadth_first(&empty, 0, 0, |_| true).is_err());
    }
}
