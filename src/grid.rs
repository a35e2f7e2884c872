//! Rectangular row-major grid.

use crate::error::{Result, SearchError};
use serde::Deserialize;

/// 4 directions: up, down, left, right
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Rectangular grid stored row-major. All rows have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build from nested rows. Fails on ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Grid<T>> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(n_rows * n_cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(SearchError::invalid_argument(format!(
                    "malformed grid: row {r} has {} cells, expected {n_cols}",
                    row.len()
                )));
            }
            cells.extend(row);
        }
        Ok(Grid {
            rows: n_rows,
            cols: n_cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when there are no cells (no rows, or rows of length zero).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Row-major index of a cell. Caller guarantees bounds.
    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[cfg(feature = "islands")]
    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// In-bounds orthogonal neighbours of (row, col).
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.contains(r, c).then_some((r, c))
        })
    }

    /// Apply `f` to every cell, keeping the shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Fail with `InvalidStartCell` unless (row, col) is inside the grid.
    pub(crate) fn check_start(&self, row: usize, col: usize) -> Result<()> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(SearchError::InvalidStartCell {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }
}

/// Land/water marker for island counting.
///
/// Accepts `"1"`/`"0"`, `1`/`0` and `true`/`false` when deserialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCell")]
pub enum Terrain {
    Land,
    Water,
}

impl Terrain {
    pub fn is_land(self) -> bool {
        self == Terrain::Land
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCell {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl TryFrom<RawCell> for Terrain {
    type Error = SearchError;

    fn try_from(raw: RawCell) -> Result<Self> {
        match raw {
            RawCell::Bool(true) | RawCell::Int(1) => Ok(Terrain::Land),
            RawCell::Bool(false) | RawCell::Int(0) => Ok(Terrain::Water),
            RawCell::Str(s) => s.parse(),
            RawCell::Int(n) => Err(SearchError::invalid_argument(format!(
                "unrecognised terrain cell: {n}"
            ))),
        }
    }
}

impl std::str::FromStr for Terrain {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" => Ok(Terrain::Land),
            "0" => Ok(Terrain::Water),
            other => Err(SearchError::invalid_argument(format!(
                "unrecognised terrain cell: {other:?}"
            ))),
        }
    }
}

impl Grid<Terrain> {
    /// Parse rows of `"1"`/`"0"` strings.
    pub fn parse_terrain<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Grid<Terrain>> {
        let parsed = rows
            .iter()
            .map(|row| row.iter().map(|c| c.as_ref().parse()).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Grid::from_rows(parsed)
    }
}
