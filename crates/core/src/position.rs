//! Position: a (row, col) pair bound to the grid that validated it.
//!
//! Positions are only ever produced by [`Grid`] methods, so their coordinates
//! are in bounds by construction. The binding is an identity token, not a
//! reference: a position never extends the grid's lifetime, and a grid
//! outliving all of its positions is the expected case.

use crate::error::GridError;
use crate::grid::{Grid, GridId};
use tui_maze_types::Direction;

/// An interior grid coordinate, pre-validated against its owning grid.
///
/// Equality is structural on (row, col, grid identity); equal coordinates on
/// two different grids compare unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
    grid: GridId,
}

impl Position {
    pub(crate) fn new(row: usize, col: usize, grid: GridId) -> Self {
        Self { row, col, grid }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Identity of the grid this position was validated against.
    pub fn grid_id(&self) -> GridId {
        self.grid
    }

    /// The position one step away in `dir`, bounds-checked by the owning
    /// grid.
    ///
    /// `Err(OutOfBounds)` here is an expected outcome (a step against the
    /// synthesized border), not a programming error; callers running a turn
    /// loop should treat it as "invalid move". Passing a grid other than the
    /// owning one fails with `ForeignPosition`.
    pub fn neighbor(&self, dir: Direction, grid: &Grid) -> Result<Position, GridError> {
        if self.grid != grid.id() {
            return Err(GridError::ForeignPosition);
        }
        let (dr, dc) = dir.delta();
        grid.position_signed(self.row as isize + dr, self.col as isize + dc)
    }
}
