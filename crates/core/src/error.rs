//! Error taxonomy for grid and maze construction.
//!
//! Construction-time invariant violations (`NullTile`, `InvalidShape`,
//! `NoWalkableTile`, `NotWalkable`, `ForeignPosition`) are fatal: no partial
//! grid or maze is ever observable. `OutOfBounds` is different in kind: it is
//! the normal outcome of stepping against the synthesized border, and
//! [`Maze::move_hero`](crate::Maze::move_hero) converts it into a rejected
//! move instead of surfacing it.

use thiserror::Error;

/// Errors raised while building a [`Grid`](crate::Grid) or
/// [`Maze`](crate::Maze), or by bounds-checked position queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A builder cell was never assigned a tile.
    #[error("no tile was placed at row {row}, column {col}")]
    NullTile { row: usize, col: usize },

    /// The tile rows do not form a rectangle of at least 1x1.
    #[error("row {row} has {len} tiles, expected {expected}")]
    InvalidShape {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// Every tile in the grid is a wall.
    #[error("grid contains no walkable tile")]
    NoWalkableTile,

    /// A coordinate falls outside the interior of the grid.
    #[error("({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: isize,
        col: isize,
        rows: usize,
        cols: usize,
    },

    /// A hero or goal position points at a wall.
    #[error("({row}, {col}) is not walkable")]
    NotWalkable { row: usize, col: usize },

    /// A position created by one grid was handed to another.
    #[error("position belongs to a different grid")]
    ForeignPosition,
}

impl GridError {
    /// True for the one error kind a game loop should treat as a normal
    /// rejected move rather than a construction failure.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, GridError::OutOfBounds { .. })
    }
}
