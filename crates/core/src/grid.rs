//! Grid: the rectangular tile field and its structural invariants.
//!
//! Storage is a flat row-major `Vec<Tile>` for cache locality. The exterior
//! border is not stored: callers index only the interior, and
//! [`Grid::render`] synthesizes one ring of wall around it. Invariants
//! (rectangular, at least 1x1, at least one walkable tile) are checked at
//! construction; the grid is immutable afterwards.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::GridError;
use crate::position::Position;
use crate::tile::Tile;
use tui_maze_types::WALL_SYMBOL;

static NEXT_GRID_ID: AtomicU64 = AtomicU64::new(0);

/// Identity token binding positions to the grid that validated them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(u64);

impl GridId {
    fn next() -> Self {
        GridId(NEXT_GRID_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// The interior tile field of a maze.
#[derive(Debug, Clone)]
pub struct Grid {
    id: GridId,
    rows: usize,
    cols: usize,
    /// Flat row-major storage (row * cols + col).
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid from rows of tiles.
    ///
    /// Fails with `InvalidShape` if there are no rows, no columns, or the
    /// rows differ in length, and with `NoWalkableTile` if every tile is a
    /// wall.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::InvalidShape {
                row: 0,
                len: 0,
                expected: 1,
            });
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(GridError::InvalidShape {
                row: 0,
                len: 0,
                expected: 1,
            });
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::InvalidShape {
                    row: r,
                    len: row.len(),
                    expected: cols,
                });
            }
        }

        let tiles: Vec<Tile> = rows.into_iter().flatten().collect();
        if !tiles.iter().any(|t| t.is_walkable()) {
            return Err(GridError::NoWalkableTile);
        }

        Ok(Self {
            id: GridId::next(),
            rows: tiles.len() / cols,
            cols,
            tiles,
        })
    }

    /// Identity of this grid instance.
    pub fn id(&self) -> GridId {
        self.id
    }

    /// Interior dimensions as (rows, cols).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Validate an interior coordinate and bind it to this grid.
    pub fn position(&self, row: usize, col: usize) -> Result<Position, GridError> {
        self.position_signed(row as isize, col as isize)
    }

    /// Bounds-check a possibly negative coordinate.
    ///
    /// Used by [`Position::neighbor`], where stepping to -1 is an ordinary
    /// occurrence.
    pub(crate) fn position_signed(&self, row: isize, col: isize) -> Result<Position, GridError> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(Position::new(row as usize, col as usize, self.id))
    }

    /// The tile at a pre-validated interior position.
    ///
    /// Positions can only be constructed through this grid's validation, so
    /// the lookup itself cannot fail.
    pub fn tile_at(&self, pos: Position) -> Tile {
        debug_assert_eq!(pos.grid_id(), self.id, "position from a different grid");
        self.tiles[pos.row() * self.cols + pos.col()]
    }

    /// Whether the hero may occupy `pos`.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile_at(pos).is_walkable()
    }

    /// All interior positions whose tile is walkable.
    ///
    /// Generators use this to place the hero and goal on valid cells. The
    /// order is unspecified; callers must not depend on it.
    pub fn walkable_positions(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_walkable())
            .map(|(i, _)| Position::new(i / self.cols, i % self.cols, self.id))
            .collect()
    }

    /// Render the full display grid: the stored interior surrounded by one
    /// synthesized ring of wall.
    ///
    /// The output is exactly `(rows + 2) x (cols + 2)` symbols with no absent
    /// cells.
    pub fn render(&self) -> Vec<Vec<char>> {
        let mut out = Vec::with_capacity(self.rows + 2);
        out.push(vec![WALL_SYMBOL; self.cols + 2]);
        for r in 0..self.rows {
            let mut line = Vec::with_capacity(self.cols + 2);
            line.push(WALL_SYMBOL);
            for c in 0..self.cols {
                line.push(self.tiles[r * self.cols + c].symbol());
            }
            line.push(WALL_SYMBOL);
            out.push(line);
        }
        out.push(vec![WALL_SYMBOL; self.cols + 2]);
        out
    }
}

/// Incremental grid construction for generators.
///
/// Cells start unset; `finish` fails with `NullTile` on the first cell that
/// was never assigned, then applies the same invariant checks as
/// [`Grid::from_rows`].
#[derive(Debug, Clone)]
pub struct GridBuilder {
    rows: usize,
    cols: usize,
    tiles: Vec<Option<Tile>>,
}

impl GridBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![None; rows * cols],
        }
    }

    /// Assign a tile. Returns false (and changes nothing) if the coordinate
    /// is out of range.
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.tiles[row * self.cols + col] = Some(tile);
        true
    }

    /// Assign every cell, replacing anything already set.
    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(Some(tile));
    }

    /// Check completeness and hand the tiles to [`Grid::from_rows`].
    pub fn finish(self) -> Result<Grid, GridError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::InvalidShape {
                row: 0,
                len: 0,
                expected: 1,
            });
        }
        let mut rows = Vec::with_capacity(self.rows);
        for r in 0..self.rows {
            let mut line = Vec::with_capacity(self.cols);
            for c in 0..self.cols {
                match self.tiles[r * self.cols + c] {
                    Some(tile) => line.push(tile),
                    None => return Err(GridError::NullTile { row: r, col: c }),
                }
            }
            rows.push(line);
        }
        Grid::from_rows(rows)
    }
}
