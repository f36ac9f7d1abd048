//! Tile: per-cell terrain classification.
//!
//! A tile is a closed set of variants, each carrying its display symbol and
//! walkability as data. There is no "absent" tile; every grid cell holds
//! exactly one of these.

use tui_maze_types::{FLOOR_SYMBOL, GOAL_SYMBOL, WALL_SYMBOL};

/// Terrain of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Impassable wall.
    Wall,
    /// Open floor the hero can stand on.
    Floor,
    /// The goal cell; walkable, ends the game when reached.
    Goal,
}

impl Tile {
    /// Display symbol for this tile.
    pub fn symbol(self) -> char {
        match self {
            Tile::Wall => WALL_SYMBOL,
            Tile::Floor => FLOOR_SYMBOL,
            Tile::Goal => GOAL_SYMBOL,
        }
    }

    /// Whether the hero may occupy this tile.
    pub fn is_walkable(self) -> bool {
        match self {
            Tile::Wall => false,
            Tile::Floor | Tile::Goal => true,
        }
    }

    /// Inverse of [`Tile::symbol`], used by text-map loaders.
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            WALL_SYMBOL => Some(Tile::Wall),
            FLOOR_SYMBOL => Some(Tile::Floor),
            GOAL_SYMBOL => Some(Tile::Goal),
            _ => None,
        }
    }
}
