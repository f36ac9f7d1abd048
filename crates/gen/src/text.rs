//! Text-map loader for hand-authored mazes.
//!
//! Map format, one character per interior cell (the border is implicit and
//! must not be drawn):
//!
//! ```text
//! @ #
//! # #
//!   E
//! ```
//!
//! `#` wall, space floor, `E` goal, `@` hero start (on floor), `.` floor
//! (footprints in a saved view load as plain floor). All lines must have the
//! same length; ragged maps fail with the grid's `InvalidShape` error.

use std::fs;
use std::path::Path;

use crate::{GenError, GeneratedMaze, MazeSource};
use tui_maze_core::{Grid, Tile};
use tui_maze_types::{FOOTPRINT_SYMBOL, GOAL_SYMBOL, HERO_SYMBOL};

/// Fixed maze strategy backed by a text map.
#[derive(Debug, Clone)]
pub struct TextMaze {
    text: String,
    trail_capacity: usize,
}

impl TextMaze {
    pub fn from_str(text: &str, trail_capacity: usize) -> Self {
        Self {
            text: text.to_owned(),
            trail_capacity,
        }
    }

    pub fn from_path(path: impl AsRef<Path>, trail_capacity: usize) -> Result<Self, GenError> {
        Ok(Self {
            text: fs::read_to_string(path)?,
            trail_capacity,
        })
    }
}

impl MazeSource for TextMaze {
    fn generate(&self) -> Result<GeneratedMaze, GenError> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        let mut hero_at = None;
        let mut goal_at = None;

        for (r, line) in self.text.lines().enumerate() {
            let mut tiles = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let tile = match ch {
                    HERO_SYMBOL => {
                        if hero_at.replace((r, c)).is_some() {
                            return Err(GenError::DuplicateHero { line: r, col: c });
                        }
                        Tile::Floor
                    }
                    GOAL_SYMBOL => {
                        if goal_at.replace((r, c)).is_some() {
                            return Err(GenError::DuplicateGoal { line: r, col: c });
                        }
                        Tile::Goal
                    }
                    FOOTPRINT_SYMBOL => Tile::Floor,
                    other => Tile::from_symbol(other)
                        .ok_or(GenError::UnknownSymbol { line: r, col: c, ch: other })?,
                };
                tiles.push(tile);
            }
            rows.push(tiles);
        }

        let grid = Grid::from_rows(rows)?;
        let (hr, hc) = hero_at.ok_or(GenError::MissingHero)?;
        let (gr, gc) = goal_at.ok_or(GenError::MissingGoal)?;
        let hero = grid.position(hr, hc)?;
        let goal = grid.position(gr, gc)?;
        Ok(GeneratedMaze {
            grid,
            goal,
            hero,
            trail_capacity: self.trail_capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "@ #\n# #\n  E";

    #[test]
    fn parses_hero_goal_and_walls() {
        let generated = TextMaze::from_str(MAP, 2).generate().unwrap();
        assert_eq!(generated.grid.dimensions(), (3, 3));
        assert_eq!((generated.hero.row(), generated.hero.col()), (0, 0));
        assert_eq!((generated.goal.row(), generated.goal.col()), (2, 2));
        assert!(!generated.grid.is_walkable(generated.grid.position(0, 2).unwrap()));
        assert_eq!(generated.trail_capacity, 2);
    }

    #[test]
    fn footprints_load_as_floor() {
        let generated = TextMaze::from_str("@.E", 0).generate().unwrap();
        let mid = generated.grid.position(0, 1).unwrap();
        assert_eq!(generated.grid.tile_at(mid), Tile::Floor);
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert!(matches!(
            TextMaze::from_str("@?E", 0).generate(),
            Err(GenError::UnknownSymbol { line: 0, col: 1, ch: '?' })
        ));
    }

    #[test]
    fn rejects_duplicate_and_missing_markers() {
        assert!(matches!(
            TextMaze::from_str("@@E", 0).generate(),
            Err(GenError::DuplicateHero { .. })
        ));
        assert!(matches!(
            TextMaze::from_str("@EE", 0).generate(),
            Err(GenError::DuplicateGoal { .. })
        ));
        assert!(matches!(
            TextMaze::from_str(" E", 0).generate(),
            Err(GenError::MissingHero)
        ));
        assert!(matches!(
            TextMaze::from_str("@ ", 0).generate(),
            Err(GenError::MissingGoal)
        ));
    }

    #[test]
    fn ragged_maps_fail_shape_validation() {
        assert!(matches!(
            TextMaze::from_str("@#\n#\nE#", 0).generate(),
            Err(GenError::Grid(_))
        ));
    }
}
