//! Maze: grid + goal + hero + trail, and the movement state machine.
//!
//! The maze is the only mutable piece of game state. It validates moves
//! against the grid, records footprints for the cells the hero vacates, and
//! composes the rendered view a front end consumes.

use crate::error::GridError;
use crate::grid::Grid;
use crate::position::Position;
use crate::snapshot::MazeSnapshot;
use crate::trail::Trail;
use tui_maze_types::{Direction, FOOTPRINT_SYMBOL, HERO_SYMBOL};

/// Lifecycle of one game session. `Won` is terminal; there is no losing
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeState {
    Playing,
    Won,
}

/// One running game session.
pub struct Maze {
    grid: Grid,
    goal: Position,
    hero: Position,
    trail: Trail,
    state: MazeState,
    moves: u32,
}

impl Maze {
    /// Assemble a session from generator-supplied parts.
    ///
    /// The grid arrives already validated by its own constructor; this checks
    /// the remaining invariants: goal and hero must belong to this grid and
    /// stand on walkable tiles. A hero starting on the goal is legal and the
    /// session begins already won.
    pub fn new(
        grid: Grid,
        goal: Position,
        hero: Position,
        trail_capacity: usize,
    ) -> Result<Self, GridError> {
        for pos in [goal, hero] {
            if pos.grid_id() != grid.id() {
                return Err(GridError::ForeignPosition);
            }
            if !grid.is_walkable(pos) {
                return Err(GridError::NotWalkable {
                    row: pos.row(),
                    col: pos.col(),
                });
            }
        }
        let state = if hero == goal {
            MazeState::Won
        } else {
            MazeState::Playing
        };
        Ok(Self {
            grid,
            goal,
            hero,
            trail: Trail::new(trail_capacity),
            state,
            moves: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn hero(&self) -> Position {
        self.hero
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn is_won(&self) -> bool {
        self.state == MazeState::Won
    }

    pub fn state(&self) -> MazeState {
        self.state
    }

    /// Applied moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Try to step the hero one cell in `dir`.
    ///
    /// Returns true if the move was applied. A step against the border, into
    /// a wall, or after the game is won is rejected and leaves every part of
    /// the state unchanged; none of these surface as errors.
    pub fn move_hero(&mut self, dir: Direction) -> bool {
        if self.state == MazeState::Won {
            return false;
        }
        // A step against the synthesized border is a normal rejected input.
        let Ok(target) = self.hero.neighbor(dir, &self.grid) else {
            return false;
        };
        if !self.grid.is_walkable(target) {
            return false;
        }

        // The vacated cell becomes the footprint, not the destination.
        self.trail.record(self.hero);
        self.hero = target;
        self.moves += 1;

        if self.hero == self.goal {
            self.state = MazeState::Won;
        }
        true
    }

    /// Compose the full display view for this turn.
    ///
    /// Overlay precedence, lowest to highest: grid symbols (border, walls,
    /// floor, goal), footprints, hero. The hero occludes the goal while
    /// standing on it. Grid-local coordinates are shifted by (+1, +1) for the
    /// synthesized border.
    pub fn snapshot(&self) -> MazeSnapshot {
        let mut symbols = self.grid.render();
        for &pos in self.trail.iter() {
            if pos != self.hero {
                symbols[pos.row() + 1][pos.col() + 1] = FOOTPRINT_SYMBOL;
            }
        }
        symbols[self.hero.row() + 1][self.hero.col() + 1] = HERO_SYMBOL;

        MazeSnapshot {
            symbols,
            won: self.is_won(),
            moves: self.moves,
            trail_len: self.trail.len(),
            trail_capacity: self.trail.capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;

    /// Single-column maze: floor, floor, goal from top to bottom.
    fn column_maze(trail_capacity: usize) -> Maze {
        let grid = Grid::from_rows(vec![
            vec![Tile::Floor],
            vec![Tile::Floor],
            vec![Tile::Goal],
        ])
        .unwrap();
        let goal = grid.position(2, 0).unwrap();
        let hero = grid.position(0, 0).unwrap();
        Maze::new(grid, goal, hero, trail_capacity).unwrap()
    }

    #[test]
    fn rejects_goal_on_wall() {
        let grid = Grid::from_rows(vec![vec![Tile::Floor, Tile::Wall]]).unwrap();
        let goal = grid.position(0, 1).unwrap();
        let hero = grid.position(0, 0).unwrap();
        assert_eq!(
            Maze::new(grid, goal, hero, 0).err(),
            Some(GridError::NotWalkable { row: 0, col: 1 })
        );
    }

    #[test]
    fn rejects_positions_from_another_grid() {
        let grid = Grid::from_rows(vec![vec![Tile::Floor]]).unwrap();
        let other = Grid::from_rows(vec![vec![Tile::Floor]]).unwrap();
        let foreign = other.position(0, 0).unwrap();
        let hero = grid.position(0, 0).unwrap();
        assert_eq!(
            Maze::new(grid, foreign, hero, 0).err(),
            Some(GridError::ForeignPosition)
        );
    }

    #[test]
    fn walks_to_the_goal_and_stops() {
        let mut maze = column_maze(1);
        assert!(maze.move_hero(Direction::South));
        assert!(!maze.is_won());
        assert!(maze.move_hero(Direction::South));
        assert!(maze.is_won());

        // Terminal state accepts no further transitions.
        let hero = maze.hero();
        assert!(!maze.move_hero(Direction::South));
        assert!(!maze.move_hero(Direction::North));
        assert_eq!(maze.hero(), hero);
        assert_eq!(maze.moves(), 2);
    }

    #[test]
    fn rejected_moves_change_nothing() {
        let mut maze = column_maze(3);
        let hero = maze.hero();
        assert!(!maze.move_hero(Direction::North));
        assert!(!maze.move_hero(Direction::East));
        assert!(!maze.move_hero(Direction::West));
        assert_eq!(maze.hero(), hero);
        assert!(maze.trail().is_empty());
        assert_eq!(maze.moves(), 0);
    }

    #[test]
    fn footprints_mark_vacated_cells() {
        let mut maze = column_maze(8);
        assert!(maze.move_hero(Direction::South));
        let start = maze.grid().position(0, 0).unwrap();
        assert!(maze.trail().contains(start));
        assert!(!maze.trail().contains(maze.hero()));
    }

    #[test]
    fn hero_starting_on_goal_is_already_won() {
        let grid = Grid::from_rows(vec![vec![Tile::Goal]]).unwrap();
        let pos = grid.position(0, 0).unwrap();
        let maze = Maze::new(grid, pos, pos, 0).unwrap();
        assert!(maze.is_won());
    }
}
