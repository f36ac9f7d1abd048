//! Core maze model - pure, synchronous, and testable
//!
//! This crate holds the spatial/state model of the game and nothing else: no
//! UI, no I/O, no timing. Everything here is a terminating state transition
//! or query, exclusively owned by one game session.
//!
//! # Module Structure
//!
//! - [`tile`]: closed set of terrain variants carrying symbol + walkability
//! - [`grid`]: rectangular tile field, structural invariants, border synthesis
//! - [`position`]: (row, col) bound to the grid that validated it
//! - [`trail`]: bounded FIFO history of vacated cells
//! - [`maze`]: movement state machine and view composition
//! - [`snapshot`]: the flat display view handed to front ends
//! - [`error`]: construction-time error taxonomy
//!
//! # The implicit border
//!
//! Grids store only their interior. The minimum maze is a single floor tile,
//! which renders as:
//!
//! ```text
//! ###
//! #@#
//! ###
//! ```
//!
//! The ring of `#` is synthesized at render time; stepping into it is a
//! normal rejected move, not an error.
//!
//! # Example
//!
//! ```
//! use tui_maze_core::{Grid, Maze, Tile};
//! use tui_maze_types::Direction;
//!
//! let grid = Grid::from_rows(vec![
//!     vec![Tile::Floor, Tile::Floor],
//!     vec![Tile::Wall, Tile::Goal],
//! ])?;
//! let hero = grid.position(0, 0)?;
//! let goal = grid.position(1, 1)?;
//! let mut maze = Maze::new(grid, goal, hero, 4)?;
//!
//! assert!(maze.move_hero(Direction::East));
//! assert!(!maze.move_hero(Direction::North)); // border step: rejected
//! assert!(maze.move_hero(Direction::South));
//! assert!(maze.is_won());
//! # Ok::<(), tui_maze_core::GridError>(())
//! ```

pub mod error;
pub mod grid;
pub mod maze;
pub mod position;
pub mod snapshot;
pub mod tile;
pub mod trail;

pub use error::GridError;
pub use grid::{Grid, GridBuilder, GridId};
pub use maze::{Maze, MazeState};
pub use position::Position;
pub use snapshot::MazeSnapshot;
pub use tile::Tile;
pub use trail::Trail;
