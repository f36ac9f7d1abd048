//! Maze generation strategies.
//!
//! The core never builds its own grid; something on this side of the
//! construction boundary supplies a validated grid, a goal, a hero start,
//! and a trail capacity. This crate provides the strategies: a seeded
//! random carver ([`RandomMaze`]) and a text-map loader ([`TextMaze`]) for
//! hand-authored mazes.

pub mod random;
pub mod text;

use thiserror::Error;
use tui_maze_core::{Grid, GridError, Maze, Position};

pub use random::RandomMaze;
pub use text::TextMaze;

/// Everything the core needs to start a session.
#[derive(Debug)]
pub struct GeneratedMaze {
    pub grid: Grid,
    pub goal: Position,
    pub hero: Position,
    pub trail_capacity: usize,
}

impl GeneratedMaze {
    /// Hand the parts to [`Maze::new`].
    pub fn into_maze(self) -> Result<Maze, GridError> {
        Maze::new(self.grid, self.goal, self.hero, self.trail_capacity)
    }
}

/// A maze generation strategy.
pub trait MazeSource {
    /// Produce a fresh, fully validated set of construction inputs.
    ///
    /// Called once per session; calling it again (e.g. on restart) yields an
    /// equivalent maze for deterministic sources and a fresh one otherwise.
    fn generate(&self) -> Result<GeneratedMaze, GenError>;
}

/// Failures while producing construction inputs.
///
/// These are generator-side programmer or input errors; they surface to
/// whoever configured the source and never reach the turn loop.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("maze dimensions {rows}x{cols} are invalid (need at least 1x1)")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("unknown map symbol {ch:?} at line {line}, column {col}")]
    UnknownSymbol { line: usize, col: usize, ch: char },
    #[error("map declares more than one hero start (line {line}, column {col})")]
    DuplicateHero { line: usize, col: usize },
    #[error("map declares more than one goal (line {line}, column {col})")]
    DuplicateGoal { line: usize, col: usize },
    #[error("map has no hero start ('@')")]
    MissingHero,
    #[error("map has no goal ('E')")]
    MissingGoal,
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("could not read map file: {0}")]
    Io(#[from] std::io::Error),
}
