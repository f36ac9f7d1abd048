//! Core types shared across the application.
//!
//! This crate contains pure data types with no external dependencies, making
//! them usable in any context (core logic, generators, terminal rendering).

/// Display symbol for a wall tile (both stored walls and the synthesized
/// border ring).
pub const WALL_SYMBOL: char = '#';

/// Display symbol for an open floor tile.
pub const FLOOR_SYMBOL: char = ' ';

/// Display symbol for the goal tile.
pub const GOAL_SYMBOL: char = 'E';

/// Display symbol for the hero.
pub const HERO_SYMBOL: char = '@';

/// Display symbol for a footprint left on a previously visited tile.
pub const FOOTPRINT_SYMBOL: char = '.';

/// The four cardinal move directions.
///
/// Row 0 is the top of the maze, so North decreases the row index and South
/// increases it. East increases the column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The (row, col) delta one step in this direction applies.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Parse a direction from a string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    /// Convert to a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

/// Player-facing commands produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Move(Direction),
    Restart,
}
