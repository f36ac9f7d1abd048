//! Terminal input mapping.
//!
//! Maps `crossterm` key events into [`tui_maze_types::GameCommand`]. The game
//! is strictly turn-based (one key press = one move), so there is no
//! auto-repeat handling; the terminal's own key repeat is enough.

pub mod map;

pub use tui_maze_types as types;

pub use map::{handle_key_event, should_quit};
