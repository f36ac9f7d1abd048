//! TUI Maze (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them under the stable `tui_maze::{core,gen,input,term,types}`
//! paths used by the binary and the integration tests.

pub use tui_maze_core as core;
pub use tui_maze_gen as gen;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
