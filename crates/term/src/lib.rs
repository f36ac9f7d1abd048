//! Terminal rendering layer.
//!
//! A small game-oriented renderer: the maze view writes styled characters
//! into a [`Frame`], and [`TerminalRenderer`] flushes the whole frame to the
//! terminal once per turn. No widget/layout framework; the view stays pure
//! and unit-testable, the renderer owns all I/O.

pub mod fb;
pub mod maze_view;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{Cell, CellStyle, Frame, Rgb};
pub use maze_view::{MazeView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
