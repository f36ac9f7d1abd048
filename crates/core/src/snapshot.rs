//! MazeSnapshot: the flat view handed to front ends.
//!
//! A snapshot is plain data with no back-reference into the maze, so a
//! presentation layer can hold onto it across a redraw without borrowing the
//! game state.

/// Fully composed display state for one turn.
///
/// `symbols` is a dense `(rows + 2) x (cols + 2)` grid including the
/// synthesized wall border; every cell holds a display symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeSnapshot {
    pub symbols: Vec<Vec<char>>,
    pub won: bool,
    /// Applied moves so far (rejected moves are not counted).
    pub moves: u32,
    pub trail_len: usize,
    pub trail_capacity: usize,
}

impl MazeSnapshot {
    /// Rendered height, border included.
    pub fn rows(&self) -> usize {
        self.symbols.len()
    }

    /// Rendered width, border included.
    pub fn cols(&self) -> usize {
        self.symbols.first().map_or(0, |row| row.len())
    }

    /// Flatten the symbol grid into newline-separated text.
    ///
    /// Convenient for tests and plain-stdout front ends.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));
        for (i, row) in self.symbols.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}
