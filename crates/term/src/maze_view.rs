//! MazeView: maps a core `MazeSnapshot` into a terminal frame.
//!
//! This module is pure (no I/O). The snapshot already contains the complete
//! symbol grid, border included; the view only assigns glyphs and colors,
//! scales cells for the terminal's glyph aspect ratio, and adds the side
//! panel and win overlay.

use crate::fb::{CellStyle, Frame, Rgb};
use tui_maze_core::MazeSnapshot;
use tui_maze_types::{FLOOR_SYMBOL, FOOTPRINT_SYMBOL, GOAL_SYMBOL, HERO_SYMBOL, WALL_SYMBOL};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders a maze snapshot into a [`Frame`].
pub struct MazeView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
    /// Maze cell height in terminal rows.
    cell_h: u16,
}

impl Default for MazeView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl MazeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing frame, resizing is the caller's concern.
    pub fn render_into(&self, snap: &MazeSnapshot, viewport: Viewport, frame: &mut Frame) {
        frame.clear(CellStyle::default());

        let maze_w = snap.cols() as u16 * self.cell_w;
        let maze_h = snap.rows() as u16 * self.cell_h;
        let start_x = viewport.width.saturating_sub(maze_w) / 2;
        let start_y = viewport.height.saturating_sub(maze_h) / 2;

        for (r, row) in snap.symbols.iter().enumerate() {
            for (c, &symbol) in row.iter().enumerate() {
                let px = start_x + c as u16 * self.cell_w;
                let py = start_y + r as u16 * self.cell_h;
                self.draw_cell(frame, px, py, symbol);
            }
        }

        self.draw_side_panel(frame, snap, viewport, start_x, start_y, maze_w);

        if snap.won {
            self.draw_overlay(frame, start_x, start_y, maze_w, maze_h, "YOU WIN");
        }
    }

    /// Convenience helper that allocates a new frame.
    pub fn render(&self, snap: &MazeSnapshot, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut frame);
        frame
    }

    fn draw_cell(&self, frame: &mut Frame, px: u16, py: u16, symbol: char) {
        let (glyph, style) = style_for(symbol);
        // Walls fill the whole cell; everything else sits in the left column
        // of the cell with same-style padding.
        let pad = if symbol == WALL_SYMBOL { glyph } else { ' ' };
        frame.fill_rect(px, py, self.cell_w, self.cell_h, pad, style);
        frame.put_char(px, py, glyph, style);
    }

    fn draw_side_panel(
        &self,
        frame: &mut Frame,
        snap: &MazeSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        maze_w: u16,
    ) {
        let panel_x = start_x.saturating_add(maze_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();
        let hint = CellStyle {
            dim: true,
            ..CellStyle::default()
        };

        let mut y = start_y;
        frame.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        frame.put_str(panel_x, y, &snap.moves.to_string(), value);
        y = y.saturating_add(2);

        frame.put_str(panel_x, y, "TRAIL", label);
        y = y.saturating_add(1);
        let trail = format!("{}/{}", snap.trail_len, snap.trail_capacity);
        frame.put_str(panel_x, y, &trail, value);
        y = y.saturating_add(2);

        frame.put_str(panel_x, y, "arrows/hjkl move", hint);
        y = y.saturating_add(1);
        frame.put_str(panel_x, y, "r restart  q quit", hint);
    }

    fn draw_overlay(
        &self,
        frame: &mut Frame,
        start_x: u16,
        start_y: u16,
        maze_w: u16,
        maze_h: u16,
        text: &str,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 100, 0),
            bold: true,
            dim: false,
        };
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(maze_w.saturating_sub(text_w) / 2);
        let y = start_y.saturating_add(maze_h / 2);
        frame.put_str(x, y, text, style);
    }
}

/// Glyph and color for each display symbol.
fn style_for(symbol: char) -> (char, CellStyle) {
    let floor_bg = Rgb::new(30, 30, 40);
    match symbol {
        WALL_SYMBOL => (
            '█',
            CellStyle {
                fg: Rgb::new(130, 130, 145),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                dim: false,
            },
        ),
        FLOOR_SYMBOL => (
            ' ',
            CellStyle {
                fg: Rgb::new(220, 220, 220),
                bg: floor_bg,
                bold: false,
                dim: false,
            },
        ),
        GOAL_SYMBOL => (
            GOAL_SYMBOL,
            CellStyle {
                fg: Rgb::new(100, 220, 120),
                bg: floor_bg,
                bold: true,
                dim: false,
            },
        ),
        HERO_SYMBOL => (
            HERO_SYMBOL,
            CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: floor_bg,
                bold: true,
                dim: false,
            },
        ),
        FOOTPRINT_SYMBOL => (
            '·',
            CellStyle {
                fg: Rgb::new(150, 150, 160),
                bg: floor_bg,
                bold: false,
                dim: true,
            },
        ),
        other => (other, CellStyle::default()),
    }
}
