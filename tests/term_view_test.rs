//! MazeView: snapshot-to-frame mapping.

use tui_maze::core::{Grid, Maze, Tile};
use tui_maze::term::{MazeView, Viewport};
use tui_maze::types::Direction;

fn corridor(trail_capacity: usize) -> Maze {
    let grid = Grid::from_rows(vec![vec![Tile::Floor, Tile::Floor, Tile::Goal]]).unwrap();
    let goal = grid.position(0, 2).unwrap();
    let hero = grid.position(0, 0).unwrap();
    Maze::new(grid, goal, hero, trail_capacity).unwrap()
}

#[test]
fn border_walls_render_as_blocks_at_the_frame_origin() {
    let maze = corridor(0);
    let snap = maze.snapshot();
    let view = MazeView::default();

    // Snapshot is 3x5 symbols; cells are 2x1 => 10x3 frame, no centering
    // slack.
    let frame = view.render(&snap, Viewport::new(10, 3));
    assert_eq!(frame.get(0, 0).unwrap().ch, '█');
    assert_eq!(frame.get(1, 0).unwrap().ch, '█');
    assert_eq!(frame.get(9, 2).unwrap().ch, '█');
}

#[test]
fn hero_renders_at_the_shifted_cell() {
    let maze = corridor(0);
    let view = MazeView::default();
    let frame = view.render(&maze.snapshot(), Viewport::new(10, 3));

    // Hero is at symbol (1, 1): terminal x = 1 * 2, y = 1.
    let cell = frame.get(2, 1).unwrap();
    assert_eq!(cell.ch, '@');
    assert!(cell.style.bold);
    // Padding column keeps the floor background, not a glyph.
    assert_eq!(frame.get(3, 1).unwrap().ch, ' ');
}

#[test]
fn maze_is_centered_in_large_viewports() {
    let maze = corridor(0);
    let view = MazeView::default();
    let frame = view.render(&maze.snapshot(), Viewport::new(30, 13));

    // start_x = (30 - 10) / 2 = 10, start_y = (13 - 3) / 2 = 5.
    assert_eq!(frame.get(10, 5).unwrap().ch, '█');
    assert_eq!(frame.get(0, 0).unwrap().ch, ' ');
}

#[test]
fn win_overlay_appears_only_after_winning() {
    let mut maze = corridor(0);
    let view = MazeView::default();

    let before = view.render(&maze.snapshot(), Viewport::new(40, 9));
    assert!(!before.to_text().contains("YOU WIN"));

    assert!(maze.move_hero(Direction::East));
    assert!(maze.move_hero(Direction::East));
    let after = view.render(&maze.snapshot(), Viewport::new(40, 9));
    assert!(maze.is_won());
    assert!(after.to_text().contains("YOU WIN"));
}

#[test]
fn side_panel_shows_move_and_trail_counters() {
    let mut maze = corridor(5);
    maze.move_hero(Direction::East);
    let view = MazeView::default();

    let frame = view.render(&maze.snapshot(), Viewport::new(60, 9));
    let text = frame.to_text();
    assert!(text.contains("MOVES"));
    assert!(text.contains("TRAIL"));
    assert!(text.contains("1/5"));
}

#[test]
fn panel_is_skipped_when_the_viewport_is_too_narrow() {
    let maze = corridor(5);
    let view = MazeView::default();
    let frame = view.render(&maze.snapshot(), Viewport::new(10, 3));
    assert!(!frame.to_text().contains("MOVES"));
}
