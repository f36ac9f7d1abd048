//! View composition: overlay precedence of floor, goal, footprints, hero.

use tui_maze::core::{Grid, Maze, Tile};
use tui_maze::types::{Direction, FOOTPRINT_SYMBOL, GOAL_SYMBOL, HERO_SYMBOL, WALL_SYMBOL};

/// Open 1x4 corridor with the goal at the far end.
fn corridor(trail_capacity: usize) -> Maze {
    let grid = Grid::from_rows(vec![vec![
        Tile::Floor,
        Tile::Floor,
        Tile::Floor,
        Tile::Goal,
    ]])
    .unwrap();
    let goal = grid.position(0, 3).unwrap();
    let hero = grid.position(0, 0).unwrap();
    Maze::new(grid, goal, hero, trail_capacity).unwrap()
}

#[test]
fn initial_snapshot_shows_hero_and_goal() {
    let maze = corridor(2);
    let snap = maze.snapshot();
    assert!(!snap.won);
    assert_eq!(snap.symbols[1][1], HERO_SYMBOL);
    assert_eq!(snap.symbols[1][4], GOAL_SYMBOL);
    assert_eq!(snap.to_text(), "######\n#@  E#\n######");
}

#[test]
fn footprints_appear_on_vacated_cells_only() {
    let mut maze = corridor(8);
    maze.move_hero(Direction::East);
    maze.move_hero(Direction::East);

    let snap = maze.snapshot();
    assert_eq!(snap.symbols[1][1], FOOTPRINT_SYMBOL);
    assert_eq!(snap.symbols[1][2], FOOTPRINT_SYMBOL);
    assert_eq!(snap.symbols[1][3], HERO_SYMBOL);
    assert_eq!(snap.trail_len, 2);
}

#[test]
fn hero_occludes_goal_when_standing_on_it() {
    let mut maze = corridor(8);
    for _ in 0..3 {
        assert!(maze.move_hero(Direction::East));
    }
    let snap = maze.snapshot();
    assert!(snap.won);
    assert_eq!(snap.symbols[1][4], HERO_SYMBOL);
    assert!(!snap.symbols.iter().flatten().any(|&ch| ch == GOAL_SYMBOL));
}

#[test]
fn hero_takes_precedence_over_its_own_footprint() {
    let grid = Grid::from_rows(vec![vec![Tile::Floor, Tile::Floor, Tile::Goal]]).unwrap();
    let goal = grid.position(0, 2).unwrap();
    let hero = grid.position(0, 0).unwrap();
    let mut maze = Maze::new(grid, goal, hero, 4).unwrap();

    // Step away and back: the start cell is both a footprint and the hero's
    // current position.
    maze.move_hero(Direction::East);
    maze.move_hero(Direction::West);

    let snap = maze.snapshot();
    assert_eq!(snap.symbols[1][1], HERO_SYMBOL);
}

#[test]
fn evicted_footprints_disappear_from_the_view() {
    let mut maze = corridor(1);
    maze.move_hero(Direction::East);
    maze.move_hero(Direction::East);

    let snap = maze.snapshot();
    // Capacity 1: only the most recently vacated cell survives.
    assert_ne!(snap.symbols[1][1], FOOTPRINT_SYMBOL);
    assert_eq!(snap.symbols[1][2], FOOTPRINT_SYMBOL);
}

#[test]
fn snapshot_is_dense_and_border_is_wall() {
    let maze = corridor(0);
    let snap = maze.snapshot();
    assert_eq!(snap.rows(), 3);
    assert_eq!(snap.cols(), 6);
    for row in &snap.symbols {
        assert_eq!(row.len(), 6);
    }
    for c in 0..snap.cols() {
        assert_eq!(snap.symbols[0][c], WALL_SYMBOL);
        assert_eq!(snap.symbols[2][c], WALL_SYMBOL);
    }
}
