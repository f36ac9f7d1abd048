//! Trail: bounded FIFO footprint history.

use tui_maze::core::{Grid, Tile, Trail};

fn row_grid(cols: usize) -> Grid {
    Grid::from_rows(vec![vec![Tile::Floor; cols]]).unwrap()
}

#[test]
fn size_never_exceeds_capacity() {
    let grid = row_grid(10);
    let mut trail = Trail::new(3);
    for c in 0..10 {
        trail.record(grid.position(0, c).unwrap());
        assert!(trail.len() <= trail.capacity());
    }
    assert_eq!(trail.len(), 3);
}

#[test]
fn eviction_is_strict_fifo() {
    let grid = row_grid(5);
    let mut trail = Trail::new(2);
    for c in 0..5 {
        trail.record(grid.position(0, c).unwrap());
    }
    // Only the two newest survive.
    assert!(!trail.contains(grid.position(0, 2).unwrap()));
    assert!(trail.contains(grid.position(0, 3).unwrap()));
    assert!(trail.contains(grid.position(0, 4).unwrap()));

    let order: Vec<usize> = trail.iter().map(|p| p.col()).collect();
    assert_eq!(order, vec![3, 4]);
}

#[test]
fn revisited_positions_occupy_independent_slots() {
    let grid = row_grid(3);
    let a = grid.position(0, 0).unwrap();
    let b = grid.position(0, 1).unwrap();

    let mut trail = Trail::new(3);
    trail.record(a);
    trail.record(b);
    trail.record(a);
    assert_eq!(trail.len(), 3);

    // Evicting the oldest `a` does not remove the newer one.
    trail.record(grid.position(0, 2).unwrap());
    assert!(trail.contains(a));
}

#[test]
fn capacity_zero_disables_tracking() {
    let grid = row_grid(1);
    let pos = grid.position(0, 0).unwrap();
    let mut trail = Trail::new(0);
    trail.record(pos);
    assert_eq!(trail.len(), 0);
    assert_eq!(trail.capacity(), 0);
    assert!(!trail.contains(pos));
}

#[test]
fn contains_is_structural_on_coordinates() {
    let grid = row_grid(2);
    let mut trail = Trail::new(2);
    trail.record(grid.position(0, 1).unwrap());
    // A fresh Position with the same coordinates from the same grid matches.
    assert!(trail.contains(grid.position(0, 1).unwrap()));
    assert!(!trail.contains(grid.position(0, 0).unwrap()));
}
