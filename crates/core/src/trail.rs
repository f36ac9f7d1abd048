//! Trail: bounded FIFO history of visited positions.
//!
//! The capacity is fixed at construction. Eviction happens inside `record`,
//! so `len() <= capacity()` holds at every point and callers never truncate
//! by hand. Capacity 0 disables footprint tracking entirely.

use std::collections::VecDeque;

use crate::position::Position;

/// Ring of the most recently vacated cells, oldest first.
#[derive(Debug, Clone)]
pub struct Trail {
    capacity: usize,
    cells: VecDeque<Position>,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            cells: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a footprint, evicting the oldest one first when full.
    ///
    /// A position visited twice occupies two independent slots and ages
    /// independently. With capacity 0 this is a no-op.
    pub fn record(&mut self, pos: Position) {
        if self.capacity == 0 {
            return;
        }
        if self.cells.len() == self.capacity {
            self.cells.pop_front();
        }
        self.cells.push_back(pos);
    }

    /// Whether any retained footprint equals `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained footprints, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }
}
