//! Seeded random maze carver.
//!
//! A depth-first backtracker over a lattice of "rooms" (even row, even
//! column cells), knocking out the wall between a room and the next. Every
//! carved cell is reachable from the hero start by construction, and the
//! goal is placed at the deepest point of the carve, so generated mazes are
//! always winnable. The same seed always produces the same maze.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::{GenError, GeneratedMaze, MazeSource};
use tui_maze_core::{GridBuilder, Tile};
use tui_maze_types::Direction;

/// Random maze strategy with reproducible output per seed.
#[derive(Debug, Clone, Copy)]
pub struct RandomMaze {
    rows: usize,
    cols: usize,
    trail_capacity: usize,
    seed: u64,
}

impl RandomMaze {
    pub fn new(rows: usize, cols: usize, trail_capacity: usize, seed: u64) -> Self {
        Self {
            rows,
            cols,
            trail_capacity,
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MazeSource for RandomMaze {
    fn generate(&self) -> Result<GeneratedMaze, GenError> {
        let (rows, cols) = (self.rows, self.cols);
        if rows == 0 || cols == 0 {
            return Err(GenError::InvalidDimensions { rows, cols });
        }

        let mut builder = GridBuilder::new(rows, cols);
        builder.fill(Tile::Wall);

        // Rooms sit on even coordinates; odd coordinates are the walls
        // between them.
        let room_cols = cols.div_ceil(2);
        let room_rows = rows.div_ceil(2);
        let mut visited = vec![false; room_rows * room_cols];

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
        visited[0] = true;
        builder.set(0, 0, Tile::Floor);

        // Deepest cell of the carve; becomes the goal.
        let mut far = (0, 0);
        let mut far_depth = 0;

        while let Some(&(r, c)) = stack.last() {
            let depth = stack.len();
            if depth > far_depth {
                far_depth = depth;
                far = (r, c);
            }

            let mut dirs = Direction::ALL;
            dirs.shuffle(&mut rng);

            let mut advanced = false;
            for dir in dirs {
                let (dr, dc) = dir.delta();
                let nr = r as isize + 2 * dr;
                let nc = c as isize + 2 * dc;
                if nr < 0 || nc < 0 || nr as usize >= rows || nc as usize >= cols {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                let room = (nr / 2) * room_cols + nc / 2;
                if visited[room] {
                    continue;
                }
                visited[room] = true;
                builder.set((r as isize + dr) as usize, (c as isize + dc) as usize, Tile::Floor);
                builder.set(nr, nc, Tile::Floor);
                stack.push((nr, nc));
                advanced = true;
                break;
            }
            if !advanced {
                stack.pop();
            }
        }

        builder.set(far.0, far.1, Tile::Goal);
        let grid = builder.finish()?;
        let hero = grid.position(0, 0)?;
        let goal = grid.position(far.0, far.1)?;
        Ok(GeneratedMaze {
            grid,
            goal,
            hero,
            trail_capacity: self.trail_capacity,
        })
    }
}
