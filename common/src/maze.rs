pub mod features;
pub mod maker;

use std::fmt;

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{COLS, FLOWER_CHANCE, ROWS},
    error::MazeError,
    grid::{Cell, Grid},
    tile::Tile,
};

use maker::MazeMaker;

/// Below this the fixed feature positions start to overlap each other.
pub const MIN_LAYOUT_SIZE: usize = 7;
pub const START: Cell = Cell::new(1, 1);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeSettings {
    pub rows: usize,
    pub cols: usize,
    pub flower_chance: f64,
    pub note_count: usize,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            flower_chance: FLOWER_CHANCE,
            note_count: 0,
        }
    }
}

impl MazeSettings {
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.rows < MIN_LAYOUT_SIZE || self.cols < MIN_LAYOUT_SIZE {
            return Err(MazeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Where the fixed features go on a grid of a given size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub spawn: Cell,
    pub sign: Cell,
    pub pot: Cell,
    pub chest: Cell,
    pub approaches: [Cell; 4],
}

impl Layout {
    pub fn new(rows: usize, cols: usize) -> Self {
        let spawn = Cell::new(rows / 2, cols / 2);

        Self {
            spawn,
            sign: Cell::new(spawn.row, spawn.col + 1),
            pot: START,
            chest: Cell::new(rows - 2, cols - 2),
            approaches: [
                Cell::new(1, 2),
                Cell::new(2, 1),
                Cell::new(rows - 2, cols - 3),
                Cell::new(rows - 3, cols - 2),
            ],
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Maze {
    pub grid: Grid,
    pub layout: Layout,
    pub notes_placed: usize,
}

impl Maze {
    /// Carves the maze, then overlays decoration and features. Each step
    /// runs after, and wins over, the ones before it.
    pub fn generate<R: Rng + ?Sized>(settings: &MazeSettings, rng: &mut R) -> Result<Self, MazeError> {
        settings.validate()?;

        let mut grid = MazeMaker::new(settings.rows, settings.cols, START, rng)?.carve();
        debug!(
            "carved {}x{} maze with {} open cells",
            settings.rows,
            settings.cols,
            grid.count(Tile::Empty)
        );

        let layout = Layout::new(settings.rows, settings.cols);

        features::decorate(&mut grid, settings.flower_chance, rng);
        features::clear_spawn(&mut grid, layout.spawn);
        features::place_features(&mut grid, &layout);

        let notes_placed = match features::scatter_notes(&mut grid, settings.note_count, layout.spawn, rng) {
            Ok(placed) => placed,
            Err(MazeError::NotePlacementExhausted { placed, requested }) => {
                warn!("only found room for {} of {} memory notes", placed, requested);
                placed
            }
            Err(e) => return Err(e),
        };
        debug!("placed {} memory notes", notes_placed);

        Ok(Self {
            grid,
            layout,
            notes_placed,
        })
    }

    pub fn log(&self) -> String {
        self.grid.log()
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn generate(settings: &MazeSettings, seed: u64) -> Maze {
        let mut rng = StdRng::seed_from_u64(seed);
        Maze::generate(settings, &mut rng).expect("settings should be valid")
    }

    fn walkable_from(grid: &Grid, start: Cell) -> Vec<Vec<bool>> {
        let mut visited = vec![vec![false; grid.cols()]; grid.rows()];
        let mut queue = VecDeque::new();
        visited[start.row][start.col] = true;
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            for (dr, dc) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
                let Some(next) = cell.offset(dr, dc) else {
                    continue;
                };
                let open = grid.get(next).is_some_and(|tile| !tile.is_solid());
                if open && !visited[next.row][next.col] {
                    visited[next.row][next.col] = true;
                    queue.push_back(next);
                }
            }
        }

        visited
    }

    fn is_next_to_reachable(reachable: &[Vec<bool>], cell: Cell) -> bool {
        [(0, 1), (0, -1), (1, 0), (-1, 0)].iter().any(|&(dr, dc)| {
            cell.offset(dr, dc)
                .is_some_and(|next| reachable.get(next.row).and_then(|r| r.get(next.col)) == Some(&true))
        })
    }

    #[test]
    fn observed_instance_has_features_in_fixed_places() {
        for seed in 0..16 {
            let maze = generate(&MazeSettings::default(), seed);
            let grid = &maze.grid;

            assert_eq!(grid.center(), Cell::new(10, 15));
            for (row, col) in [(9, 14), (9, 15), (9, 16), (10, 14), (10, 15), (11, 14), (11, 15), (11, 16)] {
                assert_eq!(grid.get(Cell::new(row, col)), Some(Tile::Empty), "({row}, {col}) should be clear");
            }
            assert_eq!(grid.get(Cell::new(10, 16)), Some(Tile::Sign));
            assert_eq!(grid.get(Cell::new(1, 1)), Some(Tile::Pot));
            assert_eq!(grid.get(Cell::new(18, 28)), Some(Tile::Chest));
            for cell in maze.layout.approaches {
                assert_eq!(grid.get(cell), Some(Tile::Empty));
            }
        }
    }

    #[test]
    fn features_are_reachable_from_the_spawn() {
        let sizes = [(20, 30), (21, 31), (7, 7), (8, 12), (15, 9)];
        for (rows, cols) in sizes {
            let settings = MazeSettings {
                rows,
                cols,
                flower_chance: 0.3,
                note_count: 2,
            };
            for seed in 0..32 {
                let maze = generate(&settings, seed);
                let reachable = walkable_from(&maze.grid, maze.layout.spawn);
                let Layout { sign, pot, chest, .. } = maze.layout;

                assert!(reachable[sign.row][sign.col], "sign unreachable:\n{}", maze);
                assert!(reachable[pot.row][pot.col], "pot unreachable:\n{}", maze);
                assert!(is_next_to_reachable(&reachable, chest), "chest unreachable:\n{}", maze);

                for (cell, tile) in maze.grid.iter() {
                    if !tile.is_solid() {
                        assert!(reachable[cell.row][cell.col], "{:?} unreachable:\n{}", cell, maze);
                    }
                }
            }
        }
    }

    #[test]
    fn there_is_exactly_one_of_each_feature() {
        let maze = generate(&MazeSettings::default(), 5);
        assert_eq!(maze.grid.count(Tile::Sign), 1);
        assert_eq!(maze.grid.count(Tile::Pot), 1);
        assert_eq!(maze.grid.count(Tile::Chest), 1);
    }

    #[test]
    fn requested_notes_are_placed_away_from_the_spawn() {
        let settings = MazeSettings {
            note_count: 4,
            ..MazeSettings::default()
        };
        let maze = generate(&settings, 9);
        assert_eq!(maze.notes_placed, 4);
        assert_eq!(maze.grid.count(Tile::Note), 4);
    }

    #[test]
    fn impossible_note_counts_degrade_instead_of_failing() {
        let settings = MazeSettings {
            rows: 7,
            cols: 7,
            flower_chance: 0.0,
            note_count: 500,
        };
        let maze = generate(&settings, 1);
        assert!(maze.notes_placed < 500);
        assert_eq!(maze.grid.count(Tile::Note), maze.notes_placed);
    }

    #[test]
    fn flower_chance_of_zero_leaves_no_flowers() {
        let settings = MazeSettings {
            flower_chance: 0.0,
            ..MazeSettings::default()
        };
        assert_eq!(generate(&settings, 2).grid.count(Tile::Flower), 0);
    }

    #[test]
    fn rejects_layouts_that_do_not_fit() {
        let mut rng = StdRng::seed_from_u64(0);
        let settings = MazeSettings {
            rows: 6,
            cols: 30,
            ..MazeSettings::default()
        };
        assert_eq!(
            Maze::generate(&settings, &mut rng).err(),
            Some(MazeError::InvalidDimensions { rows: 6, cols: 30 })
        );
    }
}
