mod backtrack;

use rand::{Rng, seq::IndexedRandom};

use crate::{
    error::MazeError,
    grid::{Cell, Grid},
    tile::Tile,
};

use backtrack::Backtrack;

pub const MIN_CARVE_SIZE: usize = 3;

/// Carves a perfect maze into a grid of holes. Rooms sit two cells apart and
/// the cell between two rooms is opened when the carve passes through it.
pub struct MazeMaker<'a, R: Rng + ?Sized> {
    pub grid: Grid,
    rng: &'a mut R,
    start: Cell,
}

impl<'a, R: Rng + ?Sized> MazeMaker<'a, R> {
    pub fn new(rows: usize, cols: usize, start: Cell, rng: &'a mut R) -> Result<Self, MazeError> {
        if rows < MIN_CARVE_SIZE || cols < MIN_CARVE_SIZE {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }

        let interior = |i: usize, len: usize| i >= 1 && i + 1 < len;
        if !interior(start.row, rows) || !interior(start.col, cols) {
            return Err(MazeError::InvalidStart {
                row: start.row,
                col: start.col,
            });
        }

        Ok(Self {
            grid: Grid::new(rows, cols, Tile::Hole),
            rng,
            start,
        })
    }

    pub fn carve(mut self) -> Grid {
        self.backtrack();
        self.grid
    }

    // Up, down, left, right: the order only matters for reproducing a seed.
    fn get_unvisited_neighbors(&self, cell: Cell) -> Vec<Cell> {
        let directions = [(-2, 0), (2, 0), (0, -2), (0, 2)];
        let rows = self.grid.rows() as isize;
        let cols = self.grid.cols() as isize;

        directions
            .iter()
            .filter_map(|&(dr, dc)| {
                let nr = cell.row as isize + dr;
                let nc = cell.col as isize + dc;

                // Keep at least one cell of border.
                let in_bounds = nr > 0 && nr < rows - 1 && nc > 0 && nc < cols - 1;
                if !in_bounds {
                    return None;
                }

                let neighbor = Cell::new(nr as usize, nc as usize);
                (!self.is_visited(neighbor)).then_some(neighbor)
            })
            .collect()
    }

    fn pick_neighbor(&mut self, cell: Cell) -> Option<Cell> {
        let neighbors = self.get_unvisited_neighbors(cell);
        neighbors.choose(&mut *self.rng).copied()
    }

    fn visit_cell(&mut self, cell: Cell) {
        self.grid.set(cell, Tile::Empty);
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.grid.get(cell) != Some(Tile::Hole)
    }

    fn remove_wall_between(&mut self, cell_1: Cell, cell_2: Cell) {
        let row = (cell_1.row + cell_2.row) / 2;
        let col = (cell_1.col + cell_2.col) / 2;
        self.grid.set(Cell::new(row, col), Tile::Empty);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn carve(rows: usize, cols: usize, seed: u64) -> Grid {
        let mut rng = StdRng::seed_from_u64(seed);
        MazeMaker::new(rows, cols, Cell::new(1, 1), &mut rng)
            .expect("dimensions should be valid")
            .carve()
    }

    fn open_cells(grid: &Grid) -> Vec<Cell> {
        grid.iter()
            .filter(|&(_, tile)| tile == Tile::Empty)
            .map(|(cell, _)| cell)
            .collect()
    }

    fn count_reachable(grid: &Grid, start: Cell) -> usize {
        let mut visited = vec![vec![false; grid.cols()]; grid.rows()];
        let mut queue = VecDeque::new();
        let mut count = 0;

        visited[start.row][start.col] = true;
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            count += 1;
            for (dr, dc) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
                let Some(next) = cell.offset(dr, dc) else {
                    continue;
                };
                if grid.get(next) == Some(Tile::Empty) && !visited[next.row][next.col] {
                    visited[next.row][next.col] = true;
                    queue.push_back(next);
                }
            }
        }

        count
    }

    fn count_adjacent_pairs(grid: &Grid) -> usize {
        open_cells(grid)
            .iter()
            .map(|cell| {
                [(0, 1), (1, 0)]
                    .iter()
                    .filter(|&&(dr, dc)| {
                        cell.offset(dr, dc)
                            .is_some_and(|next| grid.get(next) == Some(Tile::Empty))
                    })
                    .count()
            })
            .sum()
    }

    #[test]
    fn every_open_cell_is_reachable_from_the_start() {
        for (rows, cols) in [(20, 30), (21, 31), (5, 5), (6, 9), (11, 7)] {
            for seed in 0..32 {
                let grid = carve(rows, cols, seed);
                let open = open_cells(&grid).len();
                assert_eq!(
                    count_reachable(&grid, Cell::new(1, 1)),
                    open,
                    "all spaces should be connected:\n{}",
                    grid
                );
            }
        }
    }

    #[test]
    fn carved_maze_has_no_cycles() {
        for (rows, cols) in [(20, 30), (21, 31), (9, 9)] {
            for seed in 0..32 {
                let grid = carve(rows, cols, seed);
                let open = open_cells(&grid).len();
                // A connected graph is a tree iff it has one fewer edge than nodes.
                assert_eq!(
                    count_adjacent_pairs(&grid),
                    open - 1,
                    "maze should be perfect:\n{}",
                    grid
                );
            }
        }
    }

    #[test]
    fn every_room_is_visited_and_the_border_stays_solid() {
        let grid = carve(20, 30, 7);

        for row in (1..=17).step_by(2) {
            for col in (1..=27).step_by(2) {
                assert_eq!(grid.get(Cell::new(row, col)), Some(Tile::Empty));
            }
        }

        for col in 0..30 {
            assert_eq!(grid.get(Cell::new(0, col)), Some(Tile::Hole));
            assert_eq!(grid.get(Cell::new(18, col)), Some(Tile::Hole));
            assert_eq!(grid.get(Cell::new(19, col)), Some(Tile::Hole));
        }
        for row in 0..20 {
            assert_eq!(grid.get(Cell::new(row, 0)), Some(Tile::Hole));
            assert_eq!(grid.get(Cell::new(row, 29)), Some(Tile::Hole));
        }
    }

    #[test]
    fn same_seed_carves_the_same_maze() {
        assert_eq!(carve(20, 30, 42), carve(20, 30, 42));
    }

    #[test]
    fn smallest_grid_is_a_single_room() {
        let grid = carve(3, 3, 0);
        assert_eq!(open_cells(&grid), vec![Cell::new(1, 1)]);
    }

    #[test]
    fn rejects_bad_dimensions_and_start_cells() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            MazeMaker::new(2, 10, Cell::new(1, 1), &mut rng).err(),
            Some(MazeError::InvalidDimensions { rows: 2, cols: 10 })
        );
        assert_eq!(
            MazeMaker::new(10, 10, Cell::new(0, 1), &mut rng).err(),
            Some(MazeError::InvalidStart { row: 0, col: 1 })
        );
        assert_eq!(
            MazeMaker::new(10, 10, Cell::new(1, 9), &mut rng).err(),
            Some(MazeError::InvalidStart { row: 1, col: 9 })
        );
    }
}
