use std::fmt;

use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::{constants::TILE_SIZE, tile::Tile};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }

    /// Top-left corner of the cell in display units.
    pub fn origin(&self) -> Vec2 {
        vec2(self.col as f32 * TILE_SIZE, self.row as f32 * TILE_SIZE)
    }

    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Cell> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(Cell { row, col })
    }

    pub fn distance(&self, other: &Cell) -> f32 {
        let dr = self.row as f32 - other.row as f32;
        let dc = self.col as f32 - other.col as f32;
        (dr * dr + dc * dc).sqrt()
    }
}

/// Fixed-size tile map, addressed by row then column.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Tile>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, fill: Tile) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![fill; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.rows / 2, self.cols / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn get(&self, cell: Cell) -> Option<Tile> {
        self.cells.get(cell.row)?.get(cell.col).copied()
    }

    /// Returns the tile that was replaced, or `None` if the cell is off the grid.
    pub fn set(&mut self, cell: Cell, tile: Tile) -> Option<Tile> {
        let slot = self.cells.get_mut(cell.row)?.get_mut(cell.col)?;
        Some(std::mem::replace(slot, tile))
    }

    /// The cell under a point in display units. Anything left of or above
    /// the origin, or past the far edges, is off the grid.
    pub fn cell_at(&self, point: Vec2) -> Option<Cell> {
        let col = (point.x / TILE_SIZE).floor();
        let row = (point.y / TILE_SIZE).floor();

        if col < 0.0 || row < 0.0 {
            return None;
        }

        let cell = Cell::new(row as usize, col as usize);
        self.contains(cell).then_some(cell)
    }

    pub fn tile_at(&self, point: Vec2) -> Option<Tile> {
        self.cell_at(point).and_then(|cell| self.get(cell))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Tile)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, &tile)| (Cell::new(row, col), tile))
        })
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.iter().filter(|&(_, t)| t == tile).count()
    }

    pub fn fill(&mut self, tile: Tile) {
        for row in self.cells.iter_mut() {
            row.fill(tile);
        }
    }

    /// Clears the grid and stamps a heart curve centered on it.
    pub fn draw_heart(&mut self, tile: Tile) {
        self.fill(Tile::Empty);

        let half_cols = self.cols as f32 / 2.0;
        let half_rows = self.rows as f32 / 2.0;

        for (r, row) in self.cells.iter_mut().enumerate() {
            for (c, slot) in row.iter_mut().enumerate() {
                let x = (c as f32 - half_cols) / 8.0;
                let y = -(r as f32 - half_rows) / 8.0;
                let a = x * x + y * y - 1.0;
                if a * a * a - x * x * y * y * y <= 0.0 {
                    *slot = tile;
                }
            }
        }
    }

    pub fn log(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|tile| tile.symbol()).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
