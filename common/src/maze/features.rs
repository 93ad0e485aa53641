use rand::Rng;

use crate::{
    constants::{NOTE_MIN_DISTANCE, NOTE_PLACEMENT_ATTEMPTS},
    error::MazeError,
    grid::{Cell, Grid},
    tile::Tile,
};

use super::Layout;

/// Turns each plain floor cell into a flower with the given probability.
pub fn decorate<R: Rng + ?Sized>(grid: &mut Grid, chance: f64, rng: &mut R) {
    let floor: Vec<Cell> = grid
        .iter()
        .filter(|&(_, tile)| tile == Tile::Empty)
        .map(|(cell, _)| cell)
        .collect();

    for cell in floor {
        if rng.random::<f64>() < chance {
            grid.set(cell, Tile::Flower);
        }
    }
}

/// Opens the 3x3 block around the spawn cell, whatever was there.
pub fn clear_spawn(grid: &mut Grid, spawn: Cell) {
    for dr in -1..=1 {
        for dc in -1..=1 {
            if let Some(cell) = spawn.offset(dr, dc) {
                grid.set(cell, Tile::Empty);
            }
        }
    }
}

/// Places the sign, the pot and the chest, then opens the cells that lead to
/// the pot and the chest in case the carve left them walled in.
pub fn place_features(grid: &mut Grid, layout: &Layout) {
    grid.set(layout.sign, Tile::Sign);
    grid.set(layout.pot, Tile::Pot);
    grid.set(layout.chest, Tile::Chest);

    for &cell in &layout.approaches {
        grid.set(cell, Tile::Empty);
    }
}

fn qualifies(grid: &Grid, cell: Cell, center: Cell) -> bool {
    grid.get(cell).is_some_and(Tile::is_plain_floor) && cell.distance(&center) >= NOTE_MIN_DISTANCE
}

/// Scatters up to `count` notes on floor cells far enough from the center.
/// Random tries are capped; after that the remaining notes go to the first
/// qualifying cells in reading order. Fails, keeping whatever was placed,
/// only when there are not enough qualifying cells at all.
pub fn scatter_notes<R: Rng + ?Sized>(
    grid: &mut Grid,
    count: usize,
    center: Cell,
    rng: &mut R,
) -> Result<usize, MazeError> {
    let mut placed = 0;
    let mut attempts = 0;

    while placed < count && attempts < NOTE_PLACEMENT_ATTEMPTS {
        attempts += 1;
        let cell = Cell::new(
            rng.random_range(0..grid.rows()),
            rng.random_range(0..grid.cols()),
        );
        if qualifies(grid, cell, center) {
            grid.set(cell, Tile::Note);
            placed += 1;
        }
    }

    if placed < count {
        let view: &Grid = grid;
        let fallback: Vec<Cell> = view
            .iter()
            .map(|(cell, _)| cell)
            .filter(|&cell| qualifies(view, cell, center))
            .take(count - placed)
            .collect();
        for cell in fallback {
            grid.set(cell, Tile::Note);
            placed += 1;
        }
    }

    if placed < count {
        Err(MazeError::NotePlacementExhausted {
            placed,
            requested: count,
        })
    } else {
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn decorate_only_touches_empty_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(10, 10, Tile::Empty);
        grid.set(Cell::new(0, 0), Tile::Hole);
        grid.set(Cell::new(5, 5), Tile::Chest);

        decorate(&mut grid, 1.0, &mut rng);

        assert_eq!(grid.get(Cell::new(0, 0)), Some(Tile::Hole));
        assert_eq!(grid.get(Cell::new(5, 5)), Some(Tile::Chest));
        assert_eq!(grid.count(Tile::Flower), 98);
    }

    #[test]
    fn decorate_with_zero_chance_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(10, 10, Tile::Empty);
        decorate(&mut grid, 0.0, &mut rng);
        assert_eq!(grid.count(Tile::Flower), 0);
    }

    #[test]
    fn clear_spawn_opens_a_three_by_three_block() {
        let mut grid = Grid::new(5, 5, Tile::Hole);
        clear_spawn(&mut grid, Cell::new(2, 2));
        assert_eq!(grid.count(Tile::Empty), 9);
        assert_eq!(grid.get(Cell::new(0, 0)), Some(Tile::Hole));
    }

    #[test]
    fn clear_spawn_at_the_corner_stays_on_the_grid() {
        let mut grid = Grid::new(5, 5, Tile::Hole);
        clear_spawn(&mut grid, Cell::new(0, 0));
        assert_eq!(grid.count(Tile::Empty), 4);
    }

    #[test]
    fn notes_keep_their_distance_from_the_center() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut grid = Grid::new(20, 30, Tile::Empty);
        let center = Cell::new(10, 15);

        let placed = scatter_notes(&mut grid, 5, center, &mut rng).expect("plenty of room");

        assert_eq!(placed, 5);
        assert_eq!(grid.count(Tile::Note), 5);
        for (cell, tile) in grid.iter() {
            if tile == Tile::Note {
                assert!(cell.distance(&center) >= NOTE_MIN_DISTANCE);
            }
        }
    }

    #[test]
    fn a_lone_qualifying_cell_is_always_found() {
        // Random tries will almost never hit it, so this goes through the fallback.
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = Grid::new(200, 200, Tile::Hole);
        grid.set(Cell::new(0, 0), Tile::Flower);

        let placed = scatter_notes(&mut grid, 1, Cell::new(100, 100), &mut rng);

        assert_eq!(placed, Ok(1));
        assert_eq!(grid.get(Cell::new(0, 0)), Some(Tile::Note));
    }

    #[test]
    fn too_few_cells_is_reported_without_looping_forever() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = Grid::new(11, 11, Tile::Hole);
        grid.set(Cell::new(0, 0), Tile::Empty);
        grid.set(Cell::new(5, 5), Tile::Empty); // Too close to the center.

        let result = scatter_notes(&mut grid, 3, Cell::new(5, 5), &mut rng);

        assert_eq!(
            result,
            Err(MazeError::NotePlacementExhausted {
                placed: 1,
                requested: 3
            })
        );
        assert_eq!(grid.get(Cell::new(5, 5)), Some(Tile::Empty));
    }
}
