use common::{input::Direction, tile::Tile};
use macroquad::prelude::Rect;

pub const SHEET_COLS: usize = 12;
pub const SHEET_TILE_SIZE: f32 = 16.0;
pub const GROUND_INDEX: usize = 0;
pub const PLAYER_FRAME_SIZE: f32 = 125.0;

/// Position of a tile kind in the tileset, counted left to right, top to
/// bottom. Plain ground has nothing drawn over it.
pub fn tile_index(tile: Tile) -> Option<usize> {
    match tile {
        Tile::Empty => None,
        Tile::Spike => Some(12),
        Tile::Flower => Some(14),
        Tile::Hole => Some(15),
        Tile::Note => Some(19),
        Tile::Sign => Some(20),
        Tile::Chest => Some(21),
        Tile::Pot => Some(22),
    }
}

pub fn tile_source(index: usize) -> Rect {
    Rect::new(
        (index % SHEET_COLS) as f32 * SHEET_TILE_SIZE,
        (index / SHEET_COLS) as f32 * SHEET_TILE_SIZE,
        SHEET_TILE_SIZE,
        SHEET_TILE_SIZE,
    )
}

pub fn sprite_row(facing: Direction) -> usize {
    match facing {
        Direction::Down => 0,
        Direction::Up => 1,
        Direction::Right => 2,
        Direction::Left => 3,
    }
}

pub fn player_source(facing: Direction, frame: usize) -> Rect {
    Rect::new(
        frame as f32 * PLAYER_FRAME_SIZE,
        sprite_row(facing) as f32 * PLAYER_FRAME_SIZE,
        PLAYER_FRAME_SIZE,
        PLAYER_FRAME_SIZE,
    )
}
