use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// What occupies a grid cell. Only the semantic kind lives here: how a kind
/// looks is decided by the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Tile {
    #[default]
    Empty,
    Hole,
    Flower,
    Sign,
    Chest,
    Pot,
    Note,
    Spike,
}

impl Tile {
    pub fn is_solid(self) -> bool {
        matches!(self, Tile::Hole | Tile::Chest)
    }

    /// Cells that the note scatterer may overwrite.
    pub fn is_plain_floor(self) -> bool {
        matches!(self, Tile::Empty | Tile::Flower)
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Empty => ' ',
            Tile::Hole => '█',
            Tile::Flower => '*',
            Tile::Sign => 'S',
            Tile::Chest => 'C',
            Tile::Pot => 'P',
            Tile::Note => 'n',
            Tile::Spike => '^',
        }
    }
}
