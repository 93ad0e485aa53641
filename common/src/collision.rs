use glam::{Vec2, vec2};
use log::info;

use crate::{
    game::GameEvent,
    grid::Grid,
    inventory::Inventory,
    player::Player,
    tile::Tile,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub position: Vec2,
    pub events: Vec<GameEvent>,
}

/// Moves along x first, then along y from wherever the x step left the
/// player, so a blocked axis doesn't stop the other one. Zero components are
/// not tested.
///
/// Feature tiles under any corner take effect as soon as that corner is
/// tested, even if a later corner blocks the move. Reaching the chest with
/// the heart stops resolution there.
pub fn try_move(
    player: &Player,
    displacement: Vec2,
    grid: &mut Grid,
    inventory: &mut Inventory,
) -> MoveOutcome {
    let mut sweep = Sweep {
        grid,
        inventory,
        events: Vec::new(),
        note_taken: false,
    };
    let mut position = player.position;

    for step in [vec2(displacement.x, 0.0), vec2(0.0, displacement.y)] {
        if step == Vec2::ZERO {
            continue;
        }

        let next = position + step;
        if sweep.allows(player.corners_at(next)) {
            position = next;
        }

        if sweep.events.contains(&GameEvent::GoalReached) {
            break;
        }
    }

    MoveOutcome {
        position,
        events: sweep.events,
    }
}

struct Sweep<'a> {
    grid: &'a mut Grid,
    inventory: &'a mut Inventory,
    events: Vec<GameEvent>,
    note_taken: bool, // At most one note per move.
}

impl Sweep<'_> {
    fn allows(&mut self, corners: [Vec2; 4]) -> bool {
        for corner in corners {
            let Some(cell) = self.grid.cell_at(corner) else {
                return false;
            };

            match self.grid.get(cell) {
                None | Some(Tile::Hole) => return false,
                Some(Tile::Pot) => {
                    info!("heart found at ({}, {})", cell.row, cell.col);
                    self.inventory.has_heart = true;
                    self.grid.set(cell, Tile::Empty);
                    self.events.push(GameEvent::HeartFound);
                }
                Some(Tile::Note) if !self.note_taken => {
                    if let Some((index, text)) = self.inventory.find_next_note() {
                        info!("memory note {} found", index);
                        self.events.push(GameEvent::NoteFound {
                            index,
                            text: text.to_string(),
                        });
                        self.grid.set(cell, Tile::Empty);
                        self.note_taken = true;
                    }
                }
                Some(Tile::Chest) => {
                    let event = if self.inventory.has_heart {
                        GameEvent::GoalReached
                    } else {
                        GameEvent::ChestLocked
                    };
                    if !self.events.contains(&event) {
                        self.events.push(event);
                    }
                    return false;
                }
                Some(_) => {}
            }
        }

        true
    }
}
