use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{COLLISION_MARGIN, FRAME_COUNT, PLAYER_SIZE, PLAYER_SPEED, TICKS_PER_FRAME},
    input::Direction,
};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2, // Top-left of the sprite, in display units.
    pub size: Vec2,
    pub speed: f32,
    pub facing: Direction,
    pub is_moving: bool,
    pub frame: usize,
    frame_timer: u32,
}

impl Player {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            size: vec2(PLAYER_SIZE, PLAYER_SIZE),
            speed: PLAYER_SPEED,
            facing: Direction::Down,
            is_moving: false,
            frame: 0,
            frame_timer: 0,
        }
    }

    /// The corners that collide if the player stood at `position`, pulled in
    /// by the collision margin.
    pub fn corners_at(&self, position: Vec2) -> [Vec2; 4] {
        let near = position + Vec2::splat(COLLISION_MARGIN);
        let far = position + self.size - Vec2::splat(COLLISION_MARGIN);

        [
            vec2(near.x, near.y),
            vec2(far.x, near.y),
            vec2(near.x, far.y),
            vec2(far.x, far.y),
        ]
    }

    pub fn animate(&mut self, moving: bool) {
        self.is_moving = moving;

        if !moving {
            self.frame = 0;
            self.frame_timer = 0;
            return;
        }

        self.frame_timer += 1;
        if self.frame_timer >= TICKS_PER_FRAME {
            self.frame = (self.frame + 1) % FRAME_COUNT;
            self.frame_timer = 0;
        }
    }
}
