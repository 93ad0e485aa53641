use std::ops::BitOr;

use glam::{Vec2, vec2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl Direction {
    /// Unit step in display units, with y growing downwards.
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => vec2(0.0, -1.0),
            Direction::Down => vec2(0.0, 1.0),
            Direction::Left => vec2(-1.0, 0.0),
            Direction::Right => vec2(1.0, 0.0),
        }
    }
}

/// Which directions are held this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl PlayerInput {
    /// Only one direction moves the player: up wins over down, down over
    /// left, left over right.
    pub fn direction(&self) -> Option<Direction> {
        if self.up {
            Some(Direction::Up)
        } else if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

impl PlayerInput {
    /// Input with only `direction` held.
    pub fn holding(direction: Direction) -> Self {
        let mut input = Self::default();
        match direction {
            Direction::Up => input.up = true,
            Direction::Down => input.down = true,
            Direction::Left => input.left = true,
            Direction::Right => input.right = true,
        }
        input
    }
}

/// Held if held on either source.
impl BitOr for PlayerInput {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_means_no_direction() {
        assert_eq!(PlayerInput::default().direction(), None);
    }

    #[test]
    fn direction_follows_priority_order() {
        let all = PlayerInput {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(all.direction(), Some(Direction::Up));

        let no_up = PlayerInput { up: false, ..all };
        assert_eq!(no_up.direction(), Some(Direction::Down));

        let sideways = PlayerInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(sideways.direction(), Some(Direction::Left));

        let right = PlayerInput {
            right: true,
            ..Default::default()
        };
        assert_eq!(right.direction(), Some(Direction::Right));
    }

    #[test]
    fn combining_sources_keeps_every_held_direction() {
        let keys = PlayerInput::holding(Direction::Left);
        let touch = PlayerInput::holding(Direction::Down);

        let both = keys | touch;
        assert!(both.left && both.down);
        assert!(!both.up && !both.right);
        assert_eq!(both.direction(), Some(Direction::Down));
        assert_eq!(keys | PlayerInput::default(), keys);
    }
}
