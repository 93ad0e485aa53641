use glam::{Vec2, vec2};

use crate::{
    game::{Choice, Phase},
    input::{Direction, PlayerInput},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Button {
    pub min: Vec2,
    pub max: Vec2,
    pub label: &'static str,
}

impl Button {
    fn around(center: Vec2, left: f32, top: f32, right: f32, bottom: f32, label: &'static str) -> Self {
        Self {
            min: center + vec2(left, top),
            max: center + vec2(right, bottom),
            label,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Edges count as inside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

pub fn accept_button(surface: Vec2) -> Button {
    Button::around(surface / 2.0, -110.0, 20.0, -10.0, 70.0, "YES")
}

pub fn decline_button(surface: Vec2) -> Button {
    Button::around(surface / 2.0, 10.0, 20.0, 110.0, 70.0, "NO")
}

pub fn restart_button(surface: Vec2) -> Button {
    Button::around(surface / 2.0, -60.0, 100.0, 60.0, 140.0, "Restart")
}

const DPAD_INSET: f32 = 100.0; // From the bottom-right corner to the middle of the pad.

/// On-screen direction keys for touch screens, a plus shape of 48 unit
/// squares in the bottom-right corner.
pub fn dpad_buttons(surface: Vec2) -> [(Direction, Button); 4] {
    let center = surface - Vec2::splat(DPAD_INSET);
    [
        (Direction::Up, Button::around(center, -24.0, -76.0, 24.0, -28.0, "^")),
        (Direction::Down, Button::around(center, -24.0, 28.0, 24.0, 76.0, "v")),
        (Direction::Left, Button::around(center, -76.0, -24.0, -28.0, 24.0, "<")),
        (Direction::Right, Button::around(center, 28.0, -24.0, 76.0, 24.0, ">")),
    ]
}

/// Directions held by the given touch points. Every touch counts, so two
/// fingers can hold two keys.
pub fn dpad_input<I>(points: I, surface: Vec2) -> PlayerInput
where
    I: IntoIterator<Item = Vec2>,
{
    let buttons = dpad_buttons(surface);
    points
        .into_iter()
        .flat_map(|point| {
            buttons
                .iter()
                .filter(move |(_, button)| button.contains(point))
                .map(|&(direction, _)| PlayerInput::holding(direction))
        })
        .fold(PlayerInput::default(), |held, input| held | input)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Choose(Choice),
    Restart,
}

/// What a press at `point` means, given the phase. Presses while exploring
/// never mean anything.
pub fn pointer_action(phase: Phase, point: Vec2, surface: Vec2) -> Option<PointerAction> {
    match phase {
        Phase::Exploring => None,
        Phase::WonPendingChoice => {
            if accept_button(surface).contains(point) {
                Some(PointerAction::Choose(Choice::Accept))
            } else if decline_button(surface).contains(point) {
                Some(PointerAction::Choose(Choice::Decline))
            } else {
                None
            }
        }
        Phase::FinalizedPositive | Phase::FinalizedNegative => restart_button(surface)
            .contains(point)
            .then_some(PointerAction::Restart),
    }
}
