use glam::{Vec2, vec2};
use macroquad::prelude::*;

use common::{buttons::dpad_input, input::PlayerInput};

use crate::viewport::Viewport;

pub fn player_input_from_keys() -> PlayerInput {
    PlayerInput {
        up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
    }
}

/// Keys plus any finger, or held mouse button, resting on the on-screen pad.
pub fn player_input(viewport: &Viewport, surface: Vec2) -> PlayerInput {
    let mut points: Vec<Vec2> = touches()
        .into_iter()
        .filter(|touch| {
            matches!(
                touch.phase,
                TouchPhase::Started | TouchPhase::Moved | TouchPhase::Stationary
            )
        })
        .map(|touch| vec2(touch.position.x, touch.position.y))
        .collect();

    if is_mouse_button_down(MouseButton::Left) {
        let (x, y) = mouse_position();
        points.push(vec2(x, y));
    }

    let on_pad = dpad_input(
        points.into_iter().map(|point| viewport.to_logical(point)),
        surface,
    );
    player_input_from_keys() | on_pad
}

/// Where a click or a new touch landed this frame, in window coordinates.
pub fn pointer_press() -> Option<Vec2> {
    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        return Some(vec2(x, y));
    }

    touches()
        .into_iter()
        .find(|touch| touch.phase == TouchPhase::Started)
        .map(|touch| vec2(touch.position.x, touch.position.y))
}
