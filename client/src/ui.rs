use macroquad::prelude::*;

use common::{
    buttons::{Button, accept_button, decline_button, dpad_buttons, restart_button},
    game::{Game, Phase},
};

use crate::{assets::Assets, viewport::Viewport};

const QUESTION: &str = "Will you be my Valentine?";
const ACCEPTED_TITLE: &str = "HAPPY VALENTINE'S DAY!";
const ACCEPTED_SUBTITLE: &str = "I LOVE YOU! <3";
const DECLINED_TITLE: &str = "I'll try harder next time...";

const ACCEPT_COLOR: Color = Color::new(0.18, 0.8, 0.44, 1.0);
const DECLINE_COLOR: Color = Color::new(0.91, 0.3, 0.24, 1.0);
const RESTART_COLOR: Color = Color::new(0.2, 0.6, 0.86, 1.0);
const DPAD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.25);

/// What sits on top of the world, besides the phase's own overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Layers {
    heart: bool,
    message_box: bool,
    dpad: bool,
}

// The heart stays in the corner under the question and the endings too.
fn layers(phase: Phase, has_heart: bool) -> Layers {
    let exploring = phase == Phase::Exploring;
    Layers {
        heart: has_heart,
        message_box: exploring,
        dpad: exploring,
    }
}

pub fn draw_ui(game: &Game, assets: &Assets, viewport: &Viewport) {
    let surface = game.surface_size();
    let shown = layers(game.phase(), game.inventory.has_heart);

    if shown.heart {
        draw_hud(assets, viewport);
    }
    if shown.message_box {
        draw_message_box(game, viewport);
    }
    if shown.dpad {
        for (_, key) in dpad_buttons(surface) {
            draw_button(viewport, &key, DPAD_COLOR, 24.0);
        }
    }

    match game.phase() {
        Phase::Exploring => {}
        Phase::WonPendingChoice => {
            draw_overlay(viewport, surface, Color::new(0.0, 0.0, 0.0, 0.85));
            draw_centered_text(viewport, QUESTION, surface.x / 2.0, surface.y / 2.0 - 40.0, 36.0, WHITE);
            draw_button(viewport, &accept_button(surface), ACCEPT_COLOR, 24.0);
            draw_button(viewport, &decline_button(surface), DECLINE_COLOR, 24.0);
        }
        Phase::FinalizedPositive => {
            draw_overlay(viewport, surface, Color::new(1.0, 0.75, 0.8, 0.3));
            draw_centered_text(viewport, ACCEPTED_TITLE, surface.x / 2.0, surface.y / 2.0 - 40.0, 40.0, WHITE);
            draw_centered_text(
                viewport,
                ACCEPTED_SUBTITLE,
                surface.x / 2.0,
                surface.y / 2.0 + 40.0,
                60.0,
                Color::new(1.0, 1.0, 1.0, 0.9),
            );
            draw_button(viewport, &restart_button(surface), RESTART_COLOR, 18.0);
        }
        Phase::FinalizedNegative => {
            draw_overlay(viewport, surface, Color::new(0.0, 0.0, 0.0, 0.6));
            draw_centered_text(viewport, DECLINED_TITLE, surface.x / 2.0, surface.y / 2.0 - 40.0, 40.0, WHITE);
            draw_button(viewport, &restart_button(surface), RESTART_COLOR, 18.0);
        }
    }
}

fn draw_hud(assets: &Assets, viewport: &Viewport) {
    let (x, y, w, h) = viewport.rect(10.0, 10.0, 32.0, 32.0);
    draw_texture_ex(
        &assets.heart,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(w, h)),
            ..Default::default()
        },
    );

    let at = viewport.to_screen(glam::vec2(50.0, 32.0));
    draw_text("x 1", at.x, at.y, viewport.scaled(16.0), WHITE);
}

fn draw_message_box(game: &Game, viewport: &Viewport) {
    let Some(notification) = game.messages.current() else {
        return;
    };

    let surface = game.surface_size();
    let (x, y, w, h) = viewport.rect(surface.x / 2.0 - 250.0, 50.0, 500.0, 60.0);
    draw_rectangle(x, y, w, h, Color::new(0.0, 0.0, 0.0, 0.7));
    draw_rectangle_lines(x, y, w, h, viewport.scaled(2.0), WHITE);

    draw_centered_text(viewport, &notification.text, surface.x / 2.0, 85.0, 16.0, WHITE);
}

fn draw_overlay(viewport: &Viewport, surface: glam::Vec2, color: Color) {
    let (x, y, w, h) = viewport.rect(0.0, 0.0, surface.x, surface.y);
    draw_rectangle(x, y, w, h, color);
}

fn draw_button(viewport: &Viewport, button: &Button, color: Color, font_size: f32) {
    let size = button.size();
    let (x, y, w, h) = viewport.rect(button.min.x, button.min.y, size.x, size.y);
    draw_rectangle(x, y, w, h, color);

    let center_x = button.min.x + size.x / 2.0;
    let baseline = button.min.y + size.y * 0.7;
    draw_centered_text(viewport, button.label, center_x, baseline, font_size, WHITE);
}

/// `center_x` and `baseline` are in logical units.
fn draw_centered_text(
    viewport: &Viewport,
    text: &str,
    center_x: f32,
    baseline: f32,
    font_size: f32,
    color: Color,
) {
    let font_size = viewport.scaled(font_size).max(1.0);
    let width = measure_text(text, None, font_size as u16, 1.0).width;
    let at = viewport.to_screen(glam::vec2(center_x, baseline));
    draw_text(text, at.x - width / 2.0, at.y, font_size, color);
}
