use macroquad::prelude::*;

use common::game::GameEvent;

pub fn new_flash(event: &GameEvent) -> Option<Fade> {
    let get_color: fn(f32) -> Color = match event {
        GameEvent::HeartFound => get_pink_flash_color,
        GameEvent::NoteFound { .. } => get_gold_flash_color,
        GameEvent::ChoiceMade(_) => get_white_flash_color,
        GameEvent::ChestLocked | GameEvent::GoalReached => return None,
    };
    Some(Fade::new(get_color, 0.6, 0.5))
}

fn get_pink_flash_color(fade: f32) -> Color {
    Color::new(1.0, 0.75, 0.8, 0.5 * fade)
}

fn get_gold_flash_color(fade: f32) -> Color {
    Color::new(1.0, 0.85, 0.3, 0.4 * fade)
}

fn get_white_flash_color(fade: f32) -> Color {
    Color::new(1.0, 1.0, 1.0, 0.7 * fade)
}

pub struct Fade {
    pub start_time: f64,
    get_color: fn(f32) -> Color,
    duration: f64,
    power: f32,
}

impl Fade {
    pub fn new(get_color: fn(f32) -> Color, duration: f64, power: f32) -> Self {
        Fade {
            start_time: get_time(),
            get_color,
            duration,
            power,
        }
    }

    /// Covers the whole window in the fading colour. Returns `false` once
    /// the fade is over.
    pub fn is_still_fading_so_draw(&self) -> bool {
        let elapsed = get_time() - self.start_time;
        if elapsed < self.duration {
            let fade = 1.0 - ((elapsed as f32) / (self.duration as f32)).powf(self.power);
            draw_rectangle(
                0.0,
                0.0,
                screen_width(),
                screen_height(),
                (self.get_color)(fade),
            );
            true
        } else {
            false
        }
    }
}
