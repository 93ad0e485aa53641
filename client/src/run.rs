use ::rand::{SeedableRng, rngs::StdRng};
use glam::vec2;
use log::info;
use macroquad::prelude::*;

use common::{
    buttons::PointerAction,
    config::GameConfig,
    game::{Game, GameEvent},
    time::{MAX_FRAME_SECS, TICK_SECS},
};

use crate::{
    assets::Assets,
    fade::{self, Fade},
    input, ui,
    viewport::Viewport,
    world,
};

pub struct GameRunner {
    pub config: GameConfig,
    pub game: Game,
    pub assets: Assets,
    flash: Option<Fade>,
    accumulated_time: f32,
}

impl GameRunner {
    pub fn new(config: GameConfig, assets: Assets) -> Result<Self, String> {
        let game = new_session(&config)?;

        Ok(Self {
            config,
            game,
            assets,
            flash: None,
            accumulated_time: 0.0,
        })
    }

    fn viewport(&self) -> Viewport {
        Viewport::fit(vec2(screen_width(), screen_height()), self.game.surface_size())
    }

    /// Handles pointer presses, then runs as many fixed ticks as the frame
    /// time has paid for.
    pub fn update(&mut self) -> Result<(), String> {
        if let Some(press) = input::pointer_press() {
            let point = self.viewport().to_logical(press);
            match self.game.press(point) {
                Some(PointerAction::Choose(choice)) => self.pulse(&GameEvent::ChoiceMade(choice)),
                Some(PointerAction::Restart) => self.restart()?,
                None => {}
            }
        }

        let input = input::player_input(&self.viewport(), self.game.surface_size());

        // Clamp to avoid a burst of catch-up ticks if a frame stalls.
        self.accumulated_time += get_frame_time().min(MAX_FRAME_SECS);
        while self.accumulated_time >= TICK_SECS {
            for event in self.game.tick(&input) {
                self.pulse(&event);
            }
            self.accumulated_time -= TICK_SECS;
        }

        Ok(())
    }

    pub fn draw(&mut self) {
        clear_background(BLACK);

        let viewport = self.viewport();
        world::draw_world(&self.game, &self.assets, &viewport);
        ui::draw_ui(&self.game, &self.assets, &viewport);

        if self
            .flash
            .as_ref()
            .is_some_and(|flash| !flash.is_still_fading_so_draw())
        {
            self.flash = None;
        }
    }

    fn pulse(&mut self, event: &GameEvent) {
        if let Some(flash) = fade::new_flash(event) {
            self.flash = Some(flash);
        }
    }

    fn restart(&mut self) -> Result<(), String> {
        self.game = new_session(&self.config)?;
        self.flash = None;
        self.accumulated_time = 0.0;
        Ok(())
    }
}

fn new_session(config: &GameConfig) -> Result<Game, String> {
    let seed = config.seed.unwrap_or_else(::rand::random::<u64>);
    info!("starting a new maze with seed {}", seed);

    let mut rng = StdRng::seed_from_u64(seed);
    Game::new(config, &mut rng).map_err(|e| format!("failed to build the maze: {}", e))
}

pub async fn run_client_loop(config: GameConfig) -> Result<(), String> {
    let assets = Assets::load().await?;
    let mut runner = GameRunner::new(config, assets)?;

    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        runner.update()?;
        runner.draw();

        next_frame().await;
    }

    Ok(())
}
