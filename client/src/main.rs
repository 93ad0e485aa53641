use log::error;
use macroquad::prelude::*;

use client::run::run_client_loop;
use common::{config::GameConfig, constants::TILE_SIZE};

fn window_conf() -> Conf {
    // Bad configuration is reported once logging is up, in `main`.
    let config = GameConfig::from_env().unwrap_or_default();

    Conf {
        window_title: "Heart Maze".to_owned(),
        window_width: (config.cols as f32 * TILE_SIZE) as i32,
        window_height: (config.rows as f32 * TILE_SIZE) as i32,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_client_loop(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
