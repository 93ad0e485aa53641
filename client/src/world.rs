use macroquad::prelude::*;

use common::{constants::TILE_SIZE, game::Game};

use crate::{
    assets::Assets,
    sheet::{GROUND_INDEX, player_source, tile_index, tile_source},
    viewport::Viewport,
};

pub const BACKGROUND: Color = Color::new(0.17, 0.24, 0.31, 1.0);

/// Ground everywhere, then whatever sits on each cell, then the player.
pub fn draw_world(game: &Game, assets: &Assets, viewport: &Viewport) {
    let surface = game.surface_size();
    let (x, y, w, h) = viewport.rect(0.0, 0.0, surface.x, surface.y);
    draw_rectangle(x, y, w, h, BACKGROUND);

    // Round up so neighbouring tiles overlap instead of leaving hairline gaps.
    let size = viewport.scaled(TILE_SIZE).ceil();

    for (cell, tile) in game.maze.grid.iter() {
        let at = viewport.to_screen(cell.origin());
        draw_sheet_tile(&assets.tileset, GROUND_INDEX, at.x, at.y, size);
        if let Some(index) = tile_index(tile) {
            draw_sheet_tile(&assets.tileset, index, at.x, at.y, size);
        }
    }

    if !game.phase().is_finalized() {
        draw_player(game, assets, viewport);
    }
}

fn draw_sheet_tile(tileset: &Texture2D, index: usize, x: f32, y: f32, size: f32) {
    draw_texture_ex(
        tileset,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(size, size)),
            source: Some(tile_source(index)),
            ..Default::default()
        },
    );
}

fn draw_player(game: &Game, assets: &Assets, viewport: &Viewport) {
    let player = &game.player;
    let at = viewport.to_screen(player.position);

    draw_texture_ex(
        &assets.player,
        at.x,
        at.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(
                viewport.scaled(player.size.x),
                viewport.scaled(player.size.y),
            )),
            source: Some(player_source(player.facing, player.frame)),
            ..Default::default()
        },
    );
}
