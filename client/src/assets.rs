use std::path::PathBuf;

use log::debug;
use macroquad::prelude::*;

pub struct Assets {
    pub tileset: Texture2D,
    pub player: Texture2D,
    pub heart: Texture2D,
}

impl Assets {
    /// Loads every texture before the game starts. Any missing file is an
    /// error; there is nothing sensible to draw without them.
    pub async fn load() -> Result<Self, String> {
        Ok(Self {
            tileset: load_pixel_texture("map.png").await?,
            player: load_pixel_texture("player.png").await?,
            heart: load_pixel_texture("heart.png").await?,
        })
    }
}

async fn load_pixel_texture(name: &str) -> Result<Texture2D, String> {
    let path = resource_path("images", name);
    debug!("loading texture {}", path.display());

    let texture = load_texture(path.to_string_lossy().as_ref())
        .await
        .map_err(|e| format!("failed to load {}: {}", path.display(), e))?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

fn resource_path(subdir: &str, name: &str) -> PathBuf {
    #[cfg(target_os = "linux")]
    if let Ok(appdir) = std::env::var("APPDIR") {
        let p = PathBuf::from(appdir).join("assets").join(subdir).join(name);
        if p.exists() {
            return p;
        }
    }
    let usr = PathBuf::from("/usr/lib/heart-maze").join(subdir).join(name);
    if usr.exists() {
        return usr;
    }
    PathBuf::from("client/assets").join(subdir).join(name)
}
