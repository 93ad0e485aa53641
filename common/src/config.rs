use std::{env, str::FromStr};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{COLS, FLOWER_CHANCE, ROWS},
    error::ConfigError,
    maze::MazeSettings,
};

pub const DEFAULT_SIGN_TEXT: &str = "Happy Monthsarry baby, Hope you enjoy this game I built";
pub const DEFAULT_NOTES: [&str; 3] = [
    "Remember our first walk together? I got us lost then too.",
    "Every wrong turn in here still leads somewhere good.",
    "Almost there. Keep going, you're doing great.",
];
pub const NOTE_SEPARATOR: char = '|';

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub flower_chance: f64,
    pub seed: Option<u64>, // `None` draws a fresh seed per session.
    pub sign_text: String,
    pub notes: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: ROWS,
            cols: COLS,
            flower_chance: FLOWER_CHANCE,
            seed: None,
            sign_text: DEFAULT_SIGN_TEXT.to_string(),
            notes: DEFAULT_NOTES.iter().map(|note| note.to_string()).collect(),
        }
    }
}

impl GameConfig {
    /// Reads `MAZE_*` variables, after loading `.env` if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Like `from_env`, but with the variables supplied by `lookup`. Unset
    /// variables keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(rows) = parse(&lookup, "MAZE_ROWS")? {
            config.rows = rows;
        }
        if let Some(cols) = parse(&lookup, "MAZE_COLS")? {
            config.cols = cols;
        }
        config.seed = parse(&lookup, "MAZE_SEED")?;

        if let Some(chance) = parse::<f64, _>(&lookup, "MAZE_FLOWER_CHANCE")? {
            if !(0.0..=1.0).contains(&chance) {
                return Err(ConfigError::Invalid {
                    key: "MAZE_FLOWER_CHANCE",
                    value: chance.to_string(),
                });
            }
            config.flower_chance = chance;
        }

        if let Some(text) = lookup("MAZE_SIGN_TEXT") {
            if text.trim().is_empty() {
                warn!("MAZE_SIGN_TEXT is blank, keeping the default greeting");
            } else {
                config.sign_text = text;
            }
        }

        if let Some(notes) = lookup("MAZE_NOTES") {
            config.notes = notes
                .split(NOTE_SEPARATOR)
                .map(str::trim)
                .filter(|note| !note.is_empty())
                .map(str::to_string)
                .collect();
        }

        config.maze_settings().validate()?;
        Ok(config)
    }

    pub fn maze_settings(&self) -> MazeSettings {
        MazeSettings {
            rows: self.rows,
            cols: self.cols,
            flower_chance: self.flower_chance,
            note_count: self.notes.len(),
        }
    }
}

fn parse<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid { key, value })
}
