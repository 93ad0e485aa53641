pub mod buttons;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod grid;
pub mod input;
pub mod inventory;
pub mod maze;
pub mod notification;
pub mod player;
pub mod tile;
pub mod time;
