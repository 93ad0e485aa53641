mod assets;
mod fade;
mod input;
mod sheet;
mod ui;
mod viewport;
mod world;

pub mod run;
