pub mod body;
pub mod config;
pub mod game;
pub mod grid;
pub mod input;
pub mod items;
pub mod platform;
pub mod renderer;
pub mod score;
pub mod sound;
pub mod terminal_runtime;
pub mod ui;
