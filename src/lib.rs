pub mod canvas;
pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
