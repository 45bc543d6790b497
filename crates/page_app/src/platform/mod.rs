pub mod app;
pub mod config;
pub mod console;
pub mod dialog;
pub mod effects;
pub mod render;
