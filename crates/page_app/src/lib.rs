//! Headless host for the movie lookup page.
mod platform;

pub use platform::app::{run_app, run_console, spawn_line_reader, PageApp, EOF_GRACE};
pub use platform::config::{load_config, read_config, AppConfig, ConfigError, CONFIG_FILENAME};
pub use platform::console::{parse_command, ConsoleCommand, ParseError};
pub use platform::dialog::{ConsoleDialog, Dialog};
pub use platform::render::render;
