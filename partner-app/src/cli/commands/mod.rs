pub mod config;
pub mod screens;
pub mod tui;

pub use config::{config_command, ConfigCommands};
pub use screens::screens_command;
pub use tui::{tui_command, TuiCommands};
