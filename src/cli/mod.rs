//! CLI layer - Command-line interface

pub mod commands;
pub mod menu;
pub mod output;

pub use commands::{Cli, Commands};
pub use menu::Menu;
pub use output::{format_config, format_day, format_week_navigation};
