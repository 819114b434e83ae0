pub mod app;
pub mod commands;
pub mod output;
#[cfg(feature = "tui")]
pub mod tui;

pub use app::{Cli, Commands, LogLevel};
