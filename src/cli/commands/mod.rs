mod render;
mod check;
mod config;

pub use render::{handle_render_command, render_document};
pub use check::{handle_check_command, check_document, CheckReport};
pub use config::{handle_config_command, describe_config};
