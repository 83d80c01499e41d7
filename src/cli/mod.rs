pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::path::PathBuf;

use crate::config;

/// Exit code for a command that ran but found problems
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for configuration that could not be loaded
pub const EXIT_CONFIG: i32 = 2;

/// Run the command-line interface, returning the process exit code
pub fn run() -> i32 {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    let dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let config_files = if cli.config.is_empty() {
        None
    } else {
        Some(cli.config.clone())
    };

    let config = match config::load_config(&dir, config_files) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            return EXIT_CONFIG;
        }
    };

    match &cli.command {
        types::Commands::Render { .. } => {
            match commands::handle_render_command(&cli.command, &config) {
                Ok(()) => 0,
                Err(e) => {
                    error!("Failed to render: {}", e);
                    EXIT_FAILURE
                }
            }
        },
        types::Commands::Check { .. } => {
            match commands::handle_check_command(&cli.command, &config) {
                Ok(0) => 0,
                Ok(failures) => {
                    error!("{} file(s) cannot be sectionized", failures);
                    EXIT_FAILURE
                }
                Err(e) => {
                    error!("Failed to check: {}", e);
                    EXIT_FAILURE
                }
            }
        },
        types::Commands::Config { .. } => {
            match commands::handle_config_command(&cli.command, &config) {
                Ok(()) => 0,
                Err(e) => {
                    error!("{}", e);
                    EXIT_FAILURE
                }
            }
        },
    }
}
