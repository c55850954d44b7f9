//! Taskboard CLI - replay kanban board sessions.
//!
//! Commands:
//! - `taskboard replay <script>`: Replay a session script and print the final board
//! - `taskboard defaults`: Print the effective configuration
//!
//! Environment variables:
//! - TASKBOARD_DRAG_TIMEOUT_MS: Override the abandoned-drag timeout
//! - TASKBOARD_LOG_LEVEL: Log filter when RUST_LOG is not set
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

mod cli;
mod commands;
mod config;
mod logging;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    logging::init(cli.debug, &config.log_level);

    let result = match cli.command {
        Commands::Replay { script, format } => commands::run_replay(&script, format, &config),
        Commands::Defaults { format } => commands::run_defaults(format, &config),
    };

    let exit_code = match result {
        Ok(output) => {
            print!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
