//! CLI definition for the taskboard command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Taskboard - replay kanban board sessions.
///
/// A session script lists board operations and drag gestures. Replaying it
/// prints the resulting board and every notification the session produced.
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Replay kanban board sessions and drag gestures")]
#[command(
    long_about = "Replays a scripted kanban session (YAML or JSON) against a fresh board \
    and prints the final board and notifications.\n\n\
    Configuration is read from --config (TOML, YAML or JSON), then overridden by \
    environment variables:\n  \
    TASKBOARD_DRAG_TIMEOUT_MS  Inactivity window before a drag is abandoned\n  \
    TASKBOARD_LOG_LEVEL        Log filter when RUST_LOG is not set"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a session script and print the final board
    Replay {
        /// Script file (.yaml, .yml or .json)
        script: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the effective configuration
    Defaults {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}
