//! Command implementations

use crate::cli::OutputFormat;
use crate::config::{CliError, FileFormat};
use anyhow::Context;
use serde::Serialize;
use std::path::Path;
use taskboard::{
    Board, BoardConfig, DragController, DragSession, Notification, NotificationLog,
    NotificationSink, Script, SequentialIds, TracingSink,
};
use tracing::info;

/// Keeps notifications for the report and mirrors them into the log
#[derive(Debug, Default)]
pub struct ReplaySink {
    log: NotificationLog,
    trace: TracingSink,
}

impl NotificationSink for ReplaySink {
    fn notify(&mut self, notification: Notification) {
        self.trace.notify(notification.clone());
        self.log.notify(notification);
    }
}

/// What `taskboard replay` prints
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub board: Board,
    pub notifications: Vec<Notification>,
    /// A drag the script started but never finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfinished_drag: Option<DragSession>,
}

pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
        OutputFormat::Json => serde_json::to_string_pretty(value)? + "\n",
    })
}

pub fn load_script(path: &Path) -> anyhow::Result<Script> {
    let source = std::fs::read_to_string(path).map_err(|source| CliError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let script = match FileFormat::from_path(path)? {
        FileFormat::Yaml => Script::from_yaml(&source),
        FileFormat::Json => Script::from_json(&source),
        FileFormat::Toml => {
            return Err(CliError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
            .into())
        }
    };
    script.with_context(|| format!("Invalid script {}", path.display()))
}

/// Run a script against a board seeded from the configuration
pub fn replay(script: &Script, config: &BoardConfig) -> anyhow::Result<ReplayReport> {
    let board = script.starting_board(config.seed_board()?)?;
    let mut controller = DragController::with_sink(board, ReplaySink::default())
        .with_id_generator(SequentialIds::new());

    script.replay(&mut controller).context("Replay stopped")?;

    let unfinished_drag = controller.active_drag().cloned();
    let (board, sink) = controller.into_parts();
    info!(
        steps = script.steps.len(),
        notifications = sink.log.len(),
        "replay finished"
    );

    Ok(ReplayReport {
        board,
        notifications: sink.log.entries().to_vec(),
        unfinished_drag,
    })
}

pub fn run_replay(
    path: &Path,
    format: OutputFormat,
    config: &BoardConfig,
) -> anyhow::Result<String> {
    let script = load_script(path)?;
    let report = replay(&script, config)?;
    render(&report, format)
}

pub fn run_defaults(format: OutputFormat, config: &BoardConfig) -> anyhow::Result<String> {
    render(config, format)
}
