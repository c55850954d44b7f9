//! Configuration loading using Figment

use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::{Path, PathBuf};
use taskboard::{BoardConfig, BoardError};
use thiserror::Error;
use tracing::{debug, trace};

/// Prefix of environment variables that override configuration keys
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Errors raised before a board session starts
#[derive(Error, Debug)]
pub enum CliError {
    /// Failed to read an input file
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration parsing failed
    #[error("Failed to parse configuration: {source}")]
    ParseError { source: figment::Error },

    /// File extension is not one we know how to read
    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// The configuration or script describes an invalid board
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl From<figment::Error> for CliError {
    fn from(error: figment::Error) -> Self {
        CliError::ParseError { source: error }
    }
}

/// Supported file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self, CliError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(CliError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load configuration in precedence order (later sources override earlier ones):
/// 1. Built-in defaults
/// 2. The configuration file, if one was given
/// 3. `TASKBOARD_` environment variables
pub fn load_config(path: Option<&Path>) -> Result<BoardConfig, CliError> {
    let config = build_figment(path)?.extract::<BoardConfig>()?;
    debug!(
        columns = config.default_columns.len(),
        drag_timeout_ms = config.drag_timeout_ms,
        "loaded configuration"
    );
    Ok(config)
}

fn build_figment(path: Option<&Path>) -> Result<Figment, CliError> {
    let mut figment = Figment::from(Serialized::defaults(BoardConfig::default()));

    if let Some(path) = path {
        trace!("Loading config file: {}", path.display());
        if !path.exists() {
            return Err(CliError::FileRead {
                path: path.to_path_buf(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        figment = match FileFormat::from_path(path)? {
            FileFormat::Toml => figment.merge(Toml::file(path)),
            FileFormat::Yaml => figment.merge(Yaml::file(path)),
            FileFormat::Json => figment.merge(Json::file(path)),
        };
    }

    Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use taskboard::ColumnId;
    use tempfile::TempDir;

    #[test]
    #[serial(taskboard_env)]
    fn test_defaults_without_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    #[serial(taskboard_env)]
    fn test_toml_file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.toml");
        fs::write(
            &path,
            r#"
drag_timeout_ms = 2500

[[default_columns]]
id = "backlog"
title = "Backlog"
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.drag_timeout_ms, 2500);
        assert_eq!(config.default_columns.len(), 1);
        assert_eq!(config.default_columns[0].id, ColumnId::from("backlog"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial(taskboard_env)]
    fn test_yaml_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.yml");
        fs::write(&path, "log_level: debug\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_columns.len(), 3);
    }

    #[test]
    #[serial(taskboard_env)]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.json");
        fs::write(&path, r#"{"drag_timeout_ms": 100}"#).unwrap();

        std::env::set_var("TASKBOARD_DRAG_TIMEOUT_MS", "42");
        let config = load_config(Some(&path));
        std::env::remove_var("TASKBOARD_DRAG_TIMEOUT_MS");

        assert_eq!(config.unwrap().drag_timeout_ms, 42);
    }

    #[test]
    #[serial(taskboard_env)]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_config(Some(&temp.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::FileRead { .. })));
    }

    #[test]
    fn test_unsupported_format() {
        let result = FileFormat::from_path(Path::new("board.ini"));
        assert!(matches!(result, Err(CliError::UnsupportedFormat { .. })));
        assert_eq!(
            FileFormat::from_path(Path::new("Board.YAML")).unwrap(),
            FileFormat::Yaml
        );
    }
}
