//! Error types for the board engine

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Broad classes of rejection, used to decide what reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input the user can correct (empty title/content, unparseable script)
    Validation,
    /// A title, content or id collision; the board is left unchanged
    Duplicate,
    /// A stale id. Benign: it arises from deletes interleaved with drags
    NotFound,
}

/// Errors that can occur in board operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Column title is empty after trimming
    #[error("column title cannot be empty")]
    EmptyTitle,

    /// Task content is empty after trimming
    #[error("task content cannot be empty")]
    EmptyContent,

    /// Another column already has this title (case-insensitive)
    #[error("a column titled '{title}' already exists")]
    DuplicateTitle { title: String },

    /// The column already holds a task with this content (case-insensitive)
    #[error("column '{column}' already has a task '{content}'")]
    DuplicateContent { content: String, column: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// Column not found
    #[error("column not found: {id}")]
    NoSuchColumn { id: String },

    /// Task not found
    #[error("task not found: {id}")]
    NoSuchTask { id: String },

    /// Column position outside the board
    #[error("column index {index} out of range for {len} columns")]
    ColumnIndexOutOfRange { index: usize, len: usize },

    /// Parse error
    #[error("parse error: {message}")]
    Parse { message: String },
}

impl BoardError {
    /// Create a duplicate content error
    pub fn duplicate_content(content: impl Into<String>, column: impl Into<String>) -> Self {
        Self::DuplicateContent {
            content: content.into(),
            column: column.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create a column not found error
    pub fn no_such_column(id: impl Into<String>) -> Self {
        Self::NoSuchColumn { id: id.into() }
    }

    /// Create a task not found error
    pub fn no_such_task(id: impl Into<String>) -> Self {
        Self::NoSuchTask { id: id.into() }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTitle | Self::EmptyContent | Self::Parse { .. } => ErrorKind::Validation,
            Self::DuplicateTitle { .. } | Self::DuplicateContent { .. } | Self::DuplicateId { .. } => {
                ErrorKind::Duplicate
            }
            Self::NoSuchColumn { .. }
            | Self::NoSuchTask { .. }
            | Self::ColumnIndexOutOfRange { .. } => ErrorKind::NotFound,
        }
    }

    /// Check if this error should be surfaced to the user.
    ///
    /// Stale ids are swallowed; everything else is reported.
    pub fn is_user_facing(&self) -> bool {
        self.kind() != ErrorKind::NotFound
    }

    /// Every rejection leaves the board intact, so the user can always re-issue
    /// the action. Only parse errors need a different input source.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Parse { .. })
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(error: serde_json::Error) -> Self {
        Self::parse(error.to_string())
    }
}

impl From<serde_yaml_ng::Error> for BoardError {
    fn from(error: serde_yaml_ng::Error) -> Self {
        Self::parse(error.to_string())
    }
}
