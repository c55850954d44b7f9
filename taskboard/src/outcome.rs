//! Outcome reporting: turning committed and rejected operations into
//! user-facing notifications.
//!
//! The reporter is a stateless mapping. It decides *what* to say; a
//! [`NotificationSink`] decides how (or whether) to show it.

use crate::error::BoardError;
use crate::mutation::Change;
use crate::types::TaskId;
use serde::Serialize;

/// Dedupe key of the warning raised while a task hovers over a column that
/// already holds its content.
pub const DUPLICATE_TASK_KEY: &str = "duplicate-task-error";

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// A short, transient message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Stable key; repeats with the same key are shown once
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedupe_key: Option<String>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
            icon: None,
            dedupe_key: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            icon: None,
            dedupe_key: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_dedupe_key(mut self, key: impl Into<String>) -> Self {
        self.dedupe_key = Some(key.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Something the controller did (or refused to do) that may deserve a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A mutation was committed
    Committed(Change),
    /// A direct (form) operation was rejected
    Rejected(BoardError),
    /// A live transfer during drag-over was rejected
    TransferRejected(BoardError),
    /// A dragged column landed in a new position
    ColumnReordered { title: String },
    /// A dragged task finished in a different column than it started in
    TaskMoved {
        task: TaskId,
        from_title: String,
        to_title: String,
    },
}

/// Maps outcomes to notifications
#[derive(Debug, Default, Clone, Copy)]
pub struct OutcomeReporter;

impl OutcomeReporter {
    pub fn new() -> Self {
        Self
    }

    /// The notification for an outcome, if any. Stale-id rejections and
    /// purely positional changes produce none.
    pub fn report(&self, outcome: &Outcome) -> Option<Notification> {
        match outcome {
            Outcome::Committed(change) => self.report_change(change),
            Outcome::Rejected(error) => self.report_rejection(error),
            Outcome::TransferRejected(error) => {
                if !error.is_user_facing() {
                    return None;
                }
                Some(
                    Notification::error(
                        "A task with the same content already exists in the destination column",
                    )
                    .with_dedupe_key(DUPLICATE_TASK_KEY),
                )
            }
            Outcome::ColumnReordered { title } => Some(
                Notification::success(format!("\"{title}\" column has been reordered"))
                    .with_icon("🔄"),
            ),
            Outcome::TaskMoved {
                from_title,
                to_title,
                ..
            } => Some(
                Notification::success(format!(
                    "Task moved from \"{from_title}\" to \"{to_title}\""
                ))
                .with_icon("📋"),
            ),
        }
    }

    fn report_change(&self, change: &Change) -> Option<Notification> {
        match change {
            Change::ColumnAdded { title, .. } => Some(Notification::success(format!(
                "Column \"{title}\" has been added"
            ))),
            Change::ColumnRemoved { title, .. } => Some(
                Notification::success(format!("\"{title}\" column has been removed"))
                    .with_icon("🗑️"),
            ),
            Change::TaskAdded { .. } => Some(Notification::success("Task has been added")),
            Change::TaskRemoved { .. } => {
                Some(Notification::success("Task has been removed").with_icon("🗑️"))
            }
            // drag gestures are announced once, at drag-end
            Change::ColumnsReordered { .. }
            | Change::TaskTransferred { .. }
            | Change::TaskReordered { .. }
            | Change::Unchanged => None,
        }
    }

    fn report_rejection(&self, error: &BoardError) -> Option<Notification> {
        let message = match error {
            BoardError::EmptyTitle => "Column title cannot be empty",
            BoardError::EmptyContent => "Task content cannot be empty",
            BoardError::DuplicateTitle { .. } => "A column with this title already exists",
            BoardError::DuplicateContent { .. } => {
                "A task with this content already exists in this column"
            }
            BoardError::DuplicateId { .. } => "An item with this id already exists",
            BoardError::Parse { .. } => return Some(Notification::error(error.to_string())),
            BoardError::NoSuchColumn { .. }
            | BoardError::NoSuchTask { .. }
            | BoardError::ColumnIndexOutOfRange { .. } => return None,
        };
        Some(Notification::error(message))
    }
}

/// Receives notifications, in operation order, fire-and-forget
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Keeps every notification in memory
#[derive(Debug, Default, Clone)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Take all pending notifications, leaving the log empty
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }

    /// Number of error notifications
    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|n| n.is_error()).count()
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        self.entries.push(notification);
    }
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Routes notifications into the `tracing` stream
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Success => tracing::info!("{}", notification.message),
            Severity::Error => tracing::warn!(
                dedupe_key = ?notification.dedupe_key,
                "{}",
                notification.message
            ),
        }
    }
}
