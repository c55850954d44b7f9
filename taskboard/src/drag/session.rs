//! The state of an in-progress drag

use super::event::DragKind;
use crate::types::{ColumnId, TaskId};
use serde::Serialize;

/// An active drag gesture. Exists only between drag-start and drag-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragSession {
    Task(TaskDrag),
    Column(ColumnDrag),
}

/// A task being dragged, possibly across several columns.
///
/// `content` and `source_title` are copies taken at drag-start, so the
/// drag-end notification can name them even if the originals change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDrag {
    pub(super) task: TaskId,
    pub(super) content: String,
    pub(super) source_column: ColumnId,
    pub(super) source_title: String,
    /// Where the task lives right now; moves with each accepted drag-over
    pub(super) current_column: ColumnId,
    /// Dedupe key of the last warning raised during this drag
    #[serde(skip)]
    pub(super) reported: Option<String>,
}

impl TaskDrag {
    pub fn task(&self) -> &TaskId {
        &self.task
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn source_column(&self) -> &ColumnId {
        &self.source_column
    }

    pub fn source_title(&self) -> &str {
        &self.source_title
    }

    pub fn current_column(&self) -> &ColumnId {
        &self.current_column
    }

    /// True once a drag-over has carried the task out of its source column
    pub fn has_left_source(&self) -> bool {
        self.current_column != self.source_column
    }
}

/// A column being dragged to a new position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDrag {
    pub(super) column: ColumnId,
    pub(super) title: String,
}

impl ColumnDrag {
    pub fn column(&self) -> &ColumnId {
        &self.column
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl DragSession {
    pub fn kind(&self) -> DragKind {
        match self {
            Self::Task(_) => DragKind::Task,
            Self::Column(_) => DragKind::Column,
        }
    }

    /// The raw id of the dragged element
    pub fn dragged_id(&self) -> &str {
        match self {
            Self::Task(drag) => drag.task.as_str(),
            Self::Column(drag) => drag.column.as_str(),
        }
    }

    pub fn as_task(&self) -> Option<&TaskDrag> {
        match self {
            Self::Task(drag) => Some(drag),
            Self::Column(_) => None,
        }
    }

    pub fn as_column(&self) -> Option<&ColumnDrag> {
        match self {
            Self::Column(drag) => Some(drag),
            Self::Task(_) => None,
        }
    }
}
