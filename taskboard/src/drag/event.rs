//! Events delivered by the pointer capture layer

use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Task,
    Column,
}

/// A draggable element, or the element currently under the pointer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragTarget {
    /// A task card, with the column the capture layer saw it in
    Task { id: TaskId, column: ColumnId },
    /// A column (its header or its empty drop area)
    Column { id: ColumnId },
}

impl DragTarget {
    pub fn task(id: impl Into<TaskId>, column: impl Into<ColumnId>) -> Self {
        Self::Task {
            id: id.into(),
            column: column.into(),
        }
    }

    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column { id: id.into() }
    }

    pub fn kind(&self) -> DragKind {
        match self {
            Self::Task { .. } => DragKind::Task,
            Self::Column { .. } => DragKind::Column,
        }
    }

    /// The raw id of the element, whatever its kind
    pub fn id(&self) -> &str {
        match self {
            Self::Task { id, .. } => id.as_str(),
            Self::Column { id } => id.as_str(),
        }
    }
}

/// Why a drag ended without a drag-end event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbandonReason {
    /// No pointer activity within the configured timeout
    #[default]
    Timeout,
    /// The page or window lost visibility mid-gesture
    Hidden,
    /// The capture layer cancelled the gesture (escape key, pointer lost)
    Cancelled,
}

impl fmt::Display for AbandonReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Timeout => "timeout",
            Self::Hidden => "hidden",
            Self::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// One step of a pointer gesture.
///
/// `Over` and `End` carry no target when the pointer is over empty space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DragEvent {
    Start { item: DragTarget },
    Over { target: Option<DragTarget> },
    End { target: Option<DragTarget> },
    Abandon { reason: AbandonReason },
}

impl DragEvent {
    pub fn start(item: DragTarget) -> Self {
        Self::Start { item }
    }

    pub fn over(target: Option<DragTarget>) -> Self {
        Self::Over { target }
    }

    pub fn end(target: Option<DragTarget>) -> Self {
        Self::End { target }
    }

    /// Whether this event closes the gesture
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::End { .. } | Self::Abandon { .. })
    }
}
