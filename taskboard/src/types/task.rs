//! Task type

use super::ids::TaskId;
use super::same_text;
use serde::Serialize;

/// A task/card on the board. Owned by exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    content: String,
}

impl Task {
    /// Create a task. Content is stored trimmed; callers validate emptiness.
    pub(crate) fn new(id: TaskId, content: &str) -> Self {
        Self {
            id,
            content: content.trim().to_string(),
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Case-insensitive, whitespace-trimmed content comparison
    pub fn has_content(&self, content: &str) -> bool {
        same_text(&self.content, content)
    }
}
