//! AddTask command

use crate::error::{BoardError, Result};
use crate::mutation::{Applied, Change, Mutation};
use crate::types::{Board, ColumnId, Task, TaskId};
use serde::Serialize;

/// Append a new task to the end of a column
#[derive(Debug, Clone, Serialize)]
pub struct AddTask {
    /// The column receiving the task
    pub column: ColumnId,
    /// The id the new task will carry
    pub id: TaskId,
    /// The task text
    pub content: String,
}

impl AddTask {
    /// Create a new AddTask command with a fresh ULID
    pub fn new(column: impl Into<ColumnId>, content: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            id: TaskId::new(),
            content: content.into(),
        }
    }

    /// Use a caller-chosen id instead of a fresh ULID
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }
}

impl Mutation for AddTask {
    fn op_string(&self) -> &'static str {
        "add task"
    }

    fn apply(&self, board: &Board) -> Result<Applied> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(BoardError::EmptyContent);
        }

        let column = board
            .column(&self.column)
            .ok_or_else(|| BoardError::no_such_column(self.column.as_str()))?;
        if column.has_content(content) {
            return Err(BoardError::duplicate_content(content, column.title()));
        }
        if board.locate_task(&self.id).is_some() {
            return Err(BoardError::duplicate_id("task", self.id.as_str()));
        }

        let mut next = board.clone();
        if let Some(column) = next.column_mut(&self.column) {
            column.tasks_mut().push(Task::new(self.id.clone(), content));
        }

        Ok(Applied::new(
            next,
            Change::TaskAdded {
                column: self.column.clone(),
                id: self.id.clone(),
            },
        ))
    }
}
