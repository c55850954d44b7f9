//! MoveTask command

use crate::error::{BoardError, Result};
use crate::mutation::{Applied, Change, Mutation};
use crate::types::{Board, ColumnId, TaskId};
use serde::Serialize;

/// Move a task to the end of a different column.
///
/// The move is all-or-nothing: if the destination already holds a task with
/// the same content, the task stays where it is.
#[derive(Debug, Clone, Serialize)]
pub struct MoveTask {
    /// The task ID to move
    pub id: TaskId,
    /// The column currently holding the task
    pub from: ColumnId,
    /// The destination column
    pub to: ColumnId,
}

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, from: impl Into<ColumnId>, to: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

impl Mutation for MoveTask {
    fn op_string(&self) -> &'static str {
        "move task"
    }

    fn apply(&self, board: &Board) -> Result<Applied> {
        let source = board
            .column(&self.from)
            .ok_or_else(|| BoardError::no_such_column(self.from.as_str()))?;
        let index = source
            .task_index(&self.id)
            .ok_or_else(|| BoardError::no_such_task(self.id.as_str()))?;
        let destination = board
            .column(&self.to)
            .ok_or_else(|| BoardError::no_such_column(self.to.as_str()))?;

        if self.from == self.to {
            return Ok(Applied::unchanged(board));
        }

        let content = source.tasks()[index].content();
        if destination.has_content(content) {
            return Err(BoardError::duplicate_content(content, destination.title()));
        }
        if destination.task(&self.id).is_some() {
            return Err(BoardError::duplicate_id("task", self.id.as_str()));
        }

        let mut next = board.clone();
        let task = match next.column_mut(&self.from) {
            Some(column) => column.tasks_mut().remove(index),
            None => return Err(BoardError::no_such_column(self.from.as_str())),
        };
        match next.column_mut(&self.to) {
            Some(column) => column.tasks_mut().push(task),
            None => return Err(BoardError::no_such_column(self.to.as_str())),
        }

        Ok(Applied::new(
            next,
            Change::TaskTransferred {
                id: self.id.clone(),
                from: self.from.clone(),
                to: self.to.clone(),
            },
        ))
    }
}
