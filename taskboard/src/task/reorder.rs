//! ReorderTask command

use crate::error::{BoardError, Result};
use crate::mutation::{relocate, Applied, Change, Mutation};
use crate::types::{Board, ColumnId, TaskId};
use serde::Serialize;

/// Move a task to a new index inside its own column.
///
/// `to_index` is clamped to the column length. No duplicate check is needed
/// because the content is already in the column.
#[derive(Debug, Clone, Serialize)]
pub struct ReorderTask {
    pub column: ColumnId,
    pub id: TaskId,
    pub to_index: usize,
}

impl ReorderTask {
    pub fn new(column: impl Into<ColumnId>, id: impl Into<TaskId>, to_index: usize) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
            to_index,
        }
    }
}

impl Mutation for ReorderTask {
    fn op_string(&self) -> &'static str {
        "reorder task"
    }

    fn apply(&self, board: &Board) -> Result<Applied> {
        let column = board
            .column(&self.column)
            .ok_or_else(|| BoardError::no_such_column(self.column.as_str()))?;
        let from = column
            .task_index(&self.id)
            .ok_or_else(|| BoardError::no_such_task(self.id.as_str()))?;

        let to = self.to_index.min(column.len() - 1);
        if to == from {
            return Ok(Applied::unchanged(board));
        }

        let mut next = board.clone();
        if let Some(column) = next.column_mut(&self.column) {
            relocate(column.tasks_mut(), from, to);
        }

        Ok(Applied::new(
            next,
            Change::TaskReordered {
                column: self.column.clone(),
                id: self.id.clone(),
                from,
                to,
            },
        ))
    }
}
