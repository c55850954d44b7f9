//! DeleteTask command

use crate::error::Result;
use crate::mutation::{Applied, Change, Mutation};
use crate::types::{Board, ColumnId, TaskId};
use serde::Serialize;

/// Remove a task from its column. Unknown column or task ids are a no-op.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteTask {
    pub column: ColumnId,
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(column: impl Into<ColumnId>, id: impl Into<TaskId>) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
        }
    }
}

impl Mutation for DeleteTask {
    fn op_string(&self) -> &'static str {
        "delete task"
    }

    fn apply(&self, board: &Board) -> Result<Applied> {
        let Some(index) = board
            .column(&self.column)
            .and_then(|c| c.task_index(&self.id))
        else {
            return Ok(Applied::unchanged(board));
        };

        let mut next = board.clone();
        if let Some(column) = next.column_mut(&self.column) {
            column.tasks_mut().remove(index);
        }

        Ok(Applied::new(
            next,
            Change::TaskRemoved {
                column: self.column.clone(),
                id: self.id.clone(),
                index,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;

    fn board_with(contents: &[&str]) -> Board {
        let mut board = Board::with_default_columns();
        for (i, content) in contents.iter().enumerate() {
            board = AddTask::new("todo", *content)
                .with_id(format!("t{i}"))
                .apply(&board)
                .unwrap()
                .board;
        }
        board
    }

    #[test]
    fn test_delete_middle_task_preserves_order() {
        let board = board_with(&["a", "b", "c", "d"]);

        let applied = DeleteTask::new("todo", "t1").apply(&board).unwrap();

        let todo = applied.board.column(&ColumnId::from("todo")).unwrap();
        let contents: Vec<&str> = todo.tasks().iter().map(|t| t.content()).collect();
        assert_eq!(contents, vec!["a", "c", "d"]);
        assert_eq!(
            applied.change,
            Change::TaskRemoved {
                column: ColumnId::from("todo"),
                id: TaskId::from("t1"),
                index: 1
            }
        );
    }

    #[test]
    fn test_delete_missing_task_is_noop() {
        let board = board_with(&["a"]);
        let applied = DeleteTask::new("todo", "nope").apply(&board).unwrap();
        assert_eq!(applied.board, board);
        assert!(applied.change.is_unchanged());
    }

    #[test]
    fn test_delete_from_wrong_column_is_noop() {
        let board = board_with(&["a"]);
        let applied = DeleteTask::new("done", "t0").apply(&board).unwrap();
        assert_eq!(applied.board, board);
    }
}
