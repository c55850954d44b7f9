//! DeleteColumn command

use crate::error::Result;
use crate::mutation::{Applied, Change, Mutation};
use crate::types::{Board, ColumnId};
use serde::Serialize;

/// Delete a column together with all of its tasks.
///
/// An unknown id is treated as already deleted.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Mutation for DeleteColumn {
    fn op_string(&self) -> &'static str {
        "delete column"
    }

    fn apply(&self, board: &Board) -> Result<Applied> {
        let Some(index) = board.column_index(&self.id) else {
            return Ok(Applied::unchanged(board));
        };

        let mut next = board.clone();
        let removed = next.columns_mut().remove(index);

        Ok(Applied::new(
            next,
            Change::ColumnRemoved {
                id: removed.id().clone(),
                title: removed.title().to_string(),
                task_count: removed.len(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::AddTask;

    #[test]
    fn test_delete_column_with_tasks() {
        let board = Board::with_default_columns();
        let board = AddTask::new("wip", "Draft").apply(&board).unwrap().board;

        let applied = DeleteColumn::new("wip").apply(&board).unwrap();

        assert_eq!(
            applied.board.column_ids(),
            vec![ColumnId::from("todo"), ColumnId::from("done")]
        );
        assert_eq!(applied.board.task_count(), 0);
        assert_eq!(
            applied.change,
            Change::ColumnRemoved {
                id: ColumnId::from("wip"),
                title: "Work in Progress".into(),
                task_count: 1
            }
        );
    }

    #[test]
    fn test_delete_missing_column_is_noop() {
        let board = Board::with_default_columns();
        let applied = DeleteColumn::new("nonexistent").apply(&board).unwrap();
        assert_eq!(applied.board, board);
        assert!(applied.change.is_unchanged());
    }
}
