//! The `Mutation` trait and the structured record of what a mutation changed.
//!
//! Mutations are plain structs whose fields are the parameters. Applying one
//! never touches the input board: it either returns a new board together with
//! a [`Change`], or a [`BoardError`](crate::BoardError) and the caller keeps
//! the board it already had.

use crate::error::Result;
use crate::types::{Board, ColumnId, TaskId};
use serde::Serialize;

/// A pure board transformation
pub trait Mutation: std::fmt::Debug {
    /// Canonical op string, e.g. "add task", "move task"
    fn op_string(&self) -> &'static str;

    /// Compute the board that results from this mutation.
    fn apply(&self, board: &Board) -> Result<Applied>;
}

/// A successfully applied mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub board: Board,
    pub change: Change,
}

impl Applied {
    pub(crate) fn new(board: Board, change: Change) -> Self {
        Self { board, change }
    }

    /// A no-op: hands back an identical board
    pub(crate) fn unchanged(board: &Board) -> Self {
        Self {
            board: board.clone(),
            change: Change::Unchanged,
        }
    }
}

/// What a committed mutation did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum Change {
    ColumnAdded {
        id: ColumnId,
        title: String,
    },
    ColumnRemoved {
        id: ColumnId,
        title: String,
        /// Tasks removed along with the column
        task_count: usize,
    },
    ColumnsReordered {
        id: ColumnId,
        from: usize,
        to: usize,
    },
    TaskAdded {
        column: ColumnId,
        id: TaskId,
    },
    TaskRemoved {
        column: ColumnId,
        id: TaskId,
        index: usize,
    },
    TaskTransferred {
        id: TaskId,
        from: ColumnId,
        to: ColumnId,
    },
    TaskReordered {
        column: ColumnId,
        id: TaskId,
        from: usize,
        to: usize,
    },
    /// The mutation was valid but had nothing to do
    Unchanged,
}

impl Change {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

/// Move the element at `from` to `to`, shifting everything in between by one.
pub(crate) fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
