//! ReorderColumns command

use crate::error::{BoardError, Result};
use crate::mutation::{relocate, Applied, Change, Mutation};
use crate::types::Board;
use serde::Serialize;

/// Move the column at `from` to position `to`, shifting the columns in between.
///
/// `to` is clamped to the last position.
#[derive(Debug, Clone, Serialize)]
pub struct ReorderColumns {
    pub from: usize,
    pub to: usize,
}

impl ReorderColumns {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }
}

impl Mutation for ReorderColumns {
    fn op_string(&self) -> &'static str {
        "reorder columns"
    }

    fn apply(&self, board: &Board) -> Result<Applied> {
        let len = board.len();
        if self.from >= len {
            return Err(BoardError::ColumnIndexOutOfRange {
                index: self.from,
                len,
            });
        }

        let to = self.to.min(len - 1);
        if to == self.from {
            return Ok(Applied::unchanged(board));
        }

        let mut next = board.clone();
        let id = next.columns()[self.from].id().clone();
        relocate(next.columns_mut(), self.from, to);

        Ok(Applied::new(
            next,
            Change::ColumnsReordered {
                id,
                from: self.from,
                to,
            },
        ))
    }
}
