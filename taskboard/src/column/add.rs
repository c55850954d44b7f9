//! AddColumn command

use crate::error::{BoardError, Result};
use crate::mutation::{Applied, Change, Mutation};
use crate::types::{Board, Column, ColumnId};
use serde::Serialize;

/// Append a new, empty column to the end of the board
#[derive(Debug, Clone, Serialize)]
pub struct AddColumn {
    /// The id the new column will carry
    pub id: ColumnId,
    /// The column display title
    pub title: String,
}

impl AddColumn {
    /// Create a new AddColumn command with a fresh ULID
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
        }
    }

    /// Use a caller-chosen id instead of a fresh ULID
    pub fn with_id(mut self, id: impl Into<ColumnId>) -> Self {
        self.id = id.into();
        self
    }
}

impl Mutation for AddColumn {
    fn op_string(&self) -> &'static str {
        "add column"
    }

    fn apply(&self, board: &Board) -> Result<Applied> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        if board.has_title(title) {
            return Err(BoardError::DuplicateTitle {
                title: title.to_string(),
            });
        }
        if board.column(&self.id).is_some() {
            return Err(BoardError::duplicate_id("column", self.id.as_str()));
        }

        let mut next = board.clone();
        next.columns_mut().push(Column::new(self.id.clone(), title));

        Ok(Applied::new(
            next,
            Change::ColumnAdded {
                id: self.id.clone(),
                title: title.to_string(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_column() {
        let board = Board::with_default_columns();

        let applied = AddColumn::new("Blocked")
            .with_id("blocked")
            .apply(&board)
            .unwrap();

        assert_eq!(applied.board.len(), 4);
        let last = &applied.board.columns()[3];
        assert_eq!(last.id().as_str(), "blocked");
        assert_eq!(last.title(), "Blocked");
        assert!(last.is_empty());
        assert_eq!(
            applied.change,
            Change::ColumnAdded {
                id: ColumnId::from("blocked"),
                title: "Blocked".into()
            }
        );
        // input untouched
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_add_column_trims_title() {
        let applied = AddColumn::new("  Review ").apply(&Board::new()).unwrap();
        assert_eq!(applied.board.columns()[0].title(), "Review");
    }

    #[test]
    fn test_add_column_empty_title() {
        let result = AddColumn::new("   ").apply(&Board::new());
        assert_eq!(result, Err(BoardError::EmptyTitle));
    }

    #[test]
    fn test_add_column_duplicate_title_is_case_insensitive() {
        let board = Board::with_default_columns();
        let result = AddColumn::new("  DONE ").apply(&board);
        assert!(matches!(result, Err(BoardError::DuplicateTitle { .. })));
    }

    #[test]
    fn test_add_column_duplicate_id() {
        let board = Board::with_default_columns();
        let result = AddColumn::new("Later").with_id("todo").apply(&board);
        assert!(matches!(result, Err(BoardError::DuplicateId { .. })));
    }
}
