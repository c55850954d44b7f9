//! Core types for the board engine

mod board;
mod ids;
mod task;

// Re-export all types
pub use board::{Board, Column, Violation};
pub use ids::{ColumnId, IdGenerator, SequentialIds, TaskId, UlidGenerator};
pub use task::Task;

/// Key used for duplicate detection: trimmed and lowercased
pub(crate) fn fold_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Case-insensitive, whitespace-trimmed equality
pub(crate) fn same_text(a: &str, b: &str) -> bool {
    fold_text(a) == fold_text(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_text() {
        assert!(same_text("Done", " done "));
        assert!(same_text("ÉTÉ", "été"));
        assert!(!same_text("Done", "Doing"));
    }
}
