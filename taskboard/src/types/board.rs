//! Board-level types: Board, Column

use super::ids::{ColumnId, TaskId};
use super::same_text;
use super::task::Task;
use crate::error::{BoardError, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// The kanban board: an ordered sequence of columns.
///
/// Only queries are public. Every change goes through a
/// [`Mutation`](crate::Mutation) so the invariants are enforced in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    columns: Vec<Column>,
}

/// A column defines a workflow stage and owns an ordered list of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    id: ColumnId,
    title: String,
    tasks: Vec<Task>,
}

impl Column {
    pub(crate) fn new(id: ColumnId, title: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            tasks: Vec::new(),
        }
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task ids in display order
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|t| t.id().clone()).collect()
    }

    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    /// Find a task by content, case-insensitive
    pub fn task_by_content(&self, content: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.has_content(content))
    }

    /// Check whether a task with equivalent content already lives here
    pub fn has_content(&self, content: &str) -> bool {
        self.task_by_content(content).is_some()
    }

    pub fn has_title(&self, title: &str) -> bool {
        same_text(&self.title, title)
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// The three columns every new board starts with
    pub fn default_columns() -> Vec<(ColumnId, String)> {
        vec![
            (ColumnId::from_string("todo"), "To Do".into()),
            (ColumnId::from_string("wip"), "Work in Progress".into()),
            (ColumnId::from_string("done"), "Done".into()),
        ]
    }

    /// Create a board seeded with [`Board::default_columns`]
    pub fn with_default_columns() -> Self {
        Self {
            columns: Self::default_columns()
                .into_iter()
                .map(|(id, title)| Column::new(id, &title))
                .collect(),
        }
    }

    /// Create a board with the given empty columns, validating titles and ids.
    pub fn with_columns<I, T>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (ColumnId, T)>,
        T: AsRef<str>,
    {
        let mut board = Self::new();
        for (id, title) in columns {
            let title = title.as_ref();
            if title.trim().is_empty() {
                return Err(BoardError::EmptyTitle);
            }
            if board.column(&id).is_some() {
                return Err(BoardError::duplicate_id("column", id.as_str()));
            }
            if board.has_title(title) {
                return Err(BoardError::DuplicateTitle {
                    title: title.trim().to_string(),
                });
            }
            board.columns.push(Column::new(id, title));
        }
        Ok(board)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column ids in display order
    pub fn column_ids(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|c| c.id.clone()).collect()
    }

    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// Find a column by title, case-insensitive
    pub fn column_by_title(&self, title: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.has_title(title))
    }

    pub fn has_title(&self, title: &str) -> bool {
        self.column_by_title(title).is_some()
    }

    /// Look up a task within a given column
    pub fn task(&self, column: &ColumnId, task: &TaskId) -> Option<&Task> {
        self.column(column)?.task(task)
    }

    /// Locate a task anywhere on the board: its column and index there
    pub fn locate_task(&self, task: &TaskId) -> Option<(&Column, usize)> {
        self.columns
            .iter()
            .find_map(|c| c.task_index(task).map(|index| (c, index)))
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub(crate) fn column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }

    /// Report every broken board invariant. Empty for a healthy board.
    pub fn violations(&self) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut column_ids = HashSet::new();
        let mut titles = HashSet::new();
        let mut task_ids = HashSet::new();

        for column in &self.columns {
            if !column_ids.insert(column.id.clone()) {
                violations.push(Violation::DuplicateColumnId(column.id.clone()));
            }
            if column.title.trim().is_empty() {
                violations.push(Violation::EmptyTitle(column.id.clone()));
            }
            if !titles.insert(super::fold_text(&column.title)) {
                violations.push(Violation::DuplicateTitle(column.title.clone()));
            }

            let mut contents = HashSet::new();
            for task in &column.tasks {
                if !task_ids.insert(task.id().clone()) {
                    violations.push(Violation::DuplicateTaskId(task.id().clone()));
                }
                if task.content().trim().is_empty() {
                    violations.push(Violation::EmptyContent(task.id().clone()));
                }
                if !contents.insert(super::fold_text(task.content())) {
                    violations.push(Violation::DuplicateContent {
                        column: column.id.clone(),
                        content: task.content().to_string(),
                    });
                }
            }
        }

        violations
    }

    pub fn is_consistent(&self) -> bool {
        self.violations().is_empty()
    }
}

/// A broken board invariant, as found by [`Board::violations`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    DuplicateColumnId(ColumnId),
    EmptyTitle(ColumnId),
    DuplicateTitle(String),
    /// The same task id appears twice on the board
    DuplicateTaskId(TaskId),
    EmptyContent(TaskId),
    DuplicateContent { column: ColumnId, content: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateColumnId(id) => write!(f, "column id {id} appears more than once"),
            Self::EmptyTitle(id) => write!(f, "column {id} has an empty title"),
            Self::DuplicateTitle(title) => write!(f, "column title '{title}' is not unique"),
            Self::DuplicateTaskId(id) => write!(f, "task id {id} appears more than once"),
            Self::EmptyContent(id) => write!(f, "task {id} has empty content"),
            Self::DuplicateContent { column, content } => {
                write!(f, "column {column} holds '{content}' more than once")
            }
        }
    }
}
