//! Replayable scripts of board operations and drag gestures.
//!
//! Steps name columns by title and tasks by content, so a script reads the
//! way a user would describe the session:
//!
//! ```yaml
//! steps:
//!   - op: add task
//!     column: To Do
//!     content: Write spec
//!   - op: drag start
//!     item: { kind: task, column: To Do, task: Write spec }
//!   - op: drag over
//!     target: { kind: column, column: Work in Progress }
//!   - op: drag end
//!     target: { kind: column, column: Work in Progress }
//! ```
//!
//! Rejected operations (empty or duplicate input) are reported through the
//! controller's sink and the replay carries on. A step that names a column
//! or task that does not exist aborts the replay.

use crate::drag::{AbandonReason, DragController, DragTarget};
use crate::error::{BoardError, Result};
use crate::outcome::NotificationSink;
use crate::types::{Board, ColumnId, IdGenerator, SequentialIds, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A column or task, named by title and content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Ref {
    Task { column: String, task: String },
    Column { column: String },
}

/// One scripted operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op")]
pub enum Step {
    #[serde(rename = "add column")]
    AddColumn { title: String },
    #[serde(rename = "add task")]
    AddTask { column: String, content: String },
    #[serde(rename = "delete column")]
    DeleteColumn { column: String },
    #[serde(rename = "delete task")]
    DeleteTask { column: String, task: String },
    #[serde(rename = "drag start")]
    DragStart { item: Ref },
    #[serde(rename = "drag over")]
    DragOver {
        #[serde(default)]
        target: Option<Ref>,
    },
    #[serde(rename = "drag end")]
    DragEnd {
        #[serde(default)]
        target: Option<Ref>,
    },
    #[serde(rename = "abandon drag")]
    AbandonDrag {
        #[serde(default)]
        reason: AbandonReason,
    },
}

impl Step {
    /// Canonical op string, as written in scripts
    pub fn op_string(&self) -> &'static str {
        match self {
            Self::AddColumn { .. } => "add column",
            Self::AddTask { .. } => "add task",
            Self::DeleteColumn { .. } => "delete column",
            Self::DeleteTask { .. } => "delete task",
            Self::DragStart { .. } => "drag start",
            Self::DragOver { .. } => "drag over",
            Self::DragEnd { .. } => "drag end",
            Self::AbandonDrag { .. } => "abandon drag",
        }
    }
}

/// A board session to replay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Starting column titles. When absent the caller's seed board is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// The board the replay starts from: the script's own columns if it
    /// declares any (ids `column-1`, `column-2`, ...), otherwise `seed`.
    pub fn starting_board(&self, seed: Board) -> Result<Board> {
        let Some(titles) = &self.columns else {
            return Ok(seed);
        };
        let mut ids = SequentialIds::new();
        Board::with_columns(
            titles
                .iter()
                .map(|title| (ids.next_column_id(), title.as_str())),
        )
    }

    /// Run every step against the controller, in order
    pub fn replay<S: NotificationSink>(&self, controller: &mut DragController<S>) -> Result<()> {
        for (index, step) in self.steps.iter().enumerate() {
            debug!(step = index + 1, op = step.op_string(), "replaying");
            run_step(step, controller)?;
        }
        Ok(())
    }
}

fn run_step<S: NotificationSink>(step: &Step, controller: &mut DragController<S>) -> Result<()> {
    match step {
        Step::AddColumn { title } => {
            if let Err(error) = controller.add_column(title) {
                debug!(%error, "add column rejected");
            }
        }
        Step::AddTask { column, content } => {
            let column = column_id(controller.board(), column)?;
            if let Err(error) = controller.add_task(&column, content) {
                debug!(%error, "add task rejected");
            }
        }
        Step::DeleteColumn { column } => {
            if let Ok(id) = column_id(controller.board(), column) {
                controller.delete_column(&id);
            }
        }
        Step::DeleteTask { column, task } => {
            if let Ok((column, task)) = task_id(controller.board(), column, task) {
                controller.delete_task(&column, &task);
            }
        }
        Step::DragStart { item } => {
            let item = resolve(controller.board(), item)?;
            controller.apply_drag_start(item);
        }
        Step::DragOver { target } => {
            let target = resolve_optional(controller.board(), target.as_ref())?;
            controller.apply_drag_over(target);
        }
        Step::DragEnd { target } => {
            let target = resolve_optional(controller.board(), target.as_ref())?;
            controller.apply_drag_end(target);
        }
        Step::AbandonDrag { reason } => {
            controller.abandon_drag(*reason);
        }
    }
    Ok(())
}

fn column_id(board: &Board, title: &str) -> Result<ColumnId> {
    board
        .column_by_title(title)
        .map(|c| c.id().clone())
        .ok_or_else(|| BoardError::no_such_column(title))
}

fn task_id(board: &Board, column: &str, content: &str) -> Result<(ColumnId, TaskId)> {
    let column = board
        .column_by_title(column)
        .ok_or_else(|| BoardError::no_such_column(column))?;
    let task = column
        .task_by_content(content)
        .ok_or_else(|| BoardError::no_such_task(content))?;
    Ok((column.id().clone(), task.id().clone()))
}

fn resolve(board: &Board, reference: &Ref) -> Result<DragTarget> {
    match reference {
        Ref::Column { column } => Ok(DragTarget::column(column_id(board, column)?)),
        Ref::Task { column, task } => {
            let (column, task) = task_id(board, column, task)?;
            Ok(DragTarget::task(task, column))
        }
    }
}

fn resolve_optional(board: &Board, reference: Option<&Ref>) -> Result<Option<DragTarget>> {
    reference.map(|r| resolve(board, r)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DragController {
        DragController::new(Board::with_default_columns()).with_id_generator(SequentialIds::new())
    }

    #[test]
    fn test_parse_yaml_steps() {
        let yaml = r#"
steps:
  - op: add column
    title: Review
  - op: drag start
    item: { kind: column, column: Review }
  - op: drag end
  - op: abandon drag
    reason: hidden
"#;
        let script = Script::from_yaml(yaml).unwrap();
        assert_eq!(script.columns, None);
        assert_eq!(
            script.steps,
            vec![
                Step::AddColumn {
                    title: "Review".into()
                },
                Step::DragStart {
                    item: Ref::Column {
                        column: "Review".into()
                    }
                },
                Step::DragEnd { target: None },
                Step::AbandonDrag {
                    reason: AbandonReason::Hidden
                },
            ]
        );
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"columns":["A","B"],"steps":[{"op":"add task","column":"A","content":"x"}]}"#;
        let script = Script::from_json(json).unwrap();
        assert_eq!(script.columns.as_deref().map(|c| c.len()), Some(2));
        assert_eq!(script.steps[0].op_string(), "add task");
    }

    #[test]
    fn test_unknown_op_is_parse_error() {
        let result = Script::from_yaml("steps:\n  - op: juggle\n");
        assert!(matches!(result, Err(BoardError::Parse { .. })));
    }

    #[test]
    fn test_starting_board_from_titles() {
        let script = Script {
            columns: Some(vec!["A".into(), "B".into(), "C".into()]),
            steps: Vec::new(),
        };
        let board = script.starting_board(Board::new()).unwrap();
        assert_eq!(board.columns()[2].id().as_str(), "column-3");
        assert_eq!(board.columns()[2].title(), "C");

        let seeded = Script::default()
            .starting_board(Board::with_default_columns())
            .unwrap();
        assert_eq!(seeded.len(), 3);
    }

    #[test]
    fn test_replay_drag() {
        let yaml = r#"
steps:
  - op: add task
    column: To Do
    content: Write spec
  - op: drag start
    item: { kind: task, column: To Do, task: Write spec }
  - op: drag over
    target: { kind: column, column: Done }
  - op: drag end
    target: { kind: column, column: Done }
"#;
        let mut c = controller();
        Script::from_yaml(yaml).unwrap().replay(&mut c).unwrap();

        let done = c.board().column(&ColumnId::from("done")).unwrap();
        assert_eq!(done.task_ids(), vec![TaskId::from("task-1")]);
        assert_eq!(c.sink().len(), 2);
    }

    #[test]
    fn test_rejections_do_not_stop_replay() {
        let yaml = r#"
steps:
  - op: add column
    title: done
  - op: add task
    column: To Do
    content: "  "
  - op: add column
    title: Later
"#;
        let mut c = controller();
        Script::from_yaml(yaml).unwrap().replay(&mut c).unwrap();
        assert_eq!(c.board().len(), 4);
        assert_eq!(c.sink().error_count(), 2);
    }

    #[test]
    fn test_unknown_reference_aborts() {
        let yaml = r#"
steps:
  - op: drag start
    item: { kind: column, column: Nowhere }
  - op: add column
    title: Never
"#;
        let mut c = controller();
        let result = Script::from_yaml(yaml).unwrap().replay(&mut c);
        assert!(matches!(result, Err(BoardError::NoSuchColumn { .. })));
        assert_eq!(c.board().len(), 3);
    }

    #[test]
    fn test_deleting_missing_items_is_silent() {
        let yaml = r#"
steps:
  - op: delete column
    column: Nowhere
  - op: delete task
    column: To Do
    task: nothing
"#;
        let mut c = controller();
        Script::from_yaml(yaml).unwrap().replay(&mut c).unwrap();
        assert!(c.sink().is_empty());
    }
}
