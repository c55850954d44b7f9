//! Kanban board engine with drag-and-drop reordering
//!
//! This crate holds the state machine behind a kanban board: columns of
//! tasks that the user rearranges by dragging. It owns no rendering and no
//! storage; a capture layer feeds it pointer events and a sink shows the
//! notifications it produces.
//!
//! ## Overview
//!
//! - **Pure mutations** - Every change is a command struct implementing
//!   [`Mutation`], computing a new [`Board`] or rejecting with a
//!   [`BoardError`]. The input board is never touched.
//! - **One writer** - A [`DragController`] owns the board and the active
//!   drag, applies live transfers during drag-over and commits on drop.
//! - **Decoupled messages** - The [`OutcomeReporter`] turns outcomes into
//!   [`Notification`]s; where they go is up to the [`NotificationSink`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard::{Board, ColumnId, DragController, DragTarget};
//!
//! let mut controller = DragController::new(Board::with_default_columns());
//! let todo = ColumnId::from("todo");
//! let wip = ColumnId::from("wip");
//!
//! let task = controller.add_task(&todo, "Write spec")?;
//!
//! controller.apply_drag_start(DragTarget::task(task.clone(), todo.clone()));
//! controller.apply_drag_over(Some(DragTarget::column(wip.clone())));
//! controller.apply_drag_end(Some(DragTarget::column(wip.clone())));
//!
//! assert!(controller.board().task(&wip, &task).is_some());
//! assert!(!controller.is_dragging());
//! # Ok::<(), taskboard::BoardError>(())
//! ```

pub mod column;
pub mod config;
pub mod drag;
mod error;
mod mutation;
pub mod outcome;
pub mod script;
pub mod task;
pub mod types;

pub use config::{BoardConfig, ColumnSeed};
pub use drag::{
    AbandonReason, DragController, DragEvent, DragKind, DragSession, DragTarget, DragWatchdog,
};
pub use error::{BoardError, ErrorKind, Result};
pub use mutation::{Applied, Change, Mutation};
pub use outcome::{
    Notification, NotificationLog, NotificationSink, Outcome, OutcomeReporter, Severity,
    TracingSink,
};
pub use script::{Script, Step};

// Re-export commonly used types
pub use types::{
    Board, Column, ColumnId, IdGenerator, SequentialIds, Task, TaskId, UlidGenerator, Violation,
};
