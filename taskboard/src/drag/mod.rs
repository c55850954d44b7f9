//! Drag-and-drop session handling
//!
//! The capture layer feeds [`DragEvent`]s to a [`DragController`], which
//! applies live transfers while the pointer moves and commits the final
//! placement on drop.

mod controller;
mod event;
mod session;
mod watchdog;

pub use controller::DragController;
pub use event::{AbandonReason, DragEvent, DragKind, DragTarget};
pub use session::{ColumnDrag, DragSession, TaskDrag};
pub use watchdog::DragWatchdog;
