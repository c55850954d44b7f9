//! Task commands

mod add;
mod delete;
mod mv;
mod reorder;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use mv::MoveTask;
pub use reorder::ReorderTask;
