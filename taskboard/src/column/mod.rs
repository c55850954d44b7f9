//! Column commands

mod add;
mod delete;
mod reorder;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use reorder::ReorderColumns;
