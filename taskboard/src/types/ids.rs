//! Identifier newtypes and identity generation

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a fresh ULID-based identifier
            pub fn new() -> Self {
                Self(ulid::Ulid::new().to_string())
            }

            /// Wrap an existing identifier
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifies a column for its whole lifetime
    ColumnId
);
define_id!(
    /// Identifies a task for its whole lifetime, across column moves
    TaskId
);

/// Source of fresh identities for new columns and tasks.
pub trait IdGenerator: Send {
    fn next_column_id(&mut self) -> ColumnId;
    fn next_task_id(&mut self) -> TaskId;
}

/// Generates ULIDs. The default for interactive use.
#[derive(Debug, Default, Clone, Copy)]
pub struct UlidGenerator;

impl IdGenerator for UlidGenerator {
    fn next_column_id(&mut self) -> ColumnId {
        ColumnId::new()
    }

    fn next_task_id(&mut self) -> TaskId {
        TaskId::new()
    }
}

/// Generates `column-1`, `column-2`, ... and `task-1`, `task-2`, ...
///
/// Replaying the same script with this generator always yields the same board.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    columns: u64,
    tasks: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_column_id(&mut self) -> ColumnId {
        self.columns += 1;
        ColumnId(format!("column-{}", self.columns))
    }

    fn next_task_id(&mut self) -> TaskId {
        self.tasks += 1;
        TaskId(format!("task-{}", self.tasks))
    }
}
