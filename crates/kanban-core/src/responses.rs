//! CLI response types returned by `kanban` commands.

use schemars::JsonSchema;
use serde::Serialize;

use crate::entities::TaskRecord;
use crate::enums::TaskStatus;

/// Result of a conditional write (`kanban create`, `kanban edit`).
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct WriteOutcome {
    pub key: String,
    pub written: bool,
    pub message: String,
}

impl WriteOutcome {
    #[must_use]
    pub fn inserted(key: &str, written: bool) -> Self {
        let message = if written {
            "Item inserted"
        } else {
            "Item not inserted: key already exists"
        };
        Self {
            key: key.to_string(),
            written,
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn updated(key: &str, written: bool) -> Self {
        let message = if written {
            "Item updated"
        } else {
            "Item not updated: key does not exist"
        };
        Self {
            key: key.to_string(),
            written,
            message: message.to_string(),
        }
    }
}

/// One status column of the board.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct BoardColumn {
    pub status: TaskStatus,
    pub records: Vec<TaskRecord>,
}

/// Response from `kanban board`: one column per status, in board order.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct BoardResponse {
    pub columns: Vec<BoardColumn>,
}

impl BoardResponse {
    /// Number of rows needed to show the tallest column.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.records.len())
            .max()
            .unwrap_or(0)
    }
}
