use chrono::{Local, NaiveDateTime};
use schemars::JsonSchema;
use serde::Serialize;

use crate::entities::HistoryEntry;
use crate::enums::{TaskStatus, TaskType};

/// Layout of the `creation` field (`YYYY-MM-DD-HH-MM`).
pub const CREATION_FORMAT: &str = "%Y-%m-%d-%H-%M";

/// Format a creation timestamp.
#[must_use]
pub fn creation_stamp(at: NaiveDateTime) -> String {
    at.format(CREATION_FORMAT).to_string()
}

/// One unit of work on the board.
///
/// `key` and `creation` are set once; edits only ever touch the remaining
/// fields (see [`TaskRecord::update_view`]). Deserialization goes through
/// [`TaskRecord::from_document`], so a missing field is always an error.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct TaskRecord {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: TaskType,
    pub creation: String,
    pub estimate: String,
    pub time_spent: String,
    pub status: TaskStatus,
    pub description: String,
    pub parent: Option<String>,
    pub history: Vec<HistoryEntry>,
}

impl TaskRecord {
    /// Append an entry to the history.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }
}

/// User-supplied values for a record that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub key: String,
    pub kind: TaskType,
    pub estimate: String,
    pub description: String,
    pub parent: Option<String>,
}

impl NewTask {
    /// Build a Draft record stamped with the current local time.
    #[must_use]
    pub fn into_draft(self) -> TaskRecord {
        self.into_draft_at(Local::now().naive_local())
    }

    /// Build a Draft record stamped with `at`.
    ///
    /// Time spent starts at `"0"` and the history starts empty.
    #[must_use]
    pub fn into_draft_at(self, at: NaiveDateTime) -> TaskRecord {
        TaskRecord {
            key: self.key,
            kind: self.kind,
            creation: creation_stamp(at),
            estimate: self.estimate,
            time_spent: "0".to_string(),
            status: TaskStatus::Draft,
            description: self.description,
            parent: self.parent,
            history: Vec::new(),
        }
    }
}
