//! Entity structs for the Kanban store.
//!
//! A `TaskRecord` maps to exactly one stored document (see `crate::document`
//! for the two document views and the strict decoder).

mod history;
mod task;

pub use history::{HISTORY_TIMESTAMP_FORMAT, HistoryEntry};
pub use task::{CREATION_FORMAT, NewTask, TaskRecord, creation_stamp};
