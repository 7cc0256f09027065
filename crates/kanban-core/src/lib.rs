//! # kanban-core
//!
//! Core types and error types for the Kanban task store.
//!
//! This crate provides the foundational types shared across all Kanban crates:
//! - The `TaskRecord` entity and its opaque `HistoryEntry` items
//! - The closed `TaskType` and `TaskStatus` enums
//! - The two document views (creation, update) and strict deserialization
//! - Cross-cutting error types
//! - CLI response types

pub mod document;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;

pub use document::Document;
pub use entities::{HistoryEntry, TaskRecord};
pub use enums::{TaskStatus, TaskType};
pub use errors::CoreError;
