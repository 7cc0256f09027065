//! Shared test utilities for kanban-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use kanban_core::{TaskRecord, TaskStatus, TaskType};

    use crate::{KanbanDb, StoreGateway};

    /// In-memory gateway on namespace `kanban`, collection `tasks`.
    pub async fn test_gateway() -> StoreGateway {
        let db = KanbanDb::open_local(":memory:").await.unwrap();
        StoreGateway::from_db(db, "kanban", "tasks")
    }

    /// A Draft task with fixed timestamps.
    pub fn sample_record(key: &str) -> TaskRecord {
        TaskRecord {
            key: key.to_string(),
            kind: TaskType::Task,
            creation: "2024-01-01-10-00".into(),
            estimate: "3H".into(),
            time_spent: "0".into(),
            status: TaskStatus::Draft,
            description: "fix bug".into(),
            parent: None,
            history: Vec::new(),
        }
    }
}
