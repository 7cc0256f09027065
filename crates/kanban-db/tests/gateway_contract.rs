//! Persistence contract of `StoreGateway` against a real libSQL database.

use kanban_config::StoreConfig;
use kanban_core::{CoreError, HistoryEntry, TaskRecord, TaskStatus, TaskType};
use kanban_db::error::DatabaseError;
use kanban_db::{KanbanDb, StoreGateway};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

async fn gateway() -> StoreGateway {
    StoreGateway::connect(&StoreConfig::in_memory("kanban", "tasks"))
        .await
        .unwrap()
}

fn record(key: &str, status: TaskStatus) -> TaskRecord {
    TaskRecord {
        key: key.to_string(),
        kind: TaskType::Task,
        creation: "2024-01-01-10-00".into(),
        estimate: "3H".into(),
        time_spent: "0".into(),
        status,
        description: "fix bug".into(),
        parent: None,
        history: Vec::new(),
    }
}

#[tokio::test]
async fn second_insert_is_rejected_and_leaves_document_untouched() {
    let gw = gateway().await;
    let first = record("T1", TaskStatus::Draft);
    assert!(gw.insert(&first).await.unwrap());

    let mut second = record("T1", TaskStatus::Open);
    second.creation = "2030-12-31-23-59".into();
    second.description = "other".into();
    assert!(!gw.insert(&second).await.unwrap());

    assert_eq!(gw.read_all().await.unwrap(), vec![first]);
}

#[tokio::test]
async fn update_of_absent_key_creates_nothing() {
    let gw = gateway().await;
    assert!(!gw.update(&record("ghost", TaskStatus::Open)).await.unwrap());
    assert!(!gw.exists("ghost").await.unwrap());
    assert!(gw.read_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_never_touches_immutable_fields() {
    let gw = gateway().await;
    let original = record("T1", TaskStatus::Draft);
    gw.insert(&original).await.unwrap();

    let mut edited = original.clone();
    edited.creation = "1999-01-01-00-00".into();
    edited.estimate = "99H".into();
    edited.kind = TaskType::Epic;
    edited.time_spent = "2H".into();
    edited.description = "done".into();
    assert!(gw.update(&edited).await.unwrap());

    let stored = gw.find("T1").await.unwrap().unwrap();
    assert_eq!(stored.creation, original.creation);
    assert_eq!(stored.estimate, original.estimate);
    assert_eq!(stored.kind, TaskType::Epic);
    assert_eq!(stored.time_spent, "2H");
    assert_eq!(stored.description, "done");
}

#[rstest]
#[case(TaskStatus::Draft)]
#[case(TaskStatus::Open)]
#[case(TaskStatus::Active)]
#[case(TaskStatus::Complete)]
#[case(TaskStatus::Discarded)]
#[tokio::test]
async fn read_by_status_is_exact(#[case] wanted: TaskStatus) {
    let gw = gateway().await;
    for status in TaskStatus::ALL {
        gw.insert(&record(&format!("{status}-1"), status)).await.unwrap();
        gw.insert(&record(&format!("{status}-2"), status)).await.unwrap();
    }

    let found = gw.read_by_status(wanted).await.unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|r| r.status == wanted));

    let all = gw.read_all().await.unwrap();
    let expected: Vec<_> = all.into_iter().filter(|r| r.status == wanted).collect();
    assert_eq!(found, expected);
}

#[tokio::test]
async fn draft_to_active_walkthrough() {
    let gw = gateway().await;
    let mut t1 = record("T1", TaskStatus::Draft);

    assert!(gw.insert(&t1).await.unwrap());
    assert_eq!(gw.read_by_status(TaskStatus::Draft).await.unwrap(), vec![t1.clone()]);

    t1.status = TaskStatus::Active;
    t1.record(HistoryEntry::new(
        json!({"timestamp": "2024-01-01 11:00:00", "comment": "started"}),
    ));
    assert!(gw.update(&t1).await.unwrap());

    assert!(gw.read_by_status(TaskStatus::Draft).await.unwrap().is_empty());
    let active = gw.read_by_status(TaskStatus::Active).await.unwrap();
    assert_eq!(active, vec![t1]);
    assert_eq!(active[0].creation, "2024-01-01-10-00");
}

#[tokio::test]
async fn stored_document_missing_a_field_fails_the_read() {
    let db = KanbanDb::open_local(":memory:").await.unwrap();
    db.conn()
        .execute(
            "INSERT INTO documents (namespace, collection, key, body) VALUES ('kanban', 'tasks', 'T9', ?1)",
            [json!({
                "key": "T9",
                "type": "Task",
                "creation": "2024-01-01-10-00",
                "estimate": "1H",
                "time_spent": "0",
                "status": "Open",
                "parent": null,
                "history": []
            })
            .to_string()],
        )
        .await
        .unwrap();
    let gw = StoreGateway::from_db(db, "kanban", "tasks");

    let err = gw.read_by_status(TaskStatus::Open).await.unwrap_err();
    match err {
        DatabaseError::Document(CoreError::MissingField { field }) => {
            assert_eq!(field, "description");
        }
        other => panic!("expected missing field, got {other:?}"),
    }
}

#[rstest]
#[case("status", " active")]
#[case("status", "active")]
#[case("type", "task")]
#[tokio::test]
async fn non_canonical_enum_values_fail_the_read(#[case] field: &str, #[case] value: &str) {
    let db = KanbanDb::open_local(":memory:").await.unwrap();
    let mut body = json!({
        "key": "T1",
        "type": "Task",
        "creation": "2024-01-01-10-00",
        "estimate": "1H",
        "time_spent": "0",
        "status": "Active",
        "description": "fix bug",
        "parent": null,
        "history": []
    });
    body[field] = json!(value);
    db.conn()
        .execute(
            "INSERT INTO documents (namespace, collection, key, body) VALUES ('kanban', 'tasks', 'T1', ?1)",
            [body.to_string()],
        )
        .await
        .unwrap();
    let gw = StoreGateway::from_db(db, "kanban", "tasks");

    match gw.read_all().await.unwrap_err() {
        DatabaseError::Document(CoreError::InvalidValue { field: f, value: v }) => {
            assert_eq!(f, field);
            assert_eq!(v, value);
        }
        other => panic!("expected invalid value, got {other:?}"),
    }
    assert!(gw.find("T1").await.is_err());

    let active = gw.read_by_status(TaskStatus::Active).await;
    if field == "status" {
        assert!(active.unwrap().is_empty());
    } else {
        assert!(active.is_err());
    }
}

#[tokio::test]
async fn collections_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let uri = dir.path().join("kanban.db").display().to_string();

    let left = StoreGateway::connect(&StoreConfig::new(uri.clone(), "kanban", "left"))
        .await
        .unwrap();
    let right = StoreGateway::connect(&StoreConfig::new(uri, "kanban", "right"))
        .await
        .unwrap();

    assert!(left.insert(&record("T1", TaskStatus::Open)).await.unwrap());
    assert!(!right.exists("T1").await.unwrap());
    assert!(right.insert(&record("T1", TaskStatus::Draft)).await.unwrap());

    assert_eq!(left.read_by_status(TaskStatus::Draft).await.unwrap(), vec![]);
    assert_eq!(right.read_all().await.unwrap().len(), 1);
}
