//! Row-to-document helpers.
//!
//! Documents are stored as JSON text in the `body` column. These helpers
//! isolate the JSON encoding so the gateway only deals in `Document`s and
//! `TaskRecord`s.

use kanban_core::{Document, TaskRecord};
use serde_json::Value;

use crate::error::DatabaseError;

/// Parse a `body` column into a document.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the text is not a JSON object.
pub fn parse_document(body: &str) -> Result<Document, DatabaseError> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(DatabaseError::Query(format!(
            "stored document is not an object: {other}"
        ))),
        Err(e) => Err(DatabaseError::Query(format!("Invalid JSON in body: {e}"))),
    }
}

/// Encode a document as `body` column text.
///
/// # Errors
///
/// Returns `DatabaseError::Other` if serialization fails.
pub fn document_text(doc: &Document) -> Result<String, DatabaseError> {
    serde_json::to_string(doc).map_err(|e| DatabaseError::Other(e.into()))
}

/// Read every `body` column from a result set and decode it.
///
/// # Errors
///
/// Returns `DatabaseError` if a row cannot be read, is not valid JSON, or is
/// missing a record field.
pub async fn collect_records(mut rows: libsql::Rows) -> Result<Vec<TaskRecord>, DatabaseError> {
    let mut records = Vec::new();
    while let Some(row) = rows.next().await? {
        let doc = parse_document(&row.get::<String>(0)?)?;
        records.push(TaskRecord::from_document(&doc)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_object_bodies() {
        let doc = parse_document(r#"{"key": "T1"}"#).unwrap();
        assert_eq!(doc["key"], "T1");
    }

    #[test]
    fn rejects_non_objects() {
        assert!(matches!(parse_document("[1, 2]"), Err(DatabaseError::Query(_))));
        assert!(matches!(parse_document("{not json"), Err(DatabaseError::Query(_))));
    }

    #[test]
    fn document_text_roundtrip() {
        let doc = parse_document(r#"{"key":"T1","parent":null}"#).unwrap();
        let text = document_text(&doc).unwrap();
        assert_eq!(parse_document(&text).unwrap(), doc);
    }
}
