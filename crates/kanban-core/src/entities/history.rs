use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Timestamp layout used by [`HistoryEntry::comment`].
pub const HISTORY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One opaque entry of a record's change history.
///
/// Entries are stored and compared as-is; no shape is enforced. Entries
/// written by this workspace carry a `timestamp` and a `comment`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct HistoryEntry(Value);

impl HistoryEntry {
    /// Wrap an arbitrary JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Build a `{timestamp, comment}` entry.
    #[must_use]
    pub fn comment(at: NaiveDateTime, text: impl Into<String>) -> Self {
        let mut entry = Map::new();
        entry.insert(
            "timestamp".to_string(),
            Value::String(at.format(HISTORY_TIMESTAMP_FORMAT).to_string()),
        );
        entry.insert("comment".to_string(), Value::String(text.into()));
        Self(Value::Object(entry))
    }

    /// The `timestamp` member, if this entry is an object carrying one.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.0.get("timestamp").and_then(Value::as_str)
    }

    /// The `comment` member, if this entry is an object carrying one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.0.get("comment").and_then(Value::as_str)
    }

    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for HistoryEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
