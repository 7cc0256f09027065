//! Document views of a `TaskRecord` and the strict document decoder.
//!
//! A record is persisted as one JSON object. Two views exist because `key`
//! and `creation` are set once:
//!
//! - the **creation view** carries all nine fields and is only written when
//!   the key does not exist yet;
//! - the **update view** carries the six mutable fields and never `key` or
//!   `creation`.
//!
//! Scalars are emitted as JSON strings (enum values included), `parent` as a
//! string or `null`, and `history` as the array of its opaque entries.

use serde::Deserialize;
use serde::de::{self, Deserializer};
use serde_json::{Map, Value};

use crate::entities::{HistoryEntry, TaskRecord};
use crate::enums::{TaskStatus, TaskType};
use crate::errors::CoreError;

/// A stored document: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

pub const KEY: &str = "key";
pub const TYPE: &str = "type";
pub const CREATION: &str = "creation";
pub const ESTIMATE: &str = "estimate";
pub const TIME_SPENT: &str = "time_spent";
pub const STATUS: &str = "status";
pub const DESCRIPTION: &str = "description";
pub const PARENT: &str = "parent";
pub const HISTORY: &str = "history";

/// Every field of the creation view, in document order.
pub const RECORD_FIELDS: [&str; 9] = [
    KEY,
    TYPE,
    CREATION,
    ESTIMATE,
    TIME_SPENT,
    STATUS,
    DESCRIPTION,
    PARENT,
    HISTORY,
];

/// Fields of the update view.
pub const UPDATE_FIELDS: [&str; 6] = [TYPE, TIME_SPENT, STATUS, DESCRIPTION, PARENT, HISTORY];

impl TaskRecord {
    /// All nine fields, for a first write.
    #[must_use]
    pub fn creation_view(&self) -> Document {
        let mut doc = Document::new();
        doc.insert(KEY.into(), Value::String(self.key.clone()));
        doc.insert(TYPE.into(), Value::String(self.kind.as_str().into()));
        doc.insert(CREATION.into(), Value::String(self.creation.clone()));
        doc.insert(ESTIMATE.into(), Value::String(self.estimate.clone()));
        self.write_mutable(&mut doc);
        doc
    }

    /// The six mutable fields, for overwriting an existing document.
    #[must_use]
    pub fn update_view(&self) -> Document {
        let mut doc = Document::new();
        doc.insert(TYPE.into(), Value::String(self.kind.as_str().into()));
        self.write_mutable(&mut doc);
        doc
    }

    fn write_mutable(&self, doc: &mut Document) {
        doc.insert(TIME_SPENT.into(), Value::String(self.time_spent.clone()));
        doc.insert(STATUS.into(), Value::String(self.status.as_str().into()));
        doc.insert(DESCRIPTION.into(), Value::String(self.description.clone()));
        doc.insert(
            PARENT.into(),
            self.parent.clone().map_or(Value::Null, Value::String),
        );
        doc.insert(
            HISTORY.into(),
            Value::Array(
                self.history
                    .iter()
                    .map(|entry| entry.as_value().clone())
                    .collect(),
            ),
        );
    }

    /// Decode a stored document field for field.
    ///
    /// # Errors
    ///
    /// - `CoreError::MissingField` if any of the nine fields is absent.
    /// - `CoreError::InvalidValue` if `type` or `status` is not a known variant.
    /// - `CoreError::InvalidField` if a field has the wrong JSON shape.
    pub fn from_document(doc: &Document) -> Result<Self, CoreError> {
        if let Some(missing) = RECORD_FIELDS.iter().find(|f| !doc.contains_key(**f)) {
            return Err(CoreError::MissingField {
                field: (*missing).to_string(),
            });
        }

        Ok(Self {
            key: string_field(doc, KEY)?,
            kind: TaskType::from_stored(&string_field(doc, TYPE)?)?,
            creation: string_field(doc, CREATION)?,
            estimate: scalar_field(doc, ESTIMATE)?,
            time_spent: scalar_field(doc, TIME_SPENT)?,
            status: TaskStatus::from_stored(&string_field(doc, STATUS)?)?,
            description: string_field(doc, DESCRIPTION)?,
            parent: optional_string_field(doc, PARENT)?,
            history: history_field(doc)?,
        })
    }
}

/// Decode a batch of documents, failing on the first bad one.
///
/// # Errors
///
/// Returns the first `CoreError` raised by [`TaskRecord::from_document`].
pub fn from_documents<'a, I>(docs: I) -> Result<Vec<TaskRecord>, CoreError>
where
    I: IntoIterator<Item = &'a Document>,
{
    docs.into_iter().map(TaskRecord::from_document).collect()
}

impl<'de> Deserialize<'de> for TaskRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let doc = Document::deserialize(deserializer)?;
        Self::from_document(&doc).map_err(de::Error::custom)
    }
}

fn invalid(field: &str, reason: &str) -> CoreError {
    CoreError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn string_field(doc: &Document, field: &str) -> Result<String, CoreError> {
    match doc.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(invalid(field, "expected a string")),
    }
}

/// Estimates and time spent are opaque; older documents stored them as numbers.
fn scalar_field(doc: &Document, field: &str) -> Result<String, CoreError> {
    match doc.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(invalid(field, "expected a string or number")),
    }
}

fn optional_string_field(doc: &Document, field: &str) -> Result<Option<String>, CoreError> {
    match doc.get(field) {
        Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        _ => Err(invalid(field, "expected a string or null")),
    }
}

fn history_field(doc: &Document) -> Result<Vec<HistoryEntry>, CoreError> {
    match doc.get(HISTORY) {
        Some(Value::Array(items)) => Ok(items.iter().cloned().map(HistoryEntry::new).collect()),
        _ => Err(invalid(HISTORY, "expected an array")),
    }
}
