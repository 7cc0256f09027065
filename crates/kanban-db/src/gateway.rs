//! Store gateway: the only access path to persisted task records.
//!
//! Every operation is one awaited round trip (two for the conditional
//! writes). Not-found is reported as `false`, never as an error.
//!
//! The conditional writes keep the existence check as their gate, and the
//! write that follows is itself conditional at the storage level: insert is
//! `ON CONFLICT DO NOTHING` over the `(namespace, collection, key)` primary
//! key, update is a single `UPDATE .. WHERE key = ?`. Success is read from the
//! affected-row count, so a concurrent writer between the check and the write
//! can't produce a duplicate or resurrect a missing document.

use kanban_config::{StoreConfig, StoreConfigSource, resolve_store_config};
use kanban_core::document::UPDATE_FIELDS;
use kanban_core::{TaskRecord, TaskStatus};
use serde_json::Value;

use crate::KanbanDb;
use crate::error::DatabaseError;
use crate::helpers::{collect_records, document_text};

/// Handle on one collection of one namespace.
pub struct StoreGateway {
    db: KanbanDb,
    namespace: String,
    collection: String,
}

impl StoreGateway {
    /// Open the store named by `config`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Config` if any connection parameter is empty,
    /// or a libSQL error if the endpoint cannot be opened.
    pub async fn connect(config: &StoreConfig) -> Result<Self, DatabaseError> {
        config.validate()?;
        let db = KanbanDb::open(config).await?;
        tracing::debug!(
            uri = %config.uri,
            remote = db.is_remote(),
            namespace = %config.namespace,
            collection = %config.collection,
            "store connected"
        );
        Ok(Self::from_db(db, &config.namespace, &config.collection))
    }

    /// Open the store with explicit parameters when given, otherwise with
    /// whatever `fallback` produces.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Config` when the fallback source is absent
    /// (`ConfigError::CredentialsNotFound`) or incomplete.
    pub async fn connect_or_fallback(
        explicit: Option<StoreConfig>,
        fallback: &dyn StoreConfigSource,
    ) -> Result<Self, DatabaseError> {
        if explicit.is_none() {
            tracing::warn!("no explicit store parameters, using fallback source");
        }
        let config = resolve_store_config(explicit, fallback)?;
        Self::connect(&config).await
    }

    /// Wrap an already open database.
    #[must_use]
    pub fn from_db(db: KanbanDb, namespace: &str, collection: &str) -> Self {
        Self {
            db,
            namespace: namespace.to_string(),
            collection: collection.to_string(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Whether a document with this key is stored.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the query fails.
    pub async fn exists(&self, key: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db
            .conn()
            .query(
                "SELECT 1 FROM documents WHERE namespace = ?1 AND collection = ?2 AND key = ?3",
                libsql::params![self.namespace.as_str(), self.collection.as_str(), key],
            )
            .await?;
        let found = rows.next().await?.is_some();
        tracing::debug!(key, found, "exists");
        Ok(found)
    }

    /// Every stored record, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Document` if any stored document is missing a
    /// field or holds an unknown type or status.
    pub async fn read_all(&self) -> Result<Vec<TaskRecord>, DatabaseError> {
        let rows = self
            .db
            .conn()
            .query(
                "SELECT body FROM documents WHERE namespace = ?1 AND collection = ?2
                 ORDER BY rowid",
                libsql::params![self.namespace.as_str(), self.collection.as_str()],
            )
            .await?;
        let records = collect_records(rows).await?;
        tracing::debug!(count = records.len(), "read_all");
        Ok(records)
    }

    /// Every stored record whose status equals `status`.
    ///
    /// # Errors
    ///
    /// Same as [`read_all`](Self::read_all).
    pub async fn read_by_status(
        &self,
        status: TaskStatus,
    ) -> Result<Vec<TaskRecord>, DatabaseError> {
        let rows = self
            .db
            .conn()
            .query(
                "SELECT body FROM documents
                 WHERE namespace = ?1 AND collection = ?2 AND status = ?3
                 ORDER BY rowid",
                libsql::params![
                    self.namespace.as_str(),
                    self.collection.as_str(),
                    status.as_str()
                ],
            )
            .await?;
        let records = collect_records(rows).await?;
        tracing::debug!(%status, count = records.len(), "read_by_status");
        Ok(records)
    }

    /// The record stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Same as [`read_all`](Self::read_all).
    pub async fn find(&self, key: &str) -> Result<Option<TaskRecord>, DatabaseError> {
        let rows = self
            .db
            .conn()
            .query(
                "SELECT body FROM documents WHERE namespace = ?1 AND collection = ?2 AND key = ?3",
                libsql::params![self.namespace.as_str(), self.collection.as_str(), key],
            )
            .await?;
        let record = collect_records(rows).await?.into_iter().next();
        tracing::debug!(key, found = record.is_some(), "find");
        Ok(record)
    }

    /// Persist the creation view of `record` unless its key is already stored.
    ///
    /// Returns `true` if the document was written.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if a query fails.
    pub async fn insert(&self, record: &TaskRecord) -> Result<bool, DatabaseError> {
        if self.exists(&record.key).await? {
            tracing::warn!(key = %record.key, "insert rejected: key exists");
            return Ok(false);
        }

        let body = document_text(&record.creation_view())?;
        let affected = self
            .db
            .conn()
            .execute(
                "INSERT INTO documents (namespace, collection, key, body)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (namespace, collection, key) DO NOTHING",
                libsql::params![
                    self.namespace.as_str(),
                    self.collection.as_str(),
                    record.key.as_str(),
                    body
                ],
            )
            .await?;

        let written = affected == 1;
        if written {
            tracing::info!(key = %record.key, "inserted");
        } else {
            tracing::warn!(key = %record.key, "insert lost to a concurrent writer");
        }
        Ok(written)
    }

    /// Overwrite the update-view fields of the stored document for
    /// `record.key`, leaving `key`, `creation` and `estimate` untouched.
    ///
    /// Returns `true` if a document was updated; nothing is created when the
    /// key is absent.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if a query fails.
    pub async fn update(&self, record: &TaskRecord) -> Result<bool, DatabaseError> {
        if !self.exists(&record.key).await? {
            tracing::warn!(key = %record.key, "update rejected: key does not exist");
            return Ok(false);
        }

        let view = record.update_view();
        let (sql, mut values) = update_statement(&view)?;
        let mut params = vec![
            self.namespace.clone(),
            self.collection.clone(),
            record.key.clone(),
        ];
        params.append(&mut values);

        let affected = self
            .db
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        let written = affected == 1;
        if written {
            tracing::info!(key = %record.key, status = %record.status, "updated");
        } else {
            tracing::warn!(key = %record.key, "update found no document");
        }
        Ok(written)
    }
}

/// Build the `json_set` statement for an update view.
///
/// Parameters `?1..?3` are namespace, collection and key; each update field
/// follows as JSON text.
fn update_statement(
    view: &kanban_core::Document,
) -> Result<(String, Vec<String>), DatabaseError> {
    let mut assignments = Vec::with_capacity(UPDATE_FIELDS.len());
    let mut values = Vec::with_capacity(UPDATE_FIELDS.len());

    for (idx, field) in UPDATE_FIELDS.iter().enumerate() {
        let value = view.get(*field).cloned().unwrap_or(Value::Null);
        let text = serde_json::to_string(&value).map_err(|e| DatabaseError::Other(e.into()))?;
        assignments.push(format!("'$.{field}', json(?{})", idx + 4));
        values.push(text);
    }

    let sql = format!(
        "UPDATE documents SET body = json_set(body, {})
         WHERE namespace = ?1 AND collection = ?2 AND key = ?3",
        assignments.join(", ")
    );
    Ok((sql, values))
}
