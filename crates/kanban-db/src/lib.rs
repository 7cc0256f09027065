//! # kanban-db
//!
//! libSQL-backed document store for Kanban task records.
//!
//! Each task record is one JSON document in the `documents` table,
//! partitioned by namespace and collection. [`gateway::StoreGateway`] is the
//! only access path the rest of the workspace uses.
//!
//! Uses the `libsql` crate for both local files (and `:memory:`) and remote
//! `libsql://` endpoints.

pub mod error;
pub mod gateway;
pub mod helpers;
mod migrations;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use kanban_config::StoreConfig;
use libsql::Builder;

pub use gateway::StoreGateway;

/// Database handle for the document store.
///
/// Wraps a libSQL database and the single connection reused for the
/// lifetime of the handle.
pub struct KanbanDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl KanbanDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// A leading `file:` is stripped. Runs migrations automatically.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let path = path.strip_prefix("file:").unwrap_or(path);
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let kanban_db = Self {
            db,
            conn,
            remote: false,
        };
        kanban_db.run_migrations().await?;
        Ok(kanban_db)
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be built or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let kanban_db = Self {
            db,
            conn,
            remote: true,
        };
        kanban_db.run_migrations().await?;
        Ok(kanban_db)
    }

    /// Open whichever kind of database the endpoint URI names.
    ///
    /// # Errors
    ///
    /// See [`open_local`](Self::open_local) and [`open_remote`](Self::open_remote).
    pub async fn open(config: &StoreConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            Self::open_remote(&config.uri, &config.auth_token).await
        } else {
            Self::open_local(&config.uri).await
        }
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Returns whether this handle talks to a remote server.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }
}
