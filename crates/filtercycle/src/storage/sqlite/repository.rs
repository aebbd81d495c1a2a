//! SQLite repository implementation.
//!
//! Implements [`FilterRepository`] on top of a single `tokio-rusqlite`
//! connection. The connection runs on its own thread and executes calls one
//! at a time, which is all the serialization the service needs.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use filtercycle_core::filter::{Filter, FilterId};
use filtercycle_core::storage::{FilterRepository, RepositoryError, Result};

use super::conversions::row_to_filter;
use super::error::{map_tokio_rusqlite_error, map_tokio_rusqlite_error_with_id};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (creating if needed) a file-based database.
    ///
    /// The schema is not touched; call [`FilterRepository::ensure_schema`].
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    #[cfg(test)]
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl FilterRepository for SqliteRepository {
    async fn ensure_schema(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_TABLES)
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn insert_filter(&self, filter_name: &str, cycle_start_date: &str) -> Result<bool> {
        let filter_name = filter_name.to_string();
        let cycle_start_date = cycle_start_date.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::INSERT_FILTER_OR_IGNORE,
                        rusqlite::params![filter_name, cycle_start_date],
                    )
                    .map_err(wrap_err)?;
                Ok(rows > 0)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_filters(&self) -> Result<Vec<Filter>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_FILTERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_filter).map_err(wrap_err)?;

                let mut filters = Vec::new();
                for row_result in rows {
                    filters.push(row_result.map_err(wrap_err)?);
                }
                Ok(filters)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn get_filter(&self, id: FilterId) -> Result<Option<Filter>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_FILTER_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id], row_to_filter) {
                    Ok(filter) => Ok(Some(filter)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn update_cycle_start_date(
        &self,
        id: FilterId,
        cycle_start_date: &str,
    ) -> Result<usize> {
        let cycle_start_date = cycle_start_date.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::UPDATE_CYCLE_START_DATE,
                    rusqlite::params![id, cycle_start_date],
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error_with_id(e, id))
    }

    async fn close(&self) -> Result<()> {
        self.conn
            .clone()
            .close()
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}
