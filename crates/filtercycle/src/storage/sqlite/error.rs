//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError` from
//! `filtercycle_core::storage`.

use filtercycle_core::storage::RepositoryError;

const ENTITY_TYPE: &str = "Filter";

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - Constraint violations (`NOT NULL`, `CHECK`, ...) → `RepositoryError::InvalidData`
/// - Connection errors → `RepositoryError::ConnectionFailed`
/// - Column type mismatches → `RepositoryError::Serialization`
/// - No rows → `RepositoryError::NotFound`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(err: &rusqlite::Error, id: Option<&str>) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            RepositoryError::InvalidData(err.to_string())
        }

        rusqlite::Error::SqliteFailure(sqlite_err, _)
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
        }

        rusqlite::Error::InvalidColumnType(..) | rusqlite::Error::FromSqlConversionFailure(..) => {
            RepositoryError::Serialization(err.to_string())
        }

        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type: ENTITY_TYPE,
            id: id.unwrap_or("unknown").to_string(),
        },

        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
///
/// This is the main entry point for error mapping in async code.
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> RepositoryError {
    map_with_id(err, None)
}

/// Maps a tokio_rusqlite error with a known filter ID to a RepositoryError.
pub fn map_tokio_rusqlite_error_with_id(err: tokio_rusqlite::Error, id: i64) -> RepositoryError {
    map_with_id(err, Some(&id.to_string()))
}

fn map_with_id(err: tokio_rusqlite::Error, id: Option<&str>) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => map_rusqlite_error(rusqlite_err, id),
        tokio_rusqlite::Error::ConnectionClosed => {
            RepositoryError::ConnectionFailed("Connection is closed".to_string())
        }
        tokio_rusqlite::Error::Close((_, rusqlite_err)) => {
            RepositoryError::ConnectionFailed(format!("Failed to close connection: {rusqlite_err}"))
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}
