//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create the filters table.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS filters (
    filter_id INTEGER PRIMARY KEY,
    filter_name TEXT UNIQUE,
    cycle_start_date TEXT
);
"#;

/// Insert that silently skips names already present.
pub const INSERT_FILTER_OR_IGNORE: &str = r#"
INSERT OR IGNORE INTO filters (filter_name, cycle_start_date)
VALUES (?1, ?2)
"#;

pub const SELECT_FILTERS: &str = r#"
SELECT filter_id, filter_name, cycle_start_date
FROM filters
"#;

pub const SELECT_FILTER_BY_ID: &str = r#"
SELECT filter_id, filter_name, cycle_start_date
FROM filters
WHERE filter_id = ?1
"#;

pub const UPDATE_CYCLE_START_DATE: &str = r#"
UPDATE filters
SET cycle_start_date = ?2
WHERE filter_id = ?1
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS filters"));
        assert!(CREATE_TABLES.contains("filter_name TEXT UNIQUE"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_FILTER_OR_IGNORE.contains("INSERT OR IGNORE"));
        assert!(SELECT_FILTERS.contains("SELECT"));
        assert!(SELECT_FILTER_BY_ID.contains("WHERE filter_id = ?1"));
        assert!(UPDATE_CYCLE_START_DATE.contains("UPDATE"));
    }

    #[test]
    fn test_statements_run_against_sqlite() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();

        let inserted = conn
            .execute(INSERT_FILTER_OR_IGNORE, ["Filtro", "2024-01-01T00:00:00.000Z"])
            .unwrap();
        let ignored = conn
            .execute(INSERT_FILTER_OR_IGNORE, ["Filtro", "2025-01-01T00:00:00.000Z"])
            .unwrap();
        let updated = conn
            .execute(
                UPDATE_CYCLE_START_DATE,
                rusqlite::params![1, "2024-06-01T00:00:00.000Z"],
            )
            .unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(ignored, 0);
        assert_eq!(updated, 1);
    }
}
