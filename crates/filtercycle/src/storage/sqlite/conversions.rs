//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use filtercycle_core::filter::Filter;
use rusqlite::Row;

/// Convert a SQLite row to a Filter.
///
/// Expected columns: filter_id, filter_name, cycle_start_date
pub fn row_to_filter(row: &Row) -> rusqlite::Result<Filter> {
    let filter_id: i64 = row.get(0)?;
    let filter_name: String = row.get(1)?;
    let cycle_start_date: String = row.get(2)?;

    Ok(Filter {
        filter_id,
        filter_name,
        cycle_start_date,
    })
}
