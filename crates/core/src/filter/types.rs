use serde::{Deserialize, Serialize};

/// Row identifier assigned by storage on insert.
pub type FilterId = i64;

/// A water-filter cartridge and the moment its current usage cycle began.
///
/// Field names match the `filters` table columns and are serialized as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub filter_id: FilterId,
    pub filter_name: String,
    /// ISO-8601 timestamp, stored as text and never parsed.
    pub cycle_start_date: String,
}

impl Filter {
    pub fn new(
        filter_id: FilterId,
        filter_name: impl Into<String>,
        cycle_start_date: impl Into<String>,
    ) -> Self {
        Self {
            filter_id,
            filter_name: filter_name.into(),
            cycle_start_date: cycle_start_date.into(),
        }
    }
}
