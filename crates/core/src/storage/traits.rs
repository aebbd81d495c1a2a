use async_trait::async_trait;

use crate::filter::{Filter, FilterId, SEED_FILTER_NAMES};

use super::Result;

/// Storage for filter records.
///
/// Every method maps to a single statement against the backing store, so
/// there is no partially-applied state to recover from.
#[async_trait]
pub trait FilterRepository: Send + Sync {
    /// Creates the `filters` table if it does not exist yet.
    async fn ensure_schema(&self) -> Result<()>;

    /// Inserts a filter unless one with the same name already exists.
    ///
    /// Returns `true` when a row was written.
    async fn insert_filter(&self, filter_name: &str, cycle_start_date: &str) -> Result<bool>;

    /// Lists every filter. Order is unspecified.
    async fn list_filters(&self) -> Result<Vec<Filter>>;

    /// Gets a filter by its ID.
    async fn get_filter(&self, id: FilterId) -> Result<Option<Filter>>;

    /// Sets the cycle-start date of a filter, returning the number of rows changed.
    async fn update_cycle_start_date(
        &self,
        id: FilterId,
        cycle_start_date: &str,
    ) -> Result<usize>;

    /// Releases the underlying connection. Subsequent calls fail.
    async fn close(&self) -> Result<()>;

    /// Inserts the seed catalogue with the given timestamp.
    ///
    /// Returns how many seed rows were new. Names that already exist keep
    /// their stored date.
    async fn seed(&self, cycle_start_date: &str) -> Result<usize> {
        let mut inserted = 0;
        for filter_name in SEED_FILTER_NAMES {
            if self.insert_filter(filter_name, cycle_start_date).await? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }
}
