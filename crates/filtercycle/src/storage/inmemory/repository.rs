//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use filtercycle_core::filter::{Filter, FilterId};
use filtercycle_core::storage::{FilterRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// IDs are assigned like SQLite's `INTEGER PRIMARY KEY`: one past the largest
/// ID in use. Names are unique; duplicate inserts are ignored.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    filters: Arc<RwLock<BTreeMap<FilterId, Filter>>>,
    closed: Arc<AtomicBool>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(RepositoryError::ConnectionFailed(
                "Connection is closed".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl FilterRepository for InMemoryRepository {
    async fn ensure_schema(&self) -> Result<()> {
        self.ensure_open()
    }

    async fn insert_filter(&self, filter_name: &str, cycle_start_date: &str) -> Result<bool> {
        self.ensure_open()?;
        let mut filters = self.filters.write().await;
        if filters.values().any(|f| f.filter_name == filter_name) {
            return Ok(false);
        }

        let filter_id = filters.keys().next_back().map_or(1, |last| last + 1);
        filters.insert(
            filter_id,
            Filter::new(filter_id, filter_name, cycle_start_date),
        );
        Ok(true)
    }

    async fn list_filters(&self) -> Result<Vec<Filter>> {
        self.ensure_open()?;
        let filters = self.filters.read().await;
        Ok(filters.values().cloned().collect())
    }

    async fn get_filter(&self, id: FilterId) -> Result<Option<Filter>> {
        self.ensure_open()?;
        let filters = self.filters.read().await;
        Ok(filters.get(&id).cloned())
    }

    async fn update_cycle_start_date(
        &self,
        id: FilterId,
        cycle_start_date: &str,
    ) -> Result<usize> {
        self.ensure_open()?;
        let mut filters = self.filters.write().await;
        match filters.get_mut(&id) {
            Some(filter) => {
                filter.cycle_start_date = cycle_start_date.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
