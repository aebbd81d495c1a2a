//! Application state shared by every request handler.
//!
//! The storage handle is injected here instead of living in a global, so tests
//! can hand the router any [`FilterRepository`] they like.

use std::sync::Arc;

use filtercycle_core::storage::FilterRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler; all clones share one repository.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide filter storage, opened at startup and closed at shutdown.
    pub repository: Arc<dyn FilterRepository>,
}

impl AppState {
    /// Creates an AppState around an already opened repository.
    pub fn new(repository: Arc<dyn FilterRepository>) -> Self {
        Self { repository }
    }
}

// ============================================================================
// Factory functions for the compiled-in storage backend
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Opens the SQLite database at `config.sqlite_path`.
        pub async fn open(config: &Config) -> Result<Self, anyhow::Error> {
            let repository = SqliteRepository::open(&config.sqlite_path).await?;

            tracing::info!(path = %config.sqlite_path, "Connected to the filters database");

            Ok(Self::new(Arc::new(repository)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates an AppState backed by volatile in-memory storage.
        pub async fn open(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory filter storage");

            Ok(Self::new(Arc::new(InMemoryRepository::new())))
        }
    }
}
