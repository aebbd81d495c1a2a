//! Startup and shutdown steps around the HTTP server.

use chrono::Utc;
use tokio::signal;

use filtercycle_core::filter::format_timestamp;
use filtercycle_core::storage::{FilterRepository, Result};

/// Creates the schema and inserts the seed catalogue stamped with the current time.
///
/// Returns how many seed rows were new.
pub async fn prepare_storage(repository: &dyn FilterRepository) -> Result<usize> {
    repository.ensure_schema().await?;
    repository.seed(&format_timestamp(Utc::now())).await
}

/// Runs [`prepare_storage`] and logs the outcome. Failures do not stop startup.
pub async fn seed_storage(repository: &dyn FilterRepository) {
    match prepare_storage(repository).await {
        Ok(inserted) => {
            tracing::info!(inserted, "Filters data has been successfully inserted");
        }
        Err(err) => {
            tracing::error!(error = %err, "There was an error seeding the filters table");
        }
    }
}

/// Closes the storage connection, logging any failure.
pub async fn release_storage(repository: &dyn FilterRepository) {
    match repository.close().await {
        Ok(()) => tracing::info!("Database connection closed"),
        Err(err) => tracing::error!(error = %err, "Failed to close database connection"),
    }
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("SIGINT signal received: closing SQLite database connection...");
        }
        _ = terminate => {
            tracing::info!("SIGTERM signal received: closing SQLite database connection...");
        }
    }
}
