//! SQLite storage backend implementation.
//!
//! This module provides a SQLite-based implementation of [`FilterRepository`]
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` for async wrapping.
//!
//! [`FilterRepository`]: filtercycle_core::storage::FilterRepository

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
