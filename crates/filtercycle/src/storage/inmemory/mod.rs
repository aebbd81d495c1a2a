//! In-memory storage backend.
//!
//! Keeps filters in a `BTreeMap` behind an async `RwLock`. Nothing survives a
//! restart, which makes it the substitute of choice for handler tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use filtercycle::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! repo.seed("2024-01-01T00:00:00.000Z").await?;
//! ```

mod repository;

pub use repository::InMemoryRepository;
