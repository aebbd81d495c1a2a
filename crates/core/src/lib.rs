//! Functional core for filtercycle.
//!
//! Pure types, validation and storage contracts. Nothing in this crate
//! performs I/O; the server crate supplies the storage backends and HTTP shell.

pub mod filter;
pub mod storage;
