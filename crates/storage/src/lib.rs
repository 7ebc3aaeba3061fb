//! Storage layer for install-it
//!
//! This crate implements the persistence backends a collection is mirrored to:
//! - Store: the read/write/exists/modified contract, generic over the value type
//! - FileStore: one JSON document per file, with staleness detection
//! - MemoryStore: mutex-guarded in-memory backend for tests and ephemeral use
//!
//! Backends treat the whole collection as one opaque serialisable value and
//! know nothing about record semantics.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod memory;
pub mod traits;

pub use file::{FileStore, Fingerprint};
pub use memory::MemoryStore;
pub use traits::Store;
