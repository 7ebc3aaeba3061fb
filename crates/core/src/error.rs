//! Error types for install-it storage
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::record::RecordKind;
use std::io;
use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the record stores
#[derive(Debug, Error)]
pub enum Error {
    /// No record with the given ID exists in the collection
    #[error("store: no {kind} with ID {id:?} was found")]
    NotFound {
        /// Kind of record that was looked up
        kind: RecordKind,
        /// The missing ID
        id: String,
    },

    /// Reorder target outside `[-1, len - 2]`
    #[error("store: target index {index} out of bound for {len} records")]
    OutOfBounds {
        /// Requested target index
        index: isize,
        /// Collection length at the time of the call
        len: usize,
    },

    /// Durable bytes are not valid JSON for the expected type
    #[error("Decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// In-memory value could not be serialised
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// I/O failure reading or writing the backing file
    #[error("Persistence error: {0}")]
    Persistence(#[from] io::Error),

    /// A delete-bus subscriber failed while cleaning up references
    #[error("Cleanup handler for {kind} failed: {source}")]
    CleanupHandler {
        /// Kind the failing subscriber was registered for
        kind: RecordKind,
        /// The subscriber's error
        #[source]
        source: Box<Error>,
    },

    /// Every generated ID collided with an existing one
    #[error("store: no free ID found after {attempts} attempts")]
    IdSpaceExhausted {
        /// Number of draws made
        attempts: usize,
    },

    /// Configuration file could not be read or is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Shorthand for [`Error::NotFound`]
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        Error::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Returns true for [`Error::NotFound`]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
