//! Identifier limits
//!
//! IDs are hex-encoded random byte strings. With [`ID_BYTES`] = 4 the token
//! space is 2^32, so the birthday bound sits around 65k records per
//! collection before a single retry becomes likely. Collections here hold
//! tens of records.

/// Number of random bytes drawn per generated identifier.
pub const ID_BYTES: usize = 4;

/// Length of a generated identifier in characters (two hex digits per byte).
pub const ID_LEN: usize = ID_BYTES * 2;

/// Maximum number of draws before ID generation gives up.
///
/// Only reachable when the collection is close to saturating the token
/// space or the system RNG keeps failing.
pub const MAX_ID_ATTEMPTS: usize = 64;
