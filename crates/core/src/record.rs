//! Identified-record contract
//!
//! Every record held in a collection exposes an opaque string ID and a
//! [`RecordKind`]. The kind is an explicit constant rather than a type name
//! obtained by introspection; the delete bus is keyed on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Explicit type name for each record type that can be stored or referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordKind {
    /// [`crate::DriverGroup`]
    DriverGroup,
    /// [`crate::Driver`], nested inside driver groups
    Driver,
    /// [`crate::RuleSet`]
    RuleSet,
}

impl RecordKind {
    /// Stable name used in logs and error messages
    pub const fn as_str(&self) -> &'static str {
        match self {
            RecordKind::DriverGroup => "DriverGroup",
            RecordKind::Driver => "Driver",
            RecordKind::RuleSet => "RuleSet",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can report and accept a string identifier.
///
/// A record is created with an empty ID; the engine fills it in.
pub trait Identified {
    /// Type name of this record, used as the delete-bus key
    const KIND: RecordKind;

    /// Current ID (empty when not yet assigned)
    fn id(&self) -> &str;

    /// Replace the ID
    fn set_id(&mut self, id: String);

    /// True once an ID has been assigned
    fn has_id(&self) -> bool {
        !self.id().is_empty()
    }
}
