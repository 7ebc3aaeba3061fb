//! Core types and traits for install-it storage
//!
//! This crate defines the foundational types used throughout the system:
//! - Identified: the get/set-ID contract every stored record implements
//! - RecordKind: explicit type names used as delete-bus keys
//! - Domain records: DriverGroup, Driver, RuleSet, AppSetting
//! - Error: Error type hierarchy
//! - Limits: ID token length and retry cap

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod record;
pub mod types;

pub use error::{Error, Result};
pub use limits::{ID_BYTES, ID_LEN, MAX_ID_ATTEMPTS};
pub use record::{Identified, RecordKind};
pub use types::{
    AppSetting, Driver, DriverGroup, DriverType, Rule, RuleSet, RuleSource, RuleType,
    SuccessAction,
};
