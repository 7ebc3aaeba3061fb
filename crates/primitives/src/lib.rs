//! Primitives layer for install-it
//!
//! Collection stores, one per record type, each combining a persistence
//! backend, an in-memory cache and the generic record engine:
//! - **DriverGroupStore**: driver groups with nested drivers, reorderable
//! - **MatchRuleStore**: hardware-matching rule sets, reorderable
//! - **AppSettingStore**: the single application setting value
//! - **Catalog**: opens all three over one data directory and one delete bus
//!
//! ## Cache discipline
//!
//! Each store exclusively owns its cache. Every call first checks the
//! backend for staleness and reloads if needed; every mutation persists the
//! whole collection. Values handed to callers are clones, so mutating them
//! never touches the cache.
//!
//! ## Cascading cleanup
//!
//! Cross-collection references (rule set -> driver group, driver -> driver)
//! are kept consistent through the delete bus. Cleanup runs synchronously
//! inside the publisher's `remove`/`update` call.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app_setting;
pub mod catalog;
pub mod collection;
pub mod driver_group;
pub mod match_rule;

pub use app_setting::AppSettingStore;
pub use catalog::Catalog;
pub use collection::{Record, SharedStore};
pub use driver_group::DriverGroupStore;
pub use match_rule::MatchRuleStore;
