//! install-it store - persistence and referential integrity for install-it
//!
//! Keeps three collections as JSON on disk: driver groups (with their
//! nested drivers), match rule sets, and the single application setting.
//! Each collection is cached in memory, reloaded when the file changes
//! underneath it, and fully rewritten on every mutation.
//!
//! # Quick Start
//!
//! ```ignore
//! use installit_store::{Catalog, DriverGroup};
//!
//! let catalog = Catalog::open("/var/lib/installit")?;
//!
//! let id = catalog.driver_groups().add(DriverGroup {
//!     name: "Network".into(),
//!     ..Default::default()
//! })?;
//!
//! // Removing a group also removes it from every rule set.
//! catalog.driver_groups().remove(&id)?;
//! ```
//!
//! # Architecture
//!
//! - `installit-core`: domain types, errors, ID limits
//! - `installit-storage`: the `Store` backend trait with file and memory backends
//! - `installit-engine`: record algorithms, the delete bus, `installit.toml` config
//! - `installit-primitives`: the collection stores and [`Catalog`]

pub use installit_core::*;
pub use installit_engine::{DeleteEventBus, DeleteHandler, StoreConfig, CONFIG_FILE_NAME};
pub use installit_primitives::{
    AppSettingStore, Catalog, DriverGroupStore, MatchRuleStore, Record, SharedStore,
};
pub use installit_storage::{FileStore, Fingerprint, MemoryStore, Store};
