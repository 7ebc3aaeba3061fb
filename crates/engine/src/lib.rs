//! Record engine for install-it
//!
//! Stateless algorithms and shared plumbing the collection stores are built on:
//! - records: generate-unique-id, index-of, get, create, update, delete, move-behind
//!   over an ordered `Vec` of identified records
//! - bus: the delete-notification bus driving cross-collection cleanup
//! - config: `installit.toml` naming the file behind each collection

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bus;
pub mod config;
pub mod records;

pub use bus::{DeleteEventBus, DeleteHandler};
pub use config::{ResolvedPaths, StoreConfig, CONFIG_FILE_NAME};
pub use records::{
    create, create_avoiding, delete, generate_id, generate_unique_id, get, index_of, move_behind,
    update,
};
