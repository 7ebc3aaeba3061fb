//! Store Comprehensive Test Suite
//!
//! End-to-end behaviour of the catalog over real files.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Cascading cleanup across driver groups, drivers and rule sets
//! - **Tier 2**: Reordering through the collection stores
//! - **Tier 3**: Persistence, reload and external modification
//! - **Tier 4**: Concurrent access through a shared catalog
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test store_comprehensive
//! ```

mod test_utils;

mod tier2_reorder;
mod tier3_persistence;
mod tier4_concurrency;
