//! Helpers shared by the store comprehensive tiers

#![allow(dead_code)]

use installit_store::{Catalog, Driver, DriverGroup, DriverType, Rule, RuleSet, RuleSource, RuleType};
use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;

static INIT_TRACING: Once = Once::new();

/// Route store logs through the test harness. `RUST_LOG` selects the level.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// A catalog opened in a temporary directory
pub struct TestCatalog {
    pub catalog: Catalog,
    pub dir: TempDir,
}

impl TestCatalog {
    pub fn new() -> Self {
        init_tracing();
        let dir = TempDir::new().expect("create temp dir");
        let catalog = Catalog::open(dir.path()).expect("open catalog");
        Self { catalog, dir }
    }

    /// Open a second catalog over the same directory
    pub fn reopen(&self) -> Catalog {
        Catalog::open(self.dir.path()).expect("reopen catalog")
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

pub fn driver(id: &str, name: &str) -> Driver {
    Driver {
        id: id.to_string(),
        name: name.to_string(),
        driver_type: DriverType::Network,
        path: format!("C:\\drivers\\{}.inf", name),
        ..Default::default()
    }
}

pub fn group(name: &str, drivers: Vec<Driver>) -> DriverGroup {
    DriverGroup {
        name: name.to_string(),
        driver_type: DriverType::Network,
        drivers,
        ..Default::default()
    }
}

pub fn rule_set(name: &str, driver_group_ids: &[&str]) -> RuleSet {
    RuleSet {
        name: name.to_string(),
        rules: vec![Rule {
            source: RuleSource::Nic,
            rule_type: RuleType::Contain,
            is_case_sensitive: false,
            values: vec!["Intel".to_string()],
        }],
        driver_group_ids: driver_group_ids.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

pub fn ids<T: installit_store::Identified>(records: &[T]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}
