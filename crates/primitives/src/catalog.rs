//! Catalog: all install-it collections over one delete bus

use crate::app_setting::AppSettingStore;
use crate::driver_group::DriverGroupStore;
use crate::match_rule::MatchRuleStore;
use installit_core::{AppSetting, DriverGroup, Result, RuleSet};
use installit_engine::{DeleteEventBus, StoreConfig, CONFIG_FILE_NAME};
use installit_storage::{FileStore, MemoryStore, Store};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// The three stores wired to a shared [`DeleteEventBus`].
///
/// Removing a driver group here prunes it from every rule set and strips
/// its drivers from other drivers' incompatibles.
pub struct Catalog {
    bus: Arc<DeleteEventBus>,
    driver_groups: DriverGroupStore,
    match_rules: MatchRuleStore,
    app_setting: AppSettingStore,
}

impl Catalog {
    /// Open the catalog stored in `dir`.
    ///
    /// Creates the directory and a default `installit.toml` if missing, then
    /// places each collection at the file the config names.
    ///
    /// ```text
    /// let catalog = Catalog::open("/var/lib/installit")?;
    /// let groups = catalog.driver_groups().all()?;
    /// ```
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let config_path = dir.join(CONFIG_FILE_NAME);
        StoreConfig::write_default_if_missing(&config_path)?;
        let config = StoreConfig::from_file(&config_path)?;

        Self::open_with_config(dir, config)
    }

    /// Open the catalog in `dir` with an explicit configuration.
    ///
    /// The config is written to `installit.toml` so later [`Catalog::open`]
    /// calls use the same file names.
    pub fn open_with_config<P: AsRef<Path>>(dir: P, config: StoreConfig) -> Result<Self> {
        let dir = dir.as_ref();
        config.validate()?;
        std::fs::create_dir_all(dir)?;
        config.write_to_file(&dir.join(CONFIG_FILE_NAME))?;

        let paths = config.resolve(dir);
        info!(
            dir = %dir.display(),
            driver_groups = %paths.driver_groups.display(),
            match_rules = %paths.match_rules.display(),
            app_setting = %paths.app_setting.display(),
            "Opened catalog"
        );

        Ok(Self::with_stores(
            Arc::new(FileStore::<Vec<DriverGroup>>::new(paths.driver_groups)),
            Arc::new(FileStore::<Vec<RuleSet>>::new(paths.match_rules)),
            Arc::new(FileStore::<AppSetting>::new(paths.app_setting)),
        ))
    }

    /// A catalog that keeps everything in memory
    pub fn in_memory() -> Self {
        Self::with_stores(
            Arc::new(MemoryStore::<Vec<DriverGroup>>::new()),
            Arc::new(MemoryStore::<Vec<RuleSet>>::new()),
            Arc::new(MemoryStore::<AppSetting>::new()),
        )
    }

    /// A catalog over caller-supplied backends
    pub fn with_stores(
        driver_groups: Arc<dyn Store<Vec<DriverGroup>>>,
        match_rules: Arc<dyn Store<Vec<RuleSet>>>,
        app_setting: Arc<dyn Store<AppSetting>>,
    ) -> Self {
        let bus = Arc::new(DeleteEventBus::new());
        // Driver groups subscribe first so incompatibles are pruned before rule sets.
        let driver_groups = DriverGroupStore::new(driver_groups, Arc::clone(&bus));
        let match_rules = MatchRuleStore::new(match_rules, Arc::clone(&bus));
        let app_setting = AppSettingStore::new(app_setting);

        Self {
            bus,
            driver_groups,
            match_rules,
            app_setting,
        }
    }

    /// Driver groups
    pub fn driver_groups(&self) -> &DriverGroupStore {
        &self.driver_groups
    }

    /// Match rule sets
    pub fn match_rules(&self) -> &MatchRuleStore {
        &self.match_rules
    }

    /// Application setting
    pub fn app_setting(&self) -> &AppSettingStore {
        &self.app_setting
    }

    /// The bus the stores publish deletions on
    pub fn bus(&self) -> &Arc<DeleteEventBus> {
        &self.bus
    }
}
