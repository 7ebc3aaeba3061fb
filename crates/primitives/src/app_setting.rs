//! AppSettingStore: the single application setting value

use installit_core::{AppSetting, Result};
use installit_storage::Store;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

/// Store for the one [`AppSetting`] value.
///
/// An absent backend is initialised with [`AppSetting::default`] on first
/// read.
pub struct AppSettingStore {
    store: Arc<dyn Store<AppSetting>>,
    cache: Mutex<Option<AppSetting>>,
}

impl AppSettingStore {
    /// Create a store over `store`. Nothing is read until the first call.
    pub fn new(store: Arc<dyn Store<AppSetting>>) -> Self {
        Self {
            store,
            cache: Mutex::new(None),
        }
    }

    /// The current setting
    pub fn all(&self) -> Result<AppSetting> {
        let mut cache = self.cache.lock();
        let exists = self.store.exists();

        if let Some(setting) = cache.as_ref() {
            if exists && !self.store.modified() {
                return Ok(setting.clone());
            }
        }

        let setting = if exists {
            self.store.read()?.unwrap_or_default()
        } else {
            info!("No app setting found, writing defaults");
            let setting = AppSetting::default();
            self.store.write(&setting)?;
            setting
        };
        debug!(language = %setting.language, "Loaded app setting");

        *cache = Some(setting.clone());
        Ok(setting)
    }

    /// Persist `setting` and return it
    pub fn update(&self, setting: AppSetting) -> Result<AppSetting> {
        let mut cache = self.cache.lock();
        self.store.write(&setting)?;
        *cache = Some(setting.clone());
        Ok(setting)
    }
}
