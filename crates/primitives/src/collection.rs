//! Cached collection shared by the record stores
//!
//! Wraps a backend and the authoritative in-memory copy of one collection.
//! Not synchronised itself; stores keep it behind a mutex.

use installit_core::{Identified, Result};
use installit_engine::records;
use installit_storage::Store;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Everything a type needs to live in a collection store
pub trait Record: Identified + Clone + Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> Record for T where T: Identified + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{}

/// Backend handle for a collection of `T`
pub type SharedStore<T> = Arc<dyn Store<Vec<T>>>;

pub(crate) struct Collection<T> {
    store: SharedStore<T>,
    cache: Vec<T>,
    loaded: bool,
}

impl<T: Record> Collection<T> {
    pub(crate) fn new(store: SharedStore<T>) -> Self {
        Self {
            store,
            cache: Vec::new(),
            loaded: false,
        }
    }

    /// Bring the cache in line with the backend.
    ///
    /// Reloads when the cache was never loaded or the backend is stale.
    /// When the backend holds no data, the cache is reset to empty and
    /// written out.
    pub(crate) fn sync(&mut self) -> Result<()> {
        let exists = self.store.exists();
        if self.loaded && exists && !self.store.modified() {
            return Ok(());
        }

        if !exists {
            debug!(kind = %T::KIND, "Initialising empty collection");
            self.cache = Vec::new();
            self.loaded = true;
            return self.persist();
        }

        self.cache = self.store.read()?.unwrap_or_default();
        self.loaded = true;
        debug!(kind = %T::KIND, records = self.cache.len(), "Loaded collection");
        Ok(())
    }

    /// Write the cache out. On failure the cache is dropped so the next
    /// access reloads what the backend actually holds.
    pub(crate) fn persist(&mut self) -> Result<()> {
        let result = self.store.write(&self.cache);
        if result.is_err() {
            self.loaded = false;
        }
        result
    }

    /// Synced mutable access for callers that persist themselves
    pub(crate) fn records(&mut self) -> Result<&mut Vec<T>> {
        self.sync()?;
        Ok(&mut self.cache)
    }

    pub(crate) fn all(&mut self) -> Result<Vec<T>> {
        self.sync()?;
        Ok(self.cache.clone())
    }

    pub(crate) fn get(&mut self, id: &str) -> Result<T> {
        self.sync()?;
        records::get(id, &self.cache).cloned()
    }

    pub(crate) fn index_of(&mut self, id: &str) -> Result<usize> {
        self.sync()?;
        records::index_of(id, &self.cache)
    }

    pub(crate) fn add(&mut self, record: T) -> Result<String> {
        let id = records::create(record, self.records()?)?;
        self.persist()?;
        Ok(id)
    }

    pub(crate) fn update(&mut self, record: T) -> Result<T> {
        records::update(record.clone(), self.records()?)?;
        self.persist()?;
        Ok(record)
    }

    pub(crate) fn remove(&mut self, id: &str) -> Result<T> {
        let removed = records::delete(id, self.records()?)?;
        self.persist()?;
        Ok(removed)
    }

    pub(crate) fn move_behind(&mut self, id: &str, target: isize) -> Result<Vec<T>> {
        if records::move_behind(id, target, self.records()?)? {
            self.persist()?;
        }
        Ok(self.cache.clone())
    }
}
