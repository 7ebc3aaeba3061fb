//! In-memory store with no persistence
//!
//! Values are kept JSON-encoded so reads behave like file reads: the caller
//! always receives a fresh decoded copy, and encode/decode failures surface
//! the same way they would against a file.

use crate::traits::Store;
use installit_core::{Error, Result};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// Thread-safe in-memory backend holding one value of type `T`
#[derive(Debug)]
pub struct MemoryStore<T> {
    data: RwLock<Option<Vec<u8>>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> MemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(None),
            _marker: PhantomData,
        }
    }

    /// Drop the held value, returning the store to its empty state
    pub fn clear(&self) {
        *self.data.write() = None;
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> for MemoryStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn read(&self) -> Result<Option<T>> {
        let data = self.data.read();
        match data.as_deref() {
            Some(bytes) => serde_json::from_slice(bytes).map(Some).map_err(Error::Decode),
            None => Ok(None),
        }
    }

    fn write(&self, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value).map_err(Error::Encode)?;
        *self.data.write() = Some(bytes);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.data.read().is_some()
    }
}
