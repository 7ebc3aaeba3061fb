//! File-backed store
//!
//! One JSON document per file. Absence of the file is a valid "no data"
//! state, not an error.
//!
//! Writes go through a temp file in the same directory followed by a rename,
//! so a crash mid-write never leaves a truncated document behind.
//!
//! ## Staleness
//!
//! After every successful write or read the store captures a [`Fingerprint`]
//! (modification time and length) of the file. [`Store::modified`] compares
//! the current file against it:
//! - no fingerprint captured yet: modified
//! - file gone since capture: not modified
//! - otherwise: modified iff the fingerprint differs
//!
//! This only guards against other writers touching the file between calls;
//! there is no cross-process locking.

use crate::traits::Store;
use installit_core::{Error, Result};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, Metadata};
use std::io::{self, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

/// Snapshot of a file's identity used for staleness checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    /// Last modification time, if the platform reports one
    pub modified: Option<SystemTime>,
    /// File length in bytes
    pub len: u64,
}

impl Fingerprint {
    /// Fingerprint of the given metadata
    pub fn of(meta: &Metadata) -> Self {
        Self {
            modified: meta.modified().ok(),
            len: meta.len(),
        }
    }

    /// Fingerprint of the file at `path`, or `None` if it cannot be stat'ed
    pub fn capture(path: &Path) -> Option<Self> {
        fs::metadata(path).ok().map(|meta| Self::of(&meta))
    }
}

/// JSON file holding one value of type `T`
#[derive(Debug)]
pub struct FileStore<T> {
    path: PathBuf,
    fingerprint: Mutex<Option<Fingerprint>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> FileStore<T> {
    /// Create a store for `path`. The file is not touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fingerprint: Mutex::new(None),
            _marker: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fingerprint captured by the last successful write or read
    pub fn fingerprint(&self) -> Option<Fingerprint> {
        *self.fingerprint.lock()
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_bytes(&self, bytes: &[u8]) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let tmp_path = self.tmp_path();
        let result = Self::write_tmp(&tmp_path, bytes)
            .and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = &result {
            warn!(
                path = %self.path.display(),
                error = %e,
                "Write failed, cleaning up temp file"
            );
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn write_tmp(tmp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()
    }
}

impl<T> Store<T> for FileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn read(&self) -> Result<Option<T>> {
        let meta = match fs::metadata(&self.path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value = serde_json::from_slice(&bytes).map_err(Error::Decode)?;
        *self.fingerprint.lock() = Some(Fingerprint::of(&meta));
        debug!(path = %self.path.display(), bytes = bytes.len(), "Read store file");
        Ok(Some(value))
    }

    fn write(&self, value: &T) -> Result<()> {
        let bytes = serde_json::to_vec(value).map_err(Error::Encode)?;
        self.write_bytes(&bytes)?;

        *self.fingerprint.lock() = Fingerprint::capture(&self.path);
        debug!(path = %self.path.display(), bytes = bytes.len(), "Wrote store file");
        Ok(())
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn modified(&self) -> bool {
        let captured = match *self.fingerprint.lock() {
            Some(fp) => fp,
            None => return true,
        };

        match Fingerprint::capture(&self.path) {
            Some(current) => current != captured,
            None => false,
        }
    }
}
