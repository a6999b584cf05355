//! # JSON File Store
//!
//! One `<key>.json` file per key inside a data directory.
//!
//! Writes go to a uniquely named temporary sibling and are renamed into
//! place, so a reader never observes a half-written value. With the
//! `locking` feature, `locked` holds an exclusive `fs2` lock on
//! `<dir>/.lock` for a whole read-modify-write cycle, so processes sharing
//! the directory never lose each other's appends. Without it, only one
//! process may append to a directory at a time.

use crate::domain::errors::StorageError;
use crate::ports::outbound::Persistence;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

#[cfg(feature = "locking")]
use fs2::FileExt;
#[cfg(feature = "locking")]
use std::fs::OpenOptions;

/// Distinguishes temporary files of concurrent writers in one process.
static NEXT_TMP: AtomicU64 = AtomicU64::new(0);

/// File-backed key-value store.
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    dir: PathBuf,
}

impl JsonFilePersistence {
    /// Lock file name
    #[cfg(feature = "locking")]
    const LOCK_FILE: &'static str = ".lock";

    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    #[cfg(feature = "locking")]
    fn lock(&self) -> Result<File, StorageError> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.dir.join(Self::LOCK_FILE))?;
        file.lock_exclusive()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(file)
    }

    #[cfg(not(feature = "locking"))]
    fn lock(&self) -> Result<(), StorageError> {
        Ok(())
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        let n = NEXT_TMP.fetch_add(1, Ordering::Relaxed);
        self.dir
            .join(format!("{key}.json.{}-{n}.tmp", std::process::id()))
    }
}

impl Persistence for JsonFilePersistence {
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let path = self.path_for(key)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let value = serde_json::from_slice(&bytes).map_err(|e| StorageError::Corrupted {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let bytes = serde_json::to_vec_pretty(&value)?;

        let tmp = self.tmp_path(key);
        {
            let mut file = File::create(&tmp)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)?;

        debug!(key, bytes = bytes.len(), "Wrote store value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn locked(
        &self,
        update: &mut dyn FnMut() -> Result<(), StorageError>,
    ) -> Result<(), StorageError> {
        let _guard = self.lock()?;
        update()
    }
}
