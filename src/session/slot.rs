//! Key-value slots the session is persisted into.
//!
//! A slot is the raw mechanism: string keys, string values, fallible.
//! `SessionStore` layers the record format and the recover-and-log
//! policy on top.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::core::StoreError;

/// A persistent key-value mechanism.
pub trait SessionSlot {
    /// Read the value stored under `key`. `Ok(None)` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: SessionSlot + ?Sized> SessionSlot for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

// =============================================================================
// Memory
// =============================================================================

/// In-process slot.
///
/// Optionally enforces a byte quota per value, or refuses every call,
/// to mirror browser storage that is full or disabled.
#[derive(Clone, Debug)]
pub struct MemorySlot {
    entries: FxHashMap<String, String>,
    quota: Option<usize>,
    available: bool,
}

impl MemorySlot {
    /// An empty, unlimited slot.
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            quota: None,
            available: true,
        }
    }

    /// A slot whose writes fail once a value exceeds `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::new()
        }
    }

    /// A slot where every read and write fails.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Put a raw value in place, bypassing quota and availability.
    ///
    /// Used to seed corrupt or legacy records.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Get the raw value under a key.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.available {
            Ok(())
        } else {
            Err(StoreError::Unavailable("memory slot disabled".to_string()))
        }
    }
}

impl Default for MemorySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.check_available()?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_available()?;
        if let Some(limit) = self.quota {
            if value.len() > limit {
                return Err(StoreError::QuotaExceeded {
                    needed: value.len(),
                    limit: Some(limit),
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// File
// =============================================================================

/// One JSON file per key under a directory.
///
/// Writes land in a temporary sibling first and are renamed into place,
/// so readers see either the old record or the new one.
#[derive(Clone, Debug)]
pub struct FileSlot {
    dir: PathBuf,
}

impl FileSlot {
    /// Slot rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`.
    ///
    /// `[A-Za-z0-9-]` pass through; every other byte, `_` included, is
    /// written as `_XX` in hex. Distinct keys get distinct files and no
    /// key can leave the directory.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len());
        for byte in key.bytes() {
            match byte {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' => name.push(char::from(byte)),
                _ => name.push_str(&format!("_{byte:02X}")),
            }
        }
        self.dir.join(format!("{name}.json"))
    }
}

impl SessionSlot for FileSlot {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        let result = write_file(&tmp, value).and_then(|()| fs::rename(&tmp, &path));
        if let Err(err) = result {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                if cleanup.kind() != ErrorKind::NotFound {
                    log::debug!("could not remove {}: {cleanup}", tmp.display());
                }
            }
            return Err(err.into());
        }
        Ok(())
    }
}

fn write_file(path: &Path, value: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(value.as_bytes())?;
    file.sync_all()
}
