//! Best-effort persistence over a synchronous string key/value store.
//!
//! `Store::try_*` return explicit results. `load`, `save` and `clear` are the
//! forgiving variants the rest of the app uses: failures are logged and
//! degrade to "absent" or "not saved", never past this boundary.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage quota exceeded for key \"{key}\"")]
    QuotaExceeded { key: String },
    #[error("storage error: {0}")]
    Backend(String),
    #[error("serialization error: {0}")]
    Serialize(String),
    #[error("corrupted data under key \"{key}\": {reason}")]
    Corrupt { key: String, reason: String },
}

/// Raw string key/value storage, e.g. the browser's `localStorage`.
///
/// Implementations are cheap handles: clones share the same underlying data.
pub trait KvBackend: Clone {
    /// Get the raw value for a key. Returns None if the key does not exist.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process backend. Optionally enforces a byte quota across all keys.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    items: Rc<RefCell<BTreeMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that refuses writes pushing total key+value bytes past `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            items: Rc::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.items
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KvBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota_bytes {
            if self.used_bytes_excluding(key) + key.len() + value.len() > quota {
                return Err(StoreError::QuotaExceeded { key: key.into() });
            }
        }
        self.items.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Native backend keeping each key in `<dir>/<key>.json`.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: std::path::PathBuf,
}

#[cfg(feature = "std")]
impl FileBackend {
    /// Open (and create if needed) a data directory.
    pub fn open(dir: impl Into<std::path::PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(feature = "std")]
impl KvBackend for FileBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        // Write-then-rename so a crash mid-write leaves the previous value intact.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| match e.kind() {
            std::io::ErrorKind::StorageFull => StoreError::QuotaExceeded { key: key.into() },
            _ => StoreError::Backend(e.to_string()),
        })?;
        std::fs::rename(&tmp, &path).map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Backend(e.to_string())),
        }
    }
}

/// JSON persistence on top of a [`KvBackend`].
#[derive(Debug, Clone)]
pub struct Store<B> {
    backend: B,
}

impl<B: KvBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Read and parse `key`. `Ok(None)` means the key is absent.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get_item(key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: key.into(),
                reason: e.to_string(),
            })
    }

    /// Like [`Store::try_load`], but the stored JSON must be an array.
    pub fn try_load_list<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<Vec<T>>, StoreError> {
        let Some(value) = self.try_load::<serde_json::Value>(key)? else {
            return Ok(None);
        };
        if !value.is_array() {
            return Err(StoreError::Corrupt {
                key: key.into(),
                reason: "not an array".into(),
            });
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: key.into(),
                reason: e.to_string(),
            })
    }

    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.backend.set_item(key, &raw)
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.try_load(key).unwrap_or_else(|e| {
            tracing::error!(key, error = %e, "failed to load stored value");
            None
        })
    }

    pub fn load_list<T: DeserializeOwned>(&self, key: &str) -> Option<Vec<T>> {
        self.try_load_list(key).unwrap_or_else(|e| {
            tracing::error!(key, error = %e, "failed to load stored list");
            None
        })
    }

    /// Serialize and write `value`. Returns false (after logging) on failure.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match self.try_save(key, value) {
            Ok(()) => {
                tracing::debug!(key, "saved");
                true
            }
            Err(e @ StoreError::QuotaExceeded { .. }) => {
                tracing::error!(key, error = %e, "storage quota exceeded");
                false
            }
            Err(e) => {
                tracing::error!(key, error = %e, "failed to save value");
                false
            }
        }
    }

    pub fn clear(&self, key: &str) {
        if let Err(e) = self.backend.remove_item(key) {
            tracing::error!(key, error = %e, "failed to clear stored value");
        }
    }
}
