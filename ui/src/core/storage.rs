//! Local persistence for user preferences.
//!
//! The portal persists exactly one value (the language code), but the store
//! is a plain string key-value seam so the browser and native backends share
//! one contract:
//!
//! - Web: `window.localStorage`.
//! - Desktop / mobile: a small JSON object under the platform data dir.
//! - Anywhere else: [`UnavailableStore`], which fails every call so callers
//!   fall back to session-only behaviour.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no persistent storage is available on this platform")]
    Unavailable,

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored preferences are not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("browser storage rejected the request: {0}")]
    Browser(String),
}

/// Durable string key-value storage.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Best store for the current platform.
pub fn default_store() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(browser::BrowserStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match native::FileStore::in_data_dir() {
            Some(store) => {
                tracing::debug!(path = %store.path().display(), "using file preference store");
                Rc::new(store)
            }
            None => {
                tracing::warn!("no platform data directory; preferences will not persist");
                Rc::new(UnavailableStore)
            }
        }
    }
}

/// In-memory store. Used in tests and as a scratch store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that is never available.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
pub mod browser {
    use super::{KeyValueStore, StorageError};

    /// `window.localStorage`, looked up on every call so a storage that
    /// becomes unavailable mid-session degrades instead of panicking.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserStore;

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window
            .local_storage()
            .map_err(|err| StorageError::Browser(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)
    }

    impl KeyValueStore for BrowserStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            local_storage()?
                .get_item(key)
                .map_err(|err| StorageError::Browser(format!("{err:?}")))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            local_storage()?
                .set_item(key, value)
                .map_err(|err| StorageError::Browser(format!("{err:?}")))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod native {
    use std::collections::BTreeMap;
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use directories::ProjectDirs;

    use super::{KeyValueStore, StorageError};

    const QUALIFIER: &str = "in";
    const ORGANIZATION: &str = "AgriPortal";
    const APPLICATION: &str = "agri-portal";
    const FILE_NAME: &str = "preferences.json";

    /// JSON object of string entries stored in a single file.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `preferences.json` under the platform data directory, if the
        /// platform reports one.
        pub fn in_data_dir() -> Option<Self> {
            let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)?;
            Some(Self::new(dirs.data_dir().join(FILE_NAME)))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
            match fs::read_to_string(&self.path) {
                Ok(raw) => Ok(serde_json::from_str(&raw)?),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
                Err(err) => Err(err.into()),
            }
        }
    }

    impl KeyValueStore for FileStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.load()?.remove(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            let mut entries = match self.load() {
                Ok(entries) => entries,
                Err(StorageError::Malformed(err)) => {
                    tracing::warn!(path = %self.path.display(), %err, "replacing malformed preferences file");
                    BTreeMap::new()
                }
                Err(err) => return Err(err),
            };
            entries.insert(key.to_string(), value.to_string());

            if let Some(dir) = self.path.parent() {
                fs::create_dir_all(dir)?;
            }
            // Rename over the old file so readers never observe a partial write.
            let tmp = self.path.with_extension("json.tmp");
            fs::write(&tmp, serde_json::to_vec_pretty(&entries)?)?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert_eq!(store.read("k").unwrap(), None);
        store.write("k", "hi").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("hi"));
        store.write("k", "en").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn unavailable_store_always_fails() {
        assert!(matches!(
            UnavailableStore.read("k"),
            Err(StorageError::Unavailable)
        ));
        assert!(UnavailableStore.write("k", "v").is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod file_store {
        use super::super::native::FileStore;
        use super::super::*;
        use std::path::PathBuf;

        fn scratch_path() -> PathBuf {
            std::env::temp_dir()
                .join(format!("agri-portal-test-{}", uuid::Uuid::new_v4()))
                .join("preferences.json")
        }

        #[test]
        fn reports_the_backing_path() {
            let path = scratch_path();
            assert_eq!(FileStore::new(&path).path(), path.as_path());
        }

        #[test]
        fn missing_file_reads_as_empty() {
            let store = FileStore::new(scratch_path());
            assert_eq!(store.read("agricultural-portal-language").unwrap(), None);
        }

        #[test]
        fn values_survive_a_new_handle() {
            let path = scratch_path();
            FileStore::new(&path)
                .write("agricultural-portal-language", "hi")
                .unwrap();

            let reopened = FileStore::new(&path);
            assert_eq!(
                reopened.read("agricultural-portal-language").unwrap().as_deref(),
                Some("hi")
            );

            let raw = std::fs::read_to_string(&path).unwrap();
            assert!(raw.contains("\"agricultural-portal-language\": \"hi\""));
            let _ = std::fs::remove_dir_all(path.parent().unwrap());
        }

        #[test]
        fn malformed_file_is_an_error_on_read_and_replaced_on_write() {
            let path = scratch_path();
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "{not json").unwrap();

            let store = FileStore::new(&path);
            assert!(matches!(store.read("k"), Err(StorageError::Malformed(_))));

            store.write("k", "en").unwrap();
            assert_eq!(store.read("k").unwrap().as_deref(), Some("en"));
            let _ = std::fs::remove_dir_all(path.parent().unwrap());
        }
    }
}
