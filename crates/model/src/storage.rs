//! JSON persistence for preferences and inventory snapshots.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use thiserror::Error;

use larder_inventory::{Item, TransactionRecord};

use crate::prefs::UserPrefs;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything saved between sessions besides preferences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub items: Vec<Item>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

/// Storage abstraction for the session's persistent state.
pub trait Storage {
    /// Reads the preferences; `Ok(None)` if none were saved yet.
    fn read_prefs(&self) -> Result<Option<UserPrefs>, StorageError>;

    fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError>;

    /// Reads a snapshot from `path`; `Ok(None)` if the file does not exist.
    fn read_inventory(&self, path: &Path) -> Result<Option<InventorySnapshot>, StorageError>;

    fn save_inventory(&self, path: &Path, snapshot: &InventorySnapshot) -> Result<(), StorageError>;
}

/// Pretty-printed JSON files on the local filesystem.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    prefs_path: PathBuf,
}

impl JsonStorage {
    pub fn new(prefs_path: impl Into<PathBuf>) -> Self {
        Self {
            prefs_path: prefs_path.into(),
        }
    }

    pub fn prefs_path(&self) -> &Path {
        &self.prefs_path
    }

    fn read<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StorageError::Json {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
        let io_error = |source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let text = serde_json::to_string_pretty(value).map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, text).map_err(io_error)?;
        tracing::info!(path = %path.display(), "saved");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn read_prefs(&self) -> Result<Option<UserPrefs>, StorageError> {
        Self::read(&self.prefs_path)
    }

    fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), StorageError> {
        Self::write(&self.prefs_path, prefs)
    }

    fn read_inventory(&self, path: &Path) -> Result<Option<InventorySnapshot>, StorageError> {
        Self::read(path)
    }

    fn save_inventory(&self, path: &Path, snapshot: &InventorySnapshot) -> Result<(), StorageError> {
        Self::write(path, snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use larder_core::ValueObject;
    use larder_inventory::{ItemId, ItemKey, Name, OrderLine, Tag};

    fn scratch_dir(test: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("larder-{}-{test}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn bagel() -> Item {
        Item::new(
            Name::parse("Bagel").unwrap(),
            ItemId::new(100).unwrap(),
            5,
            [Tag::parse("baked").unwrap()],
        )
    }

    #[test]
    fn missing_files_read_as_none() {
        let dir = scratch_dir("missing");
        let storage = JsonStorage::new(dir.join("prefs.json"));
        assert!(storage.read_prefs().unwrap().is_none());
        assert!(storage.read_inventory(&dir.join("inventory.json")).unwrap().is_none());
    }

    #[test]
    fn snapshot_survives_save_and_load() {
        let dir = scratch_dir("snapshot");
        let storage = JsonStorage::new(dir.join("prefs.json"));
        let path = dir.join("data").join("inventory.json");
        let line = OrderLine {
            item: ItemKey::new(Name::parse("Bagel").unwrap(), ItemId::new(100).unwrap()),
            count: 2,
        };
        let snapshot = InventorySnapshot {
            items: vec![bagel()],
            transactions: vec![TransactionRecord::new(vec![line], Utc::now())],
        };

        storage.save_inventory(&path, &snapshot).unwrap();

        assert_eq!(storage.read_inventory(&path).unwrap(), Some(snapshot));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn prefs_survive_save_and_load() {
        let dir = scratch_dir("prefs");
        let storage = JsonStorage::new(dir.join("prefs.json"));
        let prefs = UserPrefs::new(Default::default(), "shop/stock.json");

        storage.save_prefs(&prefs).unwrap();

        assert_eq!(storage.read_prefs().unwrap(), Some(prefs));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn malformed_json_is_reported_with_path() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonStorage::new(dir.join("prefs.json")).read_inventory(&path).unwrap_err();

        assert!(matches!(err, StorageError::Json { .. }));
        assert!(err.to_string().contains("inventory.json"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn snapshot_without_transactions_loads() {
        let snapshot: InventorySnapshot = serde_json::from_str(r#"{ "items": [] }"#).unwrap();
        assert!(snapshot.transactions.is_empty());
    }
}
