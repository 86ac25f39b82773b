//! JSON file-based storage backend.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads entire file into memory once
//! - **Write**: O(n) - serializes and writes entire dataset
//! - **Best for**: a single user's liked list, infrequent writes

use crate::domain::error::{MealdeckError, Result};
use crate::storage::backend::Storage;
use crate::storage::models::{LikedRecord, SettingsRecord, StoredState};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk. Wraps settings and the
/// liked list in a single object for better JSON structure and future
/// extensibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// User settings (theme preference).
    #[serde(default)]
    settings: SettingsRecord,

    /// Liked meals in like order.
    #[serde(default)]
    liked: Vec<LikedRecord>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            settings: SettingsRecord::default(),
            liked: Vec::new(),
        }
    }
}

/// JSON file storage backend.
///
/// Stores settings and liked meals in a human-readable JSON file with atomic
/// writes. The entire dataset is kept in memory and persisted on modifications.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It's designed to be used from a single
/// worker thread, matching the Zellij plugin architecture.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "settings": {
///     "dark_mode": false
///   },
///   "liked": [
///     {
///       "meal_id": "52940",
///       "name": "Brown Stew Chicken",
///       "thumb": "https://www.themealdb.com/images/media/meals/sypxpx1515365095.jpg",
///       "liked_at": 1234567890
///     }
///   ]
/// }
/// ```
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StorageData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonStorage {
    /// Creates or opens a JSON storage backend.
    ///
    /// If the file exists, loads existing data. Otherwise creates a new empty
    /// storage. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mealdeck::storage::JsonStorage;
    /// use std::path::PathBuf;
    ///
    /// let storage = JsonStorage::new(PathBuf::from("/tmp/mealdeck.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON storage");

        if let Some(parent) = file_path.parent() {
            tracing::debug!(parent = ?parent, "creating parent directory");
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            tracing::debug!("loading existing data");
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty storage");
            StorageData::default()
        };

        tracing::debug!(
            dark_mode = data.settings.dark_mode,
            liked_count = data.liked.len(),
            "storage initialized"
        );

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads storage data from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    fn load_from_file(path: &PathBuf) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| MealdeckError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            liked = data.liked.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Saves storage data to disk using atomic write.
    ///
    /// Writes to a temporary file first, then atomically renames it to the
    /// target path. This ensures the file is never left in a corrupt state,
    /// even if the process crashes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - JSON serialization fails (should never happen with valid data)
    /// - Temporary file cannot be written
    /// - Rename operation fails (rare on POSIX systems)
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        tracing::debug!(path = ?self.file_path, "saving storage data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| MealdeckError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;

        tracing::trace!("renaming temporary file to final location");
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!("storage saved successfully");
        Ok(())
    }
}

impl Storage for JsonStorage {
    fn load(&mut self) -> Result<StoredState> {
        let _span = tracing::debug_span!("json_load").entered();

        let state = StoredState {
            dark_mode: self.data.settings.dark_mode,
            liked: self.data.liked.clone(),
        };

        tracing::debug!(
            dark_mode = state.dark_mode,
            liked_count = state.liked.len(),
            "state loaded"
        );
        Ok(state)
    }

    fn set_dark_mode(&mut self, dark: bool) -> Result<()> {
        let _span = tracing::debug_span!("json_set_dark_mode", dark = dark).entered();

        self.data.settings.dark_mode = dark;
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!("dark mode persisted");
        Ok(())
    }

    fn append_liked(&mut self, record: &LikedRecord) -> Result<()> {
        let _span = tracing::debug_span!("json_append_liked",
            meal_id = %record.meal_id,
            meal_name = %record.name
        )
        .entered();

        self.data.liked.push(record.clone());
        self.dirty = true;
        self.save_to_file()?;

        tracing::debug!(liked_count = self.data.liked.len(), "liked meal appended");
        Ok(())
    }
}

impl Drop for JsonStorage {
    /// Ensures data is saved on drop, even if a write was deferred.
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(id: &str) -> LikedRecord {
        LikedRecord {
            meal_id: id.to_string(),
            name: format!("Meal {id}"),
            thumb: format!("https://example.com/{id}.jpg"),
            liked_at: 1_700_000_000,
        }
    }

    fn storage_path(dir: &TempDir) -> PathBuf {
        dir.path().join("mealdeck.json")
    }

    #[test]
    fn fresh_storage_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let mut storage = JsonStorage::new(storage_path(&dir)).unwrap();

        let state = storage.load().unwrap();
        assert!(!state.dark_mode);
        assert!(state.liked.is_empty());
    }

    #[test]
    fn dark_mode_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);

        {
            let mut storage = JsonStorage::new(path.clone()).unwrap();
            storage.set_dark_mode(true).unwrap();
        }

        let mut storage = JsonStorage::new(path).unwrap();
        assert!(storage.load().unwrap().dark_mode);
    }

    #[test]
    fn unset_dark_mode_reads_back_false() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);

        {
            // Touch storage without writing any setting.
            let _storage = JsonStorage::new(path.clone()).unwrap();
        }

        let mut storage = JsonStorage::new(path).unwrap();
        assert!(!storage.load().unwrap().dark_mode);
    }

    #[test]
    fn liked_appends_preserve_order_and_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);

        {
            let mut storage = JsonStorage::new(path.clone()).unwrap();
            storage.append_liked(&record("2")).unwrap();
            storage.append_liked(&record("1")).unwrap();
            storage.append_liked(&record("2")).unwrap();
        }

        let mut storage = JsonStorage::new(path).unwrap();
        let state = storage.load().unwrap();
        let ids: Vec<&str> = state.liked.iter().map(|r| r.meal_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "2"]);
    }

    #[test]
    fn settings_and_likes_coexist_in_one_file() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);

        {
            let mut storage = JsonStorage::new(path.clone()).unwrap();
            storage.append_liked(&record("7")).unwrap();
            storage.set_dark_mode(true).unwrap();
        }

        let mut storage = JsonStorage::new(path).unwrap();
        let state = storage.load().unwrap();
        assert!(state.dark_mode);
        assert_eq!(state.liked.len(), 1);
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_panic() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);
        std::fs::write(&path, "not json at all").unwrap();

        assert!(JsonStorage::new(path).is_err());
    }
}
