//! File-based settings store (YAML)
//!
//! Persists values to a YAML document, by default at
//! ~/.config/forumconf/settings.yaml.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::traits::{SettingsStore, StoreError, StoreResult};
use crate::types::SettingValue;

/// On-disk document structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsFile {
    /// Stored values, keyed by setting key
    #[serde(default)]
    pub values: HashMap<String, SettingValue>,
}

/// File-based settings store
///
/// Reads and writes values from a YAML file. A missing file reads as empty, so
/// a fresh installation resolves every setting to its declared default.
///
/// # Example
///
/// ```no_run
/// use forumconf_core::store::FileSettingsStore;
///
/// // User-level store (~/.config/forumconf/settings.yaml)
/// let store = FileSettingsStore::user();
/// ```
pub struct FileSettingsStore {
    path: PathBuf,
    cache: RwLock<Option<SettingsFile>>,
}

impl FileSettingsStore {
    /// Create a file store for a specific path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Create a user-level store (~/.config/forumconf/settings.yaml)
    pub fn user() -> Self {
        // XDG config directory (~/.config on Linux, ~/Library/Application Support on macOS)
        let config_dir = dirs::config_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
        });
        let path = config_dir.join("forumconf").join("settings.yaml");
        Self::new(path)
    }

    /// Get the settings file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the settings file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the document from disk
    fn load_file(&self) -> StoreResult<SettingsFile> {
        if !self.path.exists() {
            return Ok(SettingsFile::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let file: SettingsFile = serde_yaml::from_str(&content)
            .map_err(|e| StoreError::Serialization(format!("Failed to parse YAML: {}", e)))?;

        Ok(file)
    }

    /// Save the document to disk
    fn save_file(&self, file: &SettingsFile) -> StoreResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(file)
            .map_err(|e| StoreError::Serialization(format!("Failed to serialize YAML: {}", e)))?;

        fs::write(&self.path, content)?;

        // Update cache
        let mut cache = self.cache.write().unwrap();
        *cache = Some(file.clone());

        Ok(())
    }

    /// Get cached or load the document
    fn get_file(&self) -> StoreResult<SettingsFile> {
        let cache = self.cache.read().unwrap();
        if let Some(file) = cache.as_ref() {
            return Ok(file.clone());
        }
        drop(cache);

        let file = self.load_file()?;
        let mut cache = self.cache.write().unwrap();
        *cache = Some(file.clone());
        Ok(file)
    }

    /// Reload from disk (invalidate cache)
    pub fn reload(&self) -> StoreResult<SettingsFile> {
        let file = self.load_file()?;
        let mut cache = self.cache.write().unwrap();
        *cache = Some(file.clone());
        Ok(file)
    }

    /// Create a backup of the current settings file
    pub fn backup(&self) -> StoreResult<Option<PathBuf>> {
        if !self.exists() {
            return Ok(None);
        }

        let backup_path = self.path.with_extension("yaml.backup");
        fs::copy(&self.path, &backup_path)?;
        Ok(Some(backup_path))
    }

    /// Export the stored values to JSON (for migration)
    pub fn export_json(&self) -> StoreResult<String> {
        let file = self.get_file()?;
        serde_json::to_string_pretty(&file)
            .map_err(|e| StoreError::Serialization(format!("Failed to serialize JSON: {}", e)))
    }
}

impl std::fmt::Debug for FileSettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSettingsStore")
            .field("path", &self.path)
            .field("exists", &self.exists())
            .finish()
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self, key: &str) -> StoreResult<Option<SettingValue>> {
        let file = self.get_file()?;
        Ok(file.values.get(key).cloned())
    }

    async fn save(&self, key: &str, value: SettingValue) -> StoreResult<()> {
        let mut file = self.get_file()?;
        file.values.insert(key.to_string(), value);
        self.save_file(&file)
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let mut file = self.get_file()?;
        if file.values.remove(key).is_none() {
            return Ok(());
        }
        self.save_file(&file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        let store = FileSettingsStore::new(&path);

        // Missing file reads as empty
        assert!(!store.exists());
        assert_eq!(store.load("SITE_TITLE").await.unwrap(), None);

        // Save creates the file
        store
            .save("SITE_TITLE", SettingValue::from("My Forum"))
            .await
            .unwrap();
        assert!(store.exists());
        assert_eq!(
            store.load("SITE_TITLE").await.unwrap(),
            Some(SettingValue::from("My Forum"))
        );

        // Reload and verify persistence
        store.reload().unwrap();
        assert_eq!(
            store.load("SITE_TITLE").await.unwrap(),
            Some(SettingValue::from("My Forum"))
        );

        // Remove persists
        store.remove("SITE_TITLE").await.unwrap();
        store.reload().unwrap();
        assert_eq!(store.load("SITE_TITLE").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_yaml_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        let store = FileSettingsStore::new(&path);

        store
            .save("SITE_TITLE", SettingValue::from("My Forum"))
            .await
            .unwrap();
        store
            .save("MAX_TAG_LENGTH", SettingValue::Int(20))
            .await
            .unwrap();

        // Check YAML content is readable
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("SITE_TITLE"));
        assert!(content.contains("My Forum"));
        assert!(content.contains("MAX_TAG_LENGTH"));
        assert!(content.contains("20"));
    }

    #[test]
    fn test_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        let store = FileSettingsStore::new(&path);

        // No backup if file doesn't exist
        assert!(store.backup().unwrap().is_none());

        // Create file
        fs::write(&path, "values: {}").unwrap();

        // Backup should work
        let backup_path = store.backup().unwrap().unwrap();
        assert!(backup_path.exists());
        assert!(backup_path.to_string_lossy().contains("backup"));
    }

    #[tokio::test]
    async fn test_export_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        let store = FileSettingsStore::new(&path);

        store
            .save("EMAIL_VALIDATION", SettingValue::Bool(true))
            .await
            .unwrap();

        let json = store.export_json().unwrap();
        assert!(json.contains("EMAIL_VALIDATION"));
        assert!(json.contains("true"));
    }
}
