//! In-memory settings store

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::traits::{SettingsStore, StoreResult};
use crate::types::SettingValue;

/// In-memory settings store for testing and ephemeral use
///
/// Values are lost when the store is dropped.
///
/// # Thread Safety
///
/// The store uses `RwLock` internally and is safe to use from multiple threads.
///
/// # Example
///
/// ```
/// use forumconf_core::store::MemorySettingsStore;
/// use forumconf_core::types::SettingValue;
///
/// let store = MemorySettingsStore::new();
/// store.set_sync("SITE_TITLE", SettingValue::from("My Forum"));
/// assert_eq!(store.get_sync("SITE_TITLE"), Some(SettingValue::from("My Forum")));
/// ```
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RwLock<HashMap<String, SettingValue>>,
}

impl MemorySettingsStore {
    /// Create a new empty memory store
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Create a memory store with initial values
    pub fn with_values(initial: HashMap<String, SettingValue>) -> Self {
        Self {
            values: RwLock::new(initial),
        }
    }

    /// Clear all values from the store
    pub fn clear(&self) {
        let mut values = self.values.write().unwrap();
        values.clear();
    }

    /// Get the number of values in the store
    pub fn len(&self) -> usize {
        let values = self.values.read().unwrap();
        values.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store a value synchronously (useful for test setup)
    pub fn set_sync(&self, key: &str, value: SettingValue) {
        let mut values = self.values.write().unwrap();
        values.insert(key.to_string(), value);
    }

    /// Get a value synchronously
    pub fn get_sync(&self, key: &str) -> Option<SettingValue> {
        let values = self.values.read().unwrap();
        values.get(key).cloned()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn load(&self, key: &str) -> StoreResult<Option<SettingValue>> {
        let values = self.values.read().unwrap();
        Ok(values.get(key).cloned())
    }

    async fn save(&self, key: &str, value: SettingValue) -> StoreResult<()> {
        let mut values = self.values.write().unwrap();
        values.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StoreResult<()> {
        let mut values = self.values.write().unwrap();
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemorySettingsStore::new();

        // Initially empty
        assert!(store.is_empty());
        assert_eq!(store.load("SITE_TITLE").await.unwrap(), None);

        // Save and load
        store
            .save("SITE_TITLE", SettingValue::from("My Forum"))
            .await
            .unwrap();
        assert_eq!(
            store.load("SITE_TITLE").await.unwrap(),
            Some(SettingValue::from("My Forum"))
        );
        assert_eq!(store.len(), 1);

        // Overwrite
        store
            .save("SITE_TITLE", SettingValue::from("Other Forum"))
            .await
            .unwrap();
        assert_eq!(
            store.load("SITE_TITLE").await.unwrap(),
            Some(SettingValue::from("Other Forum"))
        );
        assert_eq!(store.len(), 1);

        // Remove falls back to absent
        store.remove("SITE_TITLE").await.unwrap();
        assert_eq!(store.load("SITE_TITLE").await.unwrap(), None);

        // Removing an absent key is fine
        store.remove("SITE_TITLE").await.unwrap();
    }

    #[test]
    fn test_with_values() {
        let mut initial = HashMap::new();
        initial.insert("MAX_TAG_LENGTH".to_string(), SettingValue::Int(20));

        let store = MemorySettingsStore::with_values(initial);
        assert_eq!(store.get_sync("MAX_TAG_LENGTH"), Some(SettingValue::Int(20)));

        store.clear();
        assert!(store.is_empty());
    }
}
