//! Store registry for discovering and creating settings stores by name

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::file::FileSettingsStore;
use super::memory::MemorySettingsStore;
use super::traits::SettingsStore;

/// Factory function type for creating settings stores
pub type StoreFactory = Box<dyn Fn() -> Arc<dyn SettingsStore> + Send + Sync>;

/// Definition of a registered settings store
pub struct StoreDefinition {
    /// Unique name for this store
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: StoreFactory,
}

impl std::fmt::Debug for StoreDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Global registry of settings stores
static REGISTRY: Lazy<RwLock<HashMap<String, StoreDefinition>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Register built-in stores
    map.insert(
        "memory".to_string(),
        StoreDefinition {
            name: "memory".to_string(),
            description: "In-memory storage for testing".to_string(),
            factory: Box::new(|| Arc::new(MemorySettingsStore::new())),
        },
    );

    map.insert(
        "file".to_string(),
        StoreDefinition {
            name: "file".to_string(),
            description: "YAML file in the user config directory".to_string(),
            factory: Box::new(|| Arc::new(FileSettingsStore::user())),
        },
    );

    RwLock::new(map)
});

/// Register a new settings store type
///
/// # Arguments
/// * `name` - Unique name for the store
/// * `description` - Human-readable description
/// * `factory` - Factory function to create instances
///
/// # Example
///
/// ```
/// use forumconf_core::store::{register_settings_store, MemorySettingsStore};
/// use std::sync::Arc;
///
/// register_settings_store(
///     "custom",
///     "My custom store",
///     Box::new(|| Arc::new(MemorySettingsStore::new())),
/// );
/// ```
pub fn register_settings_store(name: &str, description: &str, factory: StoreFactory) {
    let mut registry = REGISTRY.write().unwrap();
    registry.insert(
        name.to_string(),
        StoreDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a settings store by name
///
/// # Returns
/// The created store, or None if the name is not registered
///
/// # Example
///
/// ```
/// use forumconf_core::store::create_settings_store;
///
/// let store = create_settings_store("memory").expect("memory store should exist");
/// ```
pub fn create_settings_store(name: &str) -> Option<Arc<dyn SettingsStore>> {
    let registry = REGISTRY.read().unwrap();
    registry.get(name).map(|def| (def.factory)())
}

/// List all registered settings stores
///
/// # Returns
/// A vector of (name, description) tuples
pub fn list_settings_stores() -> Vec<(String, String)> {
    let registry = REGISTRY.read().unwrap();
    registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect()
}

/// Check if a store is registered
pub fn has_settings_store(name: &str) -> bool {
    let registry = REGISTRY.read().unwrap();
    registry.contains_key(name)
}

/// Unregister a settings store (mainly for testing)
pub fn unregister_settings_store(name: &str) -> bool {
    let mut registry = REGISTRY.write().unwrap();
    registry.remove(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_stores_registered() {
        assert!(has_settings_store("memory"));
        assert!(has_settings_store("file"));
    }

    #[test]
    fn test_create_memory_store() {
        let store = create_settings_store("memory").unwrap();
        assert_eq!(store.name(), "memory");
    }

    #[test]
    fn test_create_unknown_store() {
        assert!(create_settings_store("nonexistent_xyz").is_none());
    }

    #[test]
    fn test_list_stores() {
        let stores = list_settings_stores();

        // Should have at least the built-in stores
        let names: Vec<_> = stores.iter().map(|(n, _)| n.as_str()).collect();
        assert!(names.contains(&"memory"));
        assert!(names.contains(&"file"));
    }

    #[test]
    fn test_register_custom_store() {
        register_settings_store(
            "test_custom_store",
            "A test store",
            Box::new(|| Arc::new(MemorySettingsStore::new())),
        );

        assert!(has_settings_store("test_custom_store"));

        let store = create_settings_store("test_custom_store").unwrap();
        assert_eq!(store.name(), "memory"); // It's a MemorySettingsStore

        // Clean up
        unregister_settings_store("test_custom_store");
    }
}
