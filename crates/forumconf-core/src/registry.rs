//! Settings registry
//!
//! The registry is built in two phases. Phase one, during process
//! initialization: `register` every setting the application declares. Phase
//! two: `bind` a [`SettingsStore`] exactly once, before the first read. After
//! `bind` the declaration table is frozen; reads resolve against the store
//! with the declared default as fallback.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use forumconf_core::{SettingsRegistry, SettingDef, SettingGroup, MemorySettingsStore};
//!
//! let mut settings = SettingsRegistry::new();
//! let general = SettingGroup::new("general").with_name("General settings");
//! settings.register(SettingDef::new("SITE_TITLE", general.clone(), "My Forum"))?;
//! settings.register(SettingDef::new("SITE_TAGLINE", general, "ask and answer"))?;
//!
//! settings.bind(Arc::new(MemorySettingsStore::new()))?;
//! let title = settings.get("SITE_TITLE").await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::logging::{Logger, NoOpLogger};
use crate::store::{SettingsStore, StoreError};
use crate::types::{RegisteredSetting, SettingDef, SettingValue};

/// Errors that can occur during registry operations
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Setting {0} is already registered")]
    DuplicateKey(String),

    #[error("No such setting: {0}")]
    UnknownKey(String),

    #[error("No settings store bound yet")]
    NotBound,

    #[error("A settings store is already bound")]
    AlreadyBound,

    #[error("Type mismatch for setting {key}: expected {expected}, got {got}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        got: &'static str,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Registry of declared settings with read-time value resolution
///
/// Owns declarations, key uniqueness across all groups, and per-group 1-based
/// ordering. Construct one explicitly and pass it by reference; there is no
/// hidden global instance.
pub struct SettingsRegistry {
    /// Registered settings in registration order
    settings: Vec<RegisteredSetting>,
    /// Key -> position in `settings`
    index: HashMap<String, usize>,
    /// Group key -> last assigned ordering
    ordering_index: HashMap<String, u32>,
    /// Bound value store, set exactly once by `bind`
    store: Option<Arc<dyn SettingsStore>>,
    logger: Arc<dyn Logger>,
}

impl Default for SettingsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsRegistry {
    /// Create an empty registry with a silent logger
    pub fn new() -> Self {
        Self::with_logger(Arc::new(NoOpLogger::new()))
    }

    /// Create an empty registry with the given logger
    pub fn with_logger(logger: Arc<dyn Logger>) -> Self {
        Self {
            settings: Vec::new(),
            index: HashMap::new(),
            ordering_index: HashMap::new(),
            store: None,
            logger,
        }
    }

    /// Register a setting declaration
    ///
    /// Assigns the next ordering within the declaration's group (1-based,
    /// sequential in registration order, independent per group) and returns
    /// it. The input is consumed; nothing the caller still holds is mutated.
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` if the key is already registered, in any group. The
    ///   registry, including the group counters, is left untouched.
    /// - `AlreadyBound` if a store has been bound; registration is an
    ///   initialization-time operation.
    pub fn register(&mut self, def: SettingDef) -> SettingsResult<u32> {
        if self.store.is_some() {
            return Err(SettingsError::AlreadyBound);
        }
        if self.index.contains_key(&def.key) {
            return Err(SettingsError::DuplicateKey(def.key));
        }

        let ordering = self
            .ordering_index
            .get(&def.group.key)
            .copied()
            .unwrap_or(0)
            + 1;
        self.ordering_index.insert(def.group.key.clone(), ordering);

        self.logger.debug(&format!(
            "[SettingsRegistry] Registered {} in group {} at position {}",
            def.key, def.group.key, ordering
        ));

        self.index.insert(def.key.clone(), self.settings.len());
        self.settings.push(RegisteredSetting { def, ordering });

        Ok(ordering)
    }

    /// Bind the backing store, completing initialization
    ///
    /// Must be called exactly once, after all registrations and before the
    /// first read.
    pub fn bind(&mut self, store: Arc<dyn SettingsStore>) -> SettingsResult<()> {
        if self.store.is_some() {
            return Err(SettingsError::AlreadyBound);
        }

        self.logger.info(&format!(
            "[SettingsRegistry] Bound store '{}' with {} settings declared",
            store.name(),
            self.settings.len()
        ));
        if !store.is_ready() {
            self.logger.warn(&format!(
                "[SettingsRegistry] Store '{}' is not ready yet, reads will resolve later",
                store.name()
            ));
        }

        self.store = Some(store);
        Ok(())
    }

    /// Whether a store has been bound
    pub fn is_bound(&self) -> bool {
        self.store.is_some()
    }

    fn bound_store(&self) -> SettingsResult<&Arc<dyn SettingsStore>> {
        self.store.as_ref().ok_or(SettingsError::NotBound)
    }

    fn registered(&self, key: &str) -> SettingsResult<&RegisteredSetting> {
        self.index
            .get(key)
            .map(|&pos| &self.settings[pos])
            .ok_or_else(|| SettingsError::UnknownKey(key.to_string()))
    }

    /// Resolve the current value of a setting
    ///
    /// Reads the bound store; if the store holds nothing for the key, the
    /// declared default is returned. An unregistered key is an error, never a
    /// silent default.
    pub async fn get(&self, key: &str) -> SettingsResult<SettingValue> {
        let registered = self.registered(key)?;
        let store = self.bound_store()?;

        match store.load(key).await? {
            Some(value) => Ok(value),
            None => Ok(registered.def.default.clone()),
        }
    }

    /// Persist a new value for a setting
    ///
    /// The value must match the declared default's type.
    pub async fn set(&self, key: &str, value: impl Into<SettingValue>) -> SettingsResult<()> {
        let value = value.into();
        let registered = self.registered(key)?;
        if !registered.def.default.same_type(&value) {
            return Err(SettingsError::TypeMismatch {
                key: key.to_string(),
                expected: registered.def.default.type_name(),
                got: value.type_name(),
            });
        }

        let store = self.bound_store()?;
        store.save(key, value).await?;
        Ok(())
    }

    /// Drop the stored value so the setting resolves to its default again
    pub async fn reset(&self, key: &str) -> SettingsResult<()> {
        self.registered(key)?;
        let store = self.bound_store()?;
        store.remove(key).await?;
        Ok(())
    }

    /// Snapshot every registered key mapped to its current resolved value
    ///
    /// Values are read fresh at call time; nothing is cached across calls.
    pub async fn as_map(&self) -> SettingsResult<HashMap<String, SettingValue>> {
        let mut out = HashMap::with_capacity(self.settings.len());
        for registered in &self.settings {
            let value = self.get(registered.key()).await?;
            out.insert(registered.key().to_string(), value);
        }
        Ok(out)
    }

    /// Whether a key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Registered keys in registration order
    pub fn keys(&self) -> Vec<&str> {
        self.settings.iter().map(|s| s.key()).collect()
    }

    /// Number of registered settings
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    /// Whether no settings are registered
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// The registered declaration for a key, if any
    pub fn definition(&self, key: &str) -> Option<&RegisteredSetting> {
        self.index.get(key).map(|&pos| &self.settings[pos])
    }

    /// Keys of all groups with at least one setting, in first-seen order
    pub fn group_keys(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for registered in &self.settings {
            let group = registered.group_key();
            if !seen.contains(&group) {
                seen.push(group);
            }
        }
        seen
    }

    /// Settings of one group in presentation order
    pub fn settings_in_group(&self, group_key: &str) -> Vec<&RegisteredSetting> {
        // Registration order within a group is ordering order already
        self.settings
            .iter()
            .filter(|s| s.group_key() == group_key)
            .collect()
    }
}

impl std::fmt::Debug for SettingsRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsRegistry")
            .field("settings", &self.settings.len())
            .field("groups", &self.ordering_index.len())
            .field("bound", &self.is_bound())
            .finish()
    }
}
