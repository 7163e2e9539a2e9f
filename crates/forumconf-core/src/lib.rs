//! Forumconf Core
//!
//! Storage-agnostic settings registry for a web forum application.
//! Settings are declared once at startup with a key, a group and a typed
//! default, then resolved at read time against a pluggable backing store
//! (in-memory, YAML file, or a custom database/cache implementation).
//!
//! ## Two-phase initialization
//!
//! Registration happens before the backing store is available, so the
//! registry is built in two phases: declare everything, then bind a store.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use forumconf_core::{SettingsRegistry, SettingDef, SettingGroup, MemorySettingsStore};
//!
//! let mut settings = SettingsRegistry::new();
//! let general = SettingGroup::new("general").with_name("General settings");
//!
//! settings.register(SettingDef::new("SITE_TITLE", general.clone(), "My Forum"))?;
//! settings.register(SettingDef::new("SITE_TAGLINE", general, "ask and answer"))?;
//!
//! settings.bind(Arc::new(MemorySettingsStore::new()))?;
//!
//! let title = settings.get("SITE_TITLE").await?;
//! let all = settings.as_map().await?;
//! ```

pub mod logging;
pub mod registry;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use types::{RegisteredSetting, SettingDef, SettingGroup, SettingValue};

pub use logging::{ConsoleLogger, Logger, NoOpLogger};

pub use store::{
    create_settings_store, list_settings_stores, register_settings_store,
    FileSettingsStore, MemorySettingsStore, SettingsStore, StoreError, StoreResult,
};

pub use registry::{SettingsError, SettingsRegistry, SettingsResult};
