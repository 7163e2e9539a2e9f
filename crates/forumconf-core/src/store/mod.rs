//! Settings store abstractions and implementations
//!
//! This module provides a pluggable value-storage system with:
//! - `SettingsStore` trait for implementing custom stores
//! - Built-in implementations: `MemorySettingsStore`, `FileSettingsStore`
//! - A registry for discovering and creating stores by name

mod file;
mod memory;
mod registry;
mod traits;

pub use file::{FileSettingsStore, SettingsFile};
pub use memory::MemorySettingsStore;
pub use registry::{
    create_settings_store, has_settings_store, list_settings_stores, register_settings_store,
    unregister_settings_store, StoreDefinition, StoreFactory,
};
pub use traits::{SettingsStore, StoreError, StoreResult};
