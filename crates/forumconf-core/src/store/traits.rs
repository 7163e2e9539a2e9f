//! Settings store trait

use async_trait::async_trait;
use thiserror::Error;

use crate::types::SettingValue;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store not ready: {0}")]
    NotReady(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store error: {0}")]
    Other(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Backing store abstraction for setting values
///
/// The store owns persistence; the registry owns declarations, key uniqueness
/// and group ordering. A key with no stored value is not an error here — the
/// registry falls back to the declared default.
///
/// Implementations:
/// - `MemorySettingsStore`: In-memory for testing
/// - `FileSettingsStore`: YAML file (~/.config/forumconf/settings.yaml)
/// - Custom implementations (database, cache, remote config service)
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Whether the store can serve reads yet
    ///
    /// During early process initialization a database-backed store may not be
    /// connected; values only become resolvable once this returns true.
    fn is_ready(&self) -> bool {
        true
    }

    /// Load the stored value for a key, `None` if the store holds nothing
    async fn load(&self, key: &str) -> StoreResult<Option<SettingValue>>;

    /// Persist a value for a key, overwriting any previous one
    async fn save(&self, key: &str, value: SettingValue) -> StoreResult<()>;

    /// Remove the stored value for a key, so reads fall back to the default
    ///
    /// Removing a key the store does not hold is not an error.
    async fn remove(&self, key: &str) -> StoreResult<()>;
}
