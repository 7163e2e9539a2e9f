//! Setting group type

use serde::{Deserialize, Serialize};

/// A named collection of related settings
///
/// Groups drive presentation: settings are displayed group by group, and each
/// setting gets a 1-based ordering position inside its group at registration
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingGroup {
    /// Unique group identifier (e.g. "general")
    pub key: String,
    /// Human-readable label (e.g. "General settings")
    pub name: String,
}

impl SettingGroup {
    /// Create a group whose display name defaults to the key
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            name: key.clone(),
            key,
        }
    }

    /// Set the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_builder() {
        let group = SettingGroup::new("general");
        assert_eq!(group.key, "general");
        assert_eq!(group.name, "general");

        let group = SettingGroup::new("email").with_name("Email settings");
        assert_eq!(group.key, "email");
        assert_eq!(group.name, "Email settings");
    }
}
