//! Setting declaration types

use serde::{Deserialize, Serialize};

use super::group::SettingGroup;
use super::value::SettingValue;

/// A setting as declared by the caller
///
/// Declarations carry no ordering; the registry assigns that at registration
/// time and hands back a [`RegisteredSetting`]. The declared default is what
/// reads resolve to until the backing store holds an explicit value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDef {
    /// Setting key, unique across the whole registry regardless of group
    pub key: String,
    /// The group this setting belongs to
    pub group: SettingGroup,
    /// Value used when the store holds nothing for this key
    pub default: SettingValue,
    /// Human-readable description (shown in admin screens)
    #[serde(default)]
    pub description: String,
}

impl SettingDef {
    /// Create a new setting declaration
    pub fn new(
        key: impl Into<String>,
        group: SettingGroup,
        default: impl Into<SettingValue>,
    ) -> Self {
        Self {
            key: key.into(),
            group,
            default: default.into(),
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A setting as held by the registry: the declaration plus its assigned place
///
/// `ordering` is 1-based and sequential within the setting's group, in
/// registration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredSetting {
    /// The declaration as registered
    pub def: SettingDef,
    /// Position within the group, assigned by the registry
    pub ordering: u32,
}

impl RegisteredSetting {
    /// The setting's key
    pub fn key(&self) -> &str {
        &self.def.key
    }

    /// The key of the setting's group
    pub fn group_key(&self) -> &str {
        &self.def.group.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_def_builder() {
        let def = SettingDef::new("SITE_TITLE", SettingGroup::new("general"), "My Forum")
            .with_description("Title shown in the page header");

        assert_eq!(def.key, "SITE_TITLE");
        assert_eq!(def.group.key, "general");
        assert_eq!(def.default, SettingValue::String("My Forum".into()));
        assert_eq!(def.description, "Title shown in the page header");
    }

    #[test]
    fn test_registered_setting_accessors() {
        let registered = RegisteredSetting {
            def: SettingDef::new("MAX_TAG_LENGTH", SettingGroup::new("tags"), 20),
            ordering: 1,
        };

        assert_eq!(registered.key(), "MAX_TAG_LENGTH");
        assert_eq!(registered.group_key(), "tags");
        assert_eq!(registered.ordering, 1);
    }
}
