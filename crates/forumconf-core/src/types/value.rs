//! Typed setting values

use serde::{Deserialize, Serialize};

/// The value of a setting
///
/// Settings are typed: a setting declared with a boolean default keeps holding
/// booleans for its whole life. The untagged representation keeps stored files
/// readable (`true`, `42`, `"My Forum"`) instead of wrapping every value in an
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean flag (e.g. EMAIL_VALIDATION)
    Bool(bool),
    /// Integer quantity (e.g. MAX_TAG_LENGTH)
    Int(i64),
    /// Floating point quantity (e.g. reputation multipliers)
    Float(f64),
    /// Free-form text (e.g. SITE_TITLE)
    String(String),
}

impl SettingValue {
    /// Name of the value's type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Int(_) => "int",
            SettingValue::Float(_) => "float",
            SettingValue::String(_) => "string",
        }
    }

    /// Whether two values carry the same type
    pub fn same_type(&self, other: &SettingValue) -> bool {
        self.type_name() == other.type_name()
    }

    /// Get the boolean value, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer value, if this is an `Int`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the float value, if this is a `Float` (or an `Int`, widened)
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SettingValue::Float(f) => Some(*f),
            SettingValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get the string value, if this is a `String`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Int(i) => write!(f, "{}", i),
            SettingValue::Float(x) => write!(f, "{}", x),
            SettingValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

impl From<i64> for SettingValue {
    fn from(i: i64) -> Self {
        SettingValue::Int(i)
    }
}

impl From<i32> for SettingValue {
    fn from(i: i32) -> Self {
        SettingValue::Int(i as i64)
    }
}

impl From<f64> for SettingValue {
    fn from(f: f64) -> Self {
        SettingValue::Float(f)
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::String(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::String(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(SettingValue::Bool(true).as_bool(), Some(true));
        assert_eq!(SettingValue::Int(7).as_i64(), Some(7));
        assert_eq!(SettingValue::Int(7).as_f64(), Some(7.0));
        assert_eq!(SettingValue::String("x".into()).as_str(), Some("x"));
        assert_eq!(SettingValue::Bool(true).as_i64(), None);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(SettingValue::from("hi").type_name(), "string");
        assert_eq!(SettingValue::from(3).type_name(), "int");
        assert!(SettingValue::from(1).same_type(&SettingValue::from(2)));
        assert!(!SettingValue::from(1).same_type(&SettingValue::from(true)));
    }

    #[test]
    fn test_untagged_serialization() {
        let json = serde_json::to_string(&SettingValue::from("My Forum")).unwrap();
        assert_eq!(json, "\"My Forum\"");

        let value: SettingValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, SettingValue::Int(42));

        let value: SettingValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, SettingValue::Bool(true));
    }
}
