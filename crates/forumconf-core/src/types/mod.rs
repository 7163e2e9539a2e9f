//! Core types for the settings registry
//!
//! This module contains the shared types used across stores and the registry.

mod group;
mod setting;
mod value;

pub use group::SettingGroup;
pub use setting::{RegisteredSetting, SettingDef};
pub use value::SettingValue;
