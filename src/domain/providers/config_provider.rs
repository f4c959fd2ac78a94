//! Read-only configuration lookup consumed by the link builder.

use crate::domain::entities::PresetRegistry;
use std::fmt;

/// Names of the settings the builder consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    BaseUrl,
    ClientUrl,
    RefPrefix,
    Lowercase,
    ReplaceSpaces,
    SpaceReplacement,
    Presets,
}

impl SettingKey {
    pub const ALL: [SettingKey; 7] = [
        SettingKey::BaseUrl,
        SettingKey::ClientUrl,
        SettingKey::RefPrefix,
        SettingKey::Lowercase,
        SettingKey::ReplaceSpaces,
        SettingKey::SpaceReplacement,
        SettingKey::Presets,
    ];

    /// Configuration key name (e.g. `base_url`).
    pub const fn as_str(self) -> &'static str {
        match self {
            SettingKey::BaseUrl => "base_url",
            SettingKey::ClientUrl => "client_url",
            SettingKey::RefPrefix => "ref_prefix",
            SettingKey::Lowercase => "lowercase",
            SettingKey::ReplaceSpaces => "replace_spaces",
            SettingKey::SpaceReplacement => "space_replacement",
            SettingKey::Presets => "presets",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A configuration value as returned by a provider.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Text(String),
    Flag(bool),
    Presets(PresetRegistry),
}

impl SettingValue {
    pub fn kind(&self) -> &'static str {
        match self {
            SettingValue::Text(_) => "text",
            SettingValue::Flag(_) => "flag",
            SettingValue::Presets(_) => "presets",
        }
    }
}

/// Source of configuration values.
///
/// A provider answers `None` for keys it does not know; callers then fall
/// through to the next layer. Providers never fail.
///
/// # Implementations
///
/// - [`crate::config::Config`] - Values loaded from environment variables
/// - [`crate::infrastructure::StaticConfig`] - In-memory fallback table
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ConfigProvider: Send + Sync {
    /// Looks up a single setting.
    fn lookup(&self, key: SettingKey) -> Option<SettingValue>;
}
