//! In-memory configuration table used as the last provider layer.

use crate::domain::entities::PresetRegistry;
use crate::domain::link_settings::DEFAULT_REF_PREFIX;
use crate::domain::providers::{ConfigProvider, SettingKey, SettingValue};

/// Static fallback table answering every [`SettingKey`].
///
/// Replaces a process-wide mutable defaults table: callers (and tests) build
/// their own value and pass it to [`crate::application::services::LinkFactory`].
///
/// # Defaults
///
/// | Key | Value |
/// |---|---|
/// | `base_url` | `""` |
/// | `client_url` | `""` |
/// | `ref_prefix` | `ref_` |
/// | `lowercase` | `true` |
/// | `replace_spaces` | `true` |
/// | `space_replacement` | `_` |
/// | `presets` | empty |
#[derive(Debug, Clone, PartialEq)]
pub struct StaticConfig {
    pub base_url: String,
    pub client_url: String,
    pub ref_prefix: String,
    pub lowercase: bool,
    pub replace_spaces: bool,
    pub space_replacement: String,
    pub presets: PresetRegistry,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            client_url: String::new(),
            ref_prefix: DEFAULT_REF_PREFIX.to_string(),
            lowercase: true,
            replace_spaces: true,
            space_replacement: "_".to_string(),
            presets: PresetRegistry::new(),
        }
    }
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_client_url(mut self, url: impl Into<String>) -> Self {
        self.client_url = url.into();
        self
    }

    #[must_use]
    pub fn with_ref_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ref_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    #[must_use]
    pub fn with_replace_spaces(mut self, enabled: bool) -> Self {
        self.replace_spaces = enabled;
        self
    }

    #[must_use]
    pub fn with_space_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.space_replacement = replacement.into();
        self
    }

    #[must_use]
    pub fn with_presets(mut self, presets: PresetRegistry) -> Self {
        self.presets = presets;
        self
    }
}

impl ConfigProvider for StaticConfig {
    fn lookup(&self, key: SettingKey) -> Option<SettingValue> {
        let value = match key {
            SettingKey::BaseUrl => SettingValue::Text(self.base_url.clone()),
            SettingKey::ClientUrl => SettingValue::Text(self.client_url.clone()),
            SettingKey::RefPrefix => SettingValue::Text(self.ref_prefix.clone()),
            SettingKey::Lowercase => SettingValue::Flag(self.lowercase),
            SettingKey::ReplaceSpaces => SettingValue::Flag(self.replace_spaces),
            SettingKey::SpaceReplacement => SettingValue::Text(self.space_replacement.clone()),
            SettingKey::Presets => SettingValue::Presets(self.presets.clone()),
        };
        Some(value)
    }
}
