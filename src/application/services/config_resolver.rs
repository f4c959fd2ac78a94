//! Layered configuration resolution.

use std::sync::Arc;

use crate::domain::entities::PresetRegistry;
use crate::domain::link_settings::{DEFAULT_REF_PREFIX, LinkSettings};
use crate::domain::providers::{ConfigProvider, SettingKey, SettingValue};
use crate::error::ConfigValueError;
use crate::infrastructure::StaticConfig;
use crate::utils::sanitizer::SanitizeOptions;
use tracing::{debug, warn};

/// Resolves settings through an ordered list of providers.
///
/// # Resolution Order
///
/// 1. Each provider layer in order (typically live config, then [`StaticConfig`])
/// 2. The caller-supplied default
///
/// A layer that has no value, or a value of the wrong type, is skipped.
/// Resolution never fails.
pub struct ConfigResolver {
    layers: Vec<Arc<dyn ConfigProvider>>,
}

impl ConfigResolver {
    /// Creates a resolver over explicit layers, highest priority first.
    pub fn new(layers: Vec<Arc<dyn ConfigProvider>>) -> Self {
        Self { layers }
    }

    /// Live provider first, static table second.
    pub fn layered(live: Arc<dyn ConfigProvider>, fallback: StaticConfig) -> Self {
        let fallback: Arc<dyn ConfigProvider> = Arc::new(fallback);
        Self::new(vec![live, fallback])
    }

    /// Resolves a text setting.
    pub fn text(&self, key: SettingKey, default: &str) -> String {
        self.resolve(key, "text", |value| match value {
            SettingValue::Text(text) => Some(text),
            _ => None,
        })
        .unwrap_or_else(|| default.to_string())
    }

    /// Resolves a boolean setting.
    pub fn flag(&self, key: SettingKey, default: bool) -> bool {
        self.resolve(key, "flag", |value| match value {
            SettingValue::Flag(flag) => Some(flag),
            _ => None,
        })
        .unwrap_or(default)
    }

    /// Resolves the preset registry, empty if no layer provides one.
    pub fn presets(&self) -> PresetRegistry {
        self.resolve(SettingKey::Presets, "presets", |value| match value {
            SettingValue::Presets(presets) => Some(presets),
            _ => None,
        })
        .unwrap_or_default()
    }

    /// Resolves everything a builder needs into one snapshot.
    ///
    /// A space replacement that would make sanitization non-idempotent is
    /// logged and replaced with the default.
    pub fn settings(&self) -> LinkSettings {
        let defaults = SanitizeOptions::default();

        let mut sanitize = SanitizeOptions {
            lowercase: self.flag(SettingKey::Lowercase, defaults.lowercase),
            replace_spaces: self.flag(SettingKey::ReplaceSpaces, defaults.replace_spaces),
            space_replacement: self.text(SettingKey::SpaceReplacement, &defaults.space_replacement),
        };

        if !sanitize.is_idempotent() {
            warn!(
                replacement = %sanitize.space_replacement,
                lowercase = sanitize.lowercase,
                "Ignoring space replacement that is not stable under sanitization"
            );
            sanitize.space_replacement = defaults.space_replacement;
        }

        LinkSettings {
            ref_prefix: self.text(SettingKey::RefPrefix, DEFAULT_REF_PREFIX),
            sanitize,
            presets: self.presets(),
        }
    }

    fn resolve<T>(
        &self,
        key: SettingKey,
        expected: &'static str,
        extract: impl Fn(SettingValue) -> Option<T>,
    ) -> Option<T> {
        for (layer, provider) in self.layers.iter().enumerate() {
            let Some(value) = provider.lookup(key) else {
                debug!(%key, layer, "Setting not provided, falling through");
                continue;
            };

            let found = value.kind();
            match extract(value) {
                Some(resolved) => return Some(resolved),
                None => {
                    let error = ConfigValueError {
                        key,
                        expected,
                        found,
                    };
                    warn!(layer, "Ignoring config value: {}", error);
                }
            }
        }

        debug!(%key, "Setting not found in any layer, using default");
        None
    }
}
