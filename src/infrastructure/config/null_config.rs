//! Provider used when no live configuration source is available.

use crate::domain::providers::{ConfigProvider, SettingKey, SettingValue};
use tracing::debug;

/// A provider that knows no settings.
///
/// Every lookup answers `None`, so resolution falls through to the static
/// table. Stands in for an unreachable or unconfigured host configuration.
pub struct NullConfig;

impl NullConfig {
    pub fn new() -> Self {
        debug!("Using NullConfig (no live configuration)");
        Self
    }
}

impl Default for NullConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for NullConfig {
    fn lookup(&self, _key: SettingKey) -> Option<SettingValue> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_config_answers_nothing() {
        let config = NullConfig::new();
        for key in SettingKey::ALL {
            assert!(config.lookup(key).is_none());
        }
    }
}
