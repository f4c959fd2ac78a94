//! Error types.
//!
//! Building links never fails. Errors only arise while parsing preset
//! definitions and, internally, when a provider hands back a value of the
//! wrong shape (logged and skipped by the resolver).

use crate::domain::providers::SettingKey;

/// Errors raised while parsing preset definitions.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("Invalid preset JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Preset definitions must be a JSON object of objects")]
    NotAnObject,

    #[error("Preset '{0}' must be a JSON object")]
    InvalidPreset(String),

    #[error("Preset '{preset}' uses unknown tracking key '{key}'")]
    UnknownKey { preset: String, key: String },

    #[error("Preset '{preset}' has a non-scalar value for '{key}'")]
    InvalidValue { preset: String, key: String },
}

/// A provider value that does not have the shape its key requires.
#[derive(Debug, thiserror::Error)]
#[error("Setting '{key}' expects a {expected} value, got {found}")]
pub struct ConfigValueError {
    pub key: SettingKey,
    pub expected: &'static str,
    pub found: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::SettingValue;

    #[test]
    fn test_config_value_error_message() {
        let err = ConfigValueError {
            key: SettingKey::Lowercase,
            expected: "flag",
            found: SettingValue::Text("yes".into()).kind(),
        };
        assert_eq!(
            err.to_string(),
            "Setting 'lowercase' expects a flag value, got text"
        );
    }

    #[test]
    fn test_preset_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PresetError::from(json_err);
        assert!(err.to_string().starts_with("Invalid preset JSON"));
    }
}
