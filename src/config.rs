//! Live configuration loaded from environment variables.
//!
//! Configuration is loaded once and validated before a
//! [`crate::application::services::LinkFactory`] is built from it. Every
//! variable is optional; unset variables leave the setting to the static
//! fallback table.
//!
//! ## Variables
//!
//! ```bash
//! export UTM_BASE_URL="https://app.example.com"        # falls back to APP_URL
//! export UTM_CLIENT_URL="https://www.example.com"      # falls back to APP_URL
//! export UTM_REF_PREFIX="ref_"
//! export UTM_LOWERCASE="true"
//! export UTM_REPLACE_SPACES="true"
//! export UTM_SPACE_REPLACEMENT="_"
//! ```
//!
//! ## Presets
//!
//! Presets are read from, in priority order:
//!
//! 1. `UTM_PRESETS` - inline JSON, e.g. `{"promo": {"utm_source": "site"}}`
//! 2. `UTM_PRESETS_FILE` - path to a JSON file with the same shape
//!
//! With neither set, presets come from the static fallback table; pass
//! [`PresetRegistry::builtin`] there to get the shipped catalog.
//!
//! Boolean variables accept `true/false`, `1/0`, `yes/no` and `on/off`.

use anyhow::{Context, Result};
use std::env;
use std::fs;

use crate::domain::entities::PresetRegistry;
use crate::domain::providers::{ConfigProvider, SettingKey, SettingValue};

/// Tracking-link configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `UTM_BASE_URL`, or `APP_URL` when unset.
    pub base_url: Option<String>,
    /// `UTM_CLIENT_URL`, or `APP_URL` when unset.
    pub client_url: Option<String>,
    pub ref_prefix: Option<String>,
    pub lowercase: Option<bool>,
    pub replace_spaces: Option<bool>,
    pub space_replacement: Option<String>,
    /// `None` when no preset source is configured.
    pub presets: Option<PresetRegistry>,
    base_url_var: &'static str,
    client_url_var: &'static str,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean variable cannot be parsed, or if preset
    /// definitions cannot be read or parsed.
    pub fn from_env() -> Result<Self> {
        let app_url = env_opt("APP_URL");

        let (base_url, base_url_var) = env_url("UTM_BASE_URL", &app_url);
        let (client_url, client_url_var) = env_url("UTM_CLIENT_URL", &app_url);
        let ref_prefix = env_opt("UTM_REF_PREFIX");
        let space_replacement = env_opt("UTM_SPACE_REPLACEMENT");

        let lowercase = env_flag("UTM_LOWERCASE")?;
        let replace_spaces = env_flag("UTM_REPLACE_SPACES")?;

        let presets = Self::load_presets().context("Failed to load UTM presets")?;

        Ok(Self {
            base_url,
            client_url,
            ref_prefix,
            lowercase,
            replace_spaces,
            space_replacement,
            presets,
            base_url_var,
            client_url_var,
        })
    }

    /// Loads presets, `None` when neither source is set.
    ///
    /// Priority:
    /// 1. `UTM_PRESETS` inline JSON
    /// 2. `UTM_PRESETS_FILE` JSON file
    fn load_presets() -> Result<Option<PresetRegistry>> {
        // Priority 1: inline JSON
        if let Some(json) = env_opt("UTM_PRESETS") {
            let presets = PresetRegistry::from_json(&json).context("UTM_PRESETS is not valid")?;
            return Ok(Some(presets));
        }

        // Priority 2: JSON file
        if let Some(path) = env_opt("UTM_PRESETS_FILE") {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read UTM_PRESETS_FILE '{}'", path))?;
            let presets = PresetRegistry::from_json(&contents)
                .with_context(|| format!("UTM_PRESETS_FILE '{}' is not valid", path))?;
            return Ok(Some(presets));
        }

        Ok(None)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` or `client_url` is set but is not an `http(s)` URL
    /// - `ref_prefix` contains a space
    /// - `space_replacement` contains a space, or has uppercase characters
    ///   while lowercasing is enabled
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.base_url {
            validate_origin(self.base_url_var, url)?;
        }

        if let Some(ref url) = self.client_url {
            validate_origin(self.client_url_var, url)?;
        }

        if let Some(ref prefix) = self.ref_prefix
            && prefix.contains(' ')
        {
            anyhow::bail!("UTM_REF_PREFIX must not contain spaces, got '{}'", prefix);
        }

        if let Some(ref replacement) = self.space_replacement {
            if replacement.contains(' ') {
                anyhow::bail!(
                    "UTM_SPACE_REPLACEMENT must not contain spaces, got '{}'",
                    replacement
                );
            }

            // Lowercasing runs before replacement, so an uppercase replacement
            // would change again on a second pass.
            if self.lowercase != Some(false) && replacement.to_lowercase() != *replacement {
                anyhow::bail!(
                    "UTM_SPACE_REPLACEMENT must be lowercase while UTM_LOWERCASE is enabled, got '{}'",
                    replacement
                );
            }
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn log_summary(&self) {
        tracing::info!("Tracking link configuration loaded:");
        tracing::info!("  Base URL: {}", display_opt(&self.base_url));
        tracing::info!("  Client URL: {}", display_opt(&self.client_url));
        tracing::info!("  Reference prefix: {}", display_opt(&self.ref_prefix));
        tracing::info!("  Lowercase: {}", display_opt(&self.lowercase));
        tracing::info!("  Replace spaces: {}", display_opt(&self.replace_spaces));
        tracing::info!(
            "  Space replacement: {}",
            display_opt(&self.space_replacement)
        );
        match self.presets {
            Some(ref presets) => tracing::info!(
                "  Presets: {} ({})",
                presets.len(),
                presets.names().collect::<Vec<_>>().join(", ")
            ),
            None => tracing::info!("  Presets: (default)"),
        }
    }
}

impl ConfigProvider for Config {
    fn lookup(&self, key: SettingKey) -> Option<SettingValue> {
        match key {
            SettingKey::BaseUrl => self.base_url.clone().map(SettingValue::Text),
            SettingKey::ClientUrl => self.client_url.clone().map(SettingValue::Text),
            SettingKey::RefPrefix => self.ref_prefix.clone().map(SettingValue::Text),
            SettingKey::Lowercase => self.lowercase.map(SettingValue::Flag),
            SettingKey::ReplaceSpaces => self.replace_spaces.map(SettingValue::Flag),
            SettingKey::SpaceReplacement => self.space_replacement.clone().map(SettingValue::Text),
            SettingKey::Presets => self.presets.clone().map(SettingValue::Presets),
        }
    }
}

/// Reads a variable, treating an empty value as unset.
fn env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Reads a URL variable, falling back to `APP_URL`.
///
/// Also returns the name of the variable the value came from.
fn env_url(name: &'static str, app_url: &Option<String>) -> (Option<String>, &'static str) {
    match env_opt(name) {
        Some(url) => (Some(url), name),
        None => (app_url.clone(), "APP_URL"),
    }
}

/// Reads a boolean variable.
fn env_flag(name: &str) -> Result<Option<bool>> {
    match env_opt(name) {
        Some(raw) => parse_flag(&raw)
            .map(Some)
            .with_context(|| format!("{} must be a boolean, got '{}'", name, raw)),
        None => Ok(None),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn validate_origin(name: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value)
        .with_context(|| format!("{} must be an absolute URL, got '{}'", name, value))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!(
            "{} must use http or https, got '{}' ({})",
            name,
            value,
            other
        ),
    }
}

fn display_opt<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "(default)".to_string(),
    }
}

/// Loads `.env`, then loads and validates configuration from the environment.
///
/// # Errors
///
/// Returns an error if variables cannot be parsed or validation fails.
/// A missing `.env` file is not an error.
pub fn load_from_env() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
