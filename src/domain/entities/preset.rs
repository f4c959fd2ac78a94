//! Named, reusable partial sets of tracking parameters.

use super::param_map::ParamMap;
use super::tracking::TrackingKey;
use crate::error::PresetError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A partial tracking-parameter set.
///
/// Values are stored verbatim: presets are expected to be written in their
/// final, already-sanitized form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preset {
    params: ParamMap<String>,
}

impl Preset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one tracking value.
    #[must_use]
    pub fn with(mut self, key: TrackingKey, value: impl Into<String>) -> Self {
        self.params.insert(key.as_str(), value.into());
        self
    }

    pub fn get(&self, key: TrackingKey) -> Option<&str> {
        self.params.get(key.as_str()).map(String::as_str)
    }

    pub fn params(&self) -> &ParamMap<String> {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Preset lookup table keyed by preset name.
///
/// Cheap to clone; the table itself is shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetRegistry {
    presets: Arc<BTreeMap<String, Preset>>,
}

impl PresetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the registry with `preset` registered under `name`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, preset: Preset) -> Self {
        Arc::make_mut(&mut self.presets).insert(name.into(), preset);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// Preset names in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// The catalog shipped with the crate, covering email, SMS, social,
    /// paid, referral and internal traffic.
    pub fn builtin() -> Self {
        use TrackingKey::{Campaign, Medium, Source};

        let pair = |source: &str, medium: &str| {
            Preset::new().with(Source, source).with(Medium, medium)
        };
        let triple = |source: &str, medium: &str, campaign: &str| {
            pair(source, medium).with(Campaign, campaign)
        };

        Self::new()
            .with("email", pair("email", "email"))
            .with("newsletter", triple("newsletter", "email", "newsletter"))
            .with("transactional", triple("system", "email", "transactional"))
            .with("sms", pair("sms", "sms"))
            .with("sms_notification", triple("system", "sms", "notification"))
            .with("sms_promotion", triple("marketing", "sms", "promotion"))
            .with("facebook", pair("facebook", "social"))
            .with("twitter", pair("twitter", "social"))
            .with("linkedin", pair("linkedin", "social"))
            .with("instagram", pair("instagram", "social"))
            .with("whatsapp", triple("whatsapp", "social", "share"))
            .with("google_ads", pair("google", "cpc"))
            .with("facebook_ads", pair("facebook", "paid_social"))
            .with("referral", pair("referral", "referral"))
            .with("affiliate", pair("affiliate", "affiliate"))
            .with("internal", pair("internal", "link"))
            .with("admin_panel", pair("admin_panel", "internal"))
    }

    /// Parses a JSON object of the form `{"name": {"utm_source": "..."}}`.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError`] on malformed JSON, unknown tracking keys, or
    /// non-scalar values. Numbers and booleans are accepted and stored as text.
    pub fn from_json(input: &str) -> Result<Self, PresetError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_value(&value)
    }

    /// Same as [`Self::from_json`] for an already-parsed value.
    pub fn from_value(value: &Value) -> Result<Self, PresetError> {
        let definitions = value.as_object().ok_or(PresetError::NotAnObject)?;
        let mut table = BTreeMap::new();

        for (name, body) in definitions {
            let fields = body
                .as_object()
                .ok_or_else(|| PresetError::InvalidPreset(name.clone()))?;

            let mut preset = Preset::new();
            for (key, raw) in fields {
                let tracking_key =
                    TrackingKey::parse(key).ok_or_else(|| PresetError::UnknownKey {
                        preset: name.clone(),
                        key: key.clone(),
                    })?;

                let text = match raw {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => {
                        return Err(PresetError::InvalidValue {
                            preset: name.clone(),
                            key: key.clone(),
                        });
                    }
                };
                preset = preset.with(tracking_key, text);
            }

            table.insert(name.clone(), preset);
        }

        Ok(Self {
            presets: Arc::new(table),
        })
    }
}
