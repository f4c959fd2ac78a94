//! Parameter-accumulating tracking link builder.

use crate::domain::entities::{LinkRecord, ParamMap, QueryValue, TrackingKey};
use crate::domain::link_settings::LinkSettings;
use crate::domain::operations::OperationRegistry;
use crate::utils::sanitizer::sanitize;
use crate::utils::url_assembly::{append_query, encode_query, join_path};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Accumulates a base URL, a path, tracking parameters and extra query
/// parameters, and assembles them into a URL.
///
/// One builder is meant for one link. Mutators consume and return the
/// builder so calls can be chained; [`Self::build`] borrows and can be called
/// any number of times.
///
/// # Precedence
///
/// When an extra parameter and a tracking parameter share a name, the
/// tracking value wins in [`Self::build`], [`Self::query_string`] and
/// [`Self::all_params`].
///
/// # Examples
///
/// ```ignore
/// let url = LinkBuilder::new("https://example.com")
///     .set_path("page")
///     .source("Google")
///     .campaign("Summer Sale")
///     .build();
///
/// assert_eq!(url, "https://example.com/page?utm_source=google&utm_campaign=summer_sale");
/// ```
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
    path: String,
    tracking: ParamMap<String>,
    extra: ParamMap<QueryValue>,
    settings: Arc<LinkSettings>,
    operations: OperationRegistry,
}

impl LinkBuilder {
    /// Creates a builder with default settings and no registered operations.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_context(
            base_url,
            Arc::new(LinkSettings::default()),
            OperationRegistry::new(),
        )
    }

    /// Creates a builder bound to resolved settings and an operation registry.
    pub fn with_context(
        base_url: impl Into<String>,
        settings: Arc<LinkSettings>,
        operations: OperationRegistry,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            path: String::new(),
            tracking: ParamMap::new(),
            extra: ParamMap::new(),
            settings,
            operations,
        }
    }

    // ── Base identity ──────────────────────────────────────────────────────

    #[must_use]
    pub fn set_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn set_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn settings(&self) -> &LinkSettings {
        &self.settings
    }

    // ── Tracking parameters ────────────────────────────────────────────────

    /// Sanitizes `value` and stores it under `key`.
    #[must_use]
    pub fn set_tracking(mut self, key: TrackingKey, value: impl AsRef<str>) -> Self {
        let value = sanitize(value.as_ref(), &self.settings.sanitize);
        self.tracking.insert(key.as_str(), value);
        self
    }

    #[must_use]
    pub fn source(self, value: impl AsRef<str>) -> Self {
        self.set_tracking(TrackingKey::Source, value)
    }

    #[must_use]
    pub fn medium(self, value: impl AsRef<str>) -> Self {
        self.set_tracking(TrackingKey::Medium, value)
    }

    #[must_use]
    pub fn campaign(self, value: impl AsRef<str>) -> Self {
        self.set_tracking(TrackingKey::Campaign, value)
    }

    #[must_use]
    pub fn term(self, value: impl AsRef<str>) -> Self {
        self.set_tracking(TrackingKey::Term, value)
    }

    #[must_use]
    pub fn content(self, value: impl AsRef<str>) -> Self {
        self.set_tracking(TrackingKey::Content, value)
    }

    #[must_use]
    pub fn id(self, value: impl AsRef<str>) -> Self {
        self.set_tracking(TrackingKey::Id, value)
    }

    /// Merges a named preset into the tracking parameters.
    ///
    /// Preset values overwrite keys that are already set and are stored
    /// without sanitization. An unknown name leaves the builder unchanged.
    #[must_use]
    pub fn preset(mut self, name: &str) -> Self {
        match self.settings.presets.get(name) {
            Some(preset) => self.tracking.merge(preset.params()),
            None => debug!(preset = name, "Unknown preset, ignoring"),
        }
        self
    }

    /// Sets several tracking parameters at once.
    ///
    /// Keys other than the six `utm_*` names are dropped. Values are
    /// sanitized; null and `false` are stored as an empty string, `true`
    /// as `1`.
    #[must_use]
    pub fn tracking<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<QueryValue>,
    {
        for (key, value) in params {
            let key = key.as_ref();
            match TrackingKey::parse(key) {
                Some(tracking_key) => {
                    let text = match value.into() {
                        QueryValue::Bool(false) => String::new(),
                        other => other.to_string(),
                    };
                    self = self.set_tracking(tracking_key, text);
                }
                None => trace!(key, "Dropping unrecognized tracking key"),
            }
        }
        self
    }

    pub fn has_tracking(&self) -> bool {
        !self.tracking.is_empty()
    }

    #[must_use]
    pub fn clear_tracking(mut self) -> Self {
        self.tracking.clear();
        self
    }

    // ── Extra parameters ───────────────────────────────────────────────────

    /// Merges extra query parameters; existing keys are overwritten in place.
    #[must_use]
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<QueryValue>,
    {
        for (key, value) in params {
            self.extra.insert(key, value.into());
        }
        self
    }

    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.extra.insert(key, value.into());
        self
    }

    /// Adds a reference parameter named `<ref_prefix><key>`.
    ///
    /// Reference values identify an entity and are never sanitized.
    #[must_use]
    pub fn reference(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        let name = format!("{}{}", self.settings.ref_prefix, key);
        self.extra.insert(name, value.into());
        self
    }

    #[must_use]
    pub fn clear_params(mut self) -> Self {
        self.extra.clear();
        self
    }

    /// Clears path, tracking and extra parameters. The base URL is kept.
    #[must_use]
    pub fn reset(mut self) -> Self {
        self.path.clear();
        self.tracking.clear();
        self.extra.clear();
        self
    }

    // ── Registered operations ──────────────────────────────────────────────

    /// Runs the operation registered under `name`; unknown names are ignored.
    #[must_use]
    pub fn apply(self, name: &str) -> Self {
        match self.operations.get(name) {
            Some(operation) => operation(self),
            None => {
                debug!(operation = name, "Unknown link operation, ignoring");
                self
            }
        }
    }

    // ── Assembly ───────────────────────────────────────────────────────────

    /// Assembles the final URL.
    ///
    /// # Algorithm
    ///
    /// 1. Trailing `/` stripped from the base URL
    /// 2. Non-empty path appended after exactly one `/`
    /// 3. Extra parameters merged first, tracking parameters second
    /// 4. Nothing to serialize: URL returned without separator
    /// 5. Otherwise `?` or `&` (if the URL already has a query) plus the
    ///    form-encoded pairs
    pub fn build(&self) -> String {
        let url = join_path(&self.base_url, &self.path);
        append_query(url, &self.query_string())
    }

    /// Form-encoded query string without a leading separator.
    ///
    /// Null-valued extra parameters are omitted.
    pub fn query_string(&self) -> String {
        let combined = self.query_params();
        let rendered: Vec<(&str, String)> = combined
            .iter()
            .filter_map(|(key, value)| value.to_query_string().map(|v| (key, v)))
            .collect();

        encode_query(rendered.iter().map(|(k, v)| (*k, v.as_str())))
    }

    /// Parameters in query-string order: extra first, tracking overriding.
    fn query_params(&self) -> ParamMap<QueryValue> {
        let mut combined = self.extra.clone();
        for (key, value) in self.tracking.iter() {
            combined.insert(key, QueryValue::Text(value.clone()));
        }
        combined
    }

    // ── Views ──────────────────────────────────────────────────────────────

    pub fn tracking_params(&self) -> &ParamMap<String> {
        &self.tracking
    }

    pub fn extra_params(&self) -> &ParamMap<QueryValue> {
        &self.extra
    }

    /// Tracking parameters followed by extra parameters whose key is not
    /// already a tracking key.
    pub fn all_params(&self) -> ParamMap<QueryValue> {
        let mut all: ParamMap<QueryValue> = self
            .tracking
            .iter()
            .map(|(k, v)| (k, QueryValue::Text(v.clone())))
            .collect();

        for (key, value) in self.extra.iter() {
            if !all.contains_key(key) {
                all.insert(key, value.clone());
            }
        }
        all
    }

    /// Detached snapshot of the builder, including the built URL.
    pub fn to_record(&self) -> LinkRecord {
        LinkRecord {
            url: self.build(),
            base_url: self.base_url.clone(),
            path: self.path.clone(),
            tracking_params: self.tracking.clone(),
            extra_params: self.extra.clone(),
        }
    }

    /// JSON encoding of [`Self::to_record`].
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_record())
    }
}

impl fmt::Display for LinkBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
