//! Factory handing out link builders bound to a configuration snapshot.

use std::sync::Arc;

use crate::domain::entities::PresetRegistry;
use crate::domain::link_builder::LinkBuilder;
use crate::domain::link_settings::LinkSettings;
use crate::domain::operations::OperationRegistry;
use crate::domain::providers::{ConfigProvider, SettingKey};
use crate::infrastructure::StaticConfig;

use super::config_resolver::ConfigResolver;

/// Service creating [`LinkBuilder`]s.
///
/// Settings are resolved once, when the factory is created, and shared by
/// every builder it produces. To pick up changed defaults, create a new
/// factory.
///
/// # Examples
///
/// ```ignore
/// let factory = LinkFactory::from_static(
///     StaticConfig::new()
///         .with_base_url("https://example.com")
///         .with_presets(PresetRegistry::builtin()),
/// );
///
/// let url = factory.make().set_path("page").preset("newsletter").build();
/// ```
#[derive(Debug, Clone)]
pub struct LinkFactory {
    base_url: String,
    client_url: String,
    settings: Arc<LinkSettings>,
    operations: OperationRegistry,
}

impl LinkFactory {
    /// Creates a factory from a resolver.
    pub fn new(resolver: &ConfigResolver) -> Self {
        let base_url = resolver.text(SettingKey::BaseUrl, "");
        let client_url = resolver.text(SettingKey::ClientUrl, "");
        let settings = resolver.settings();

        tracing::debug!(
            base_url = %base_url,
            client_url = %client_url,
            presets = settings.presets.len(),
            "Link factory created"
        );

        Self {
            base_url,
            client_url,
            settings: Arc::new(settings),
            operations: OperationRegistry::new(),
        }
    }

    /// Live provider first, `defaults` as fallback.
    pub fn from_provider(live: Arc<dyn ConfigProvider>, defaults: StaticConfig) -> Self {
        Self::new(&ConfigResolver::layered(live, defaults))
    }

    /// Only the static table; used when no live configuration exists.
    pub fn from_static(defaults: StaticConfig) -> Self {
        let layer: Arc<dyn ConfigProvider> = Arc::new(defaults);
        Self::new(&ConfigResolver::new(vec![layer]))
    }

    /// Builder on the configured `base_url`.
    pub fn make(&self) -> LinkBuilder {
        self.make_with(self.base_url.clone())
    }

    /// Builder on an explicit base URL.
    pub fn make_with(&self, base_url: impl Into<String>) -> LinkBuilder {
        LinkBuilder::with_context(base_url, self.settings.clone(), self.operations.clone())
    }

    /// Builder on the configured `client_url`.
    ///
    /// Used when links must point at a different origin than the
    /// application's own, such as a public marketing site.
    pub fn client(&self) -> LinkBuilder {
        self.make_with(self.client_url.clone())
    }

    /// Registers a named operation available through [`LinkBuilder::apply`]
    /// on builders created afterwards.
    pub fn register<F>(&mut self, name: impl Into<String>, operation: F)
    where
        F: Fn(LinkBuilder) -> LinkBuilder + Send + Sync + 'static,
    {
        self.operations.register(name, operation);
    }

    /// Chaining variant of [`Self::register`].
    #[must_use]
    pub fn with_operation<F>(mut self, name: impl Into<String>, operation: F) -> Self
    where
        F: Fn(LinkBuilder) -> LinkBuilder + Send + Sync + 'static,
    {
        self.register(name, operation);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client_url(&self) -> &str {
        &self.client_url
    }

    pub fn settings(&self) -> &LinkSettings {
        &self.settings
    }

    pub fn presets(&self) -> &PresetRegistry {
        &self.settings.presets
    }

    pub fn operations(&self) -> &OperationRegistry {
        &self.operations
    }
}

impl Default for LinkFactory {
    fn default() -> Self {
        Self::from_static(StaticConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Preset, TrackingKey};
    use crate::domain::providers::{MockConfigProvider, SettingValue};
    use crate::infrastructure::NullConfig;

    fn test_defaults() -> StaticConfig {
        StaticConfig::new()
            .with_base_url("https://example.com")
            .with_client_url("https://client.example.com")
            .with_presets(
                PresetRegistry::new()
                    .with(
                        "email",
                        Preset::new()
                            .with(TrackingKey::Source, "email")
                            .with(TrackingKey::Medium, "email"),
                    )
                    .with(
                        "sms",
                        Preset::new()
                            .with(TrackingKey::Source, "sms")
                            .with(TrackingKey::Medium, "sms"),
                    ),
            )
    }

    #[test]
    fn test_make_uses_configured_base_url() {
        let factory = LinkFactory::from_static(test_defaults());
        assert_eq!(factory.make().set_path("page").build(), "https://example.com/page");
    }

    #[test]
    fn test_make_with_explicit_base_url() {
        let factory = LinkFactory::from_static(test_defaults());
        assert_eq!(
            factory.make_with("https://other.example.com").build(),
            "https://other.example.com"
        );
    }

    #[test]
    fn test_client_uses_client_url() {
        let factory = LinkFactory::from_static(test_defaults());
        let url = factory.client().set_path("booking/1").build();
        assert!(url.starts_with("https://client.example.com"));
    }

    #[test]
    fn test_default_factory_has_empty_base() {
        let factory = LinkFactory::default();
        assert_eq!(factory.make().build(), "");
        assert_eq!(factory.client().set_path("page").build(), "/page");
    }

    #[test]
    fn test_null_provider_falls_back_to_static() {
        let factory = LinkFactory::from_provider(Arc::new(NullConfig::new()), test_defaults());

        assert_eq!(factory.base_url(), "https://example.com");
        assert_eq!(factory.client_url(), "https://client.example.com");
        assert!(factory.presets().contains("email"));
    }

    #[test]
    fn test_live_provider_overrides_static() {
        let mut live = MockConfigProvider::new();
        live.expect_lookup().returning(|key| match key {
            SettingKey::ClientUrl => Some(SettingValue::Text("https://live.example.com".into())),
            SettingKey::Presets => Some(SettingValue::Presets(PresetRegistry::builtin())),
            _ => None,
        });

        let factory = LinkFactory::from_provider(Arc::new(live), test_defaults());

        assert_eq!(factory.base_url(), "https://example.com");
        assert!(factory.client().build().starts_with("https://live.example.com"));
        assert!(factory.presets().contains("newsletter"));
    }

    #[test]
    fn test_builders_share_presets() {
        let factory = LinkFactory::from_static(test_defaults());
        let url = factory.make().set_path("page").preset("sms").build();
        assert_eq!(url, "https://example.com/page?utm_source=sms&utm_medium=sms");
    }

    #[test]
    fn test_registered_operation() {
        let factory = LinkFactory::from_static(test_defaults()).with_operation(
            "booking_payment",
            |b| b.preset("email").campaign("Booking Payment"),
        );

        let url = factory.make().set_path("pay").apply("booking_payment").build();

        assert_eq!(
            url,
            "https://example.com/pay?utm_source=email&utm_medium=email&utm_campaign=booking_payment"
        );
        assert_eq!(factory.operations().names(), vec!["booking_payment"]);
    }

    #[test]
    fn test_operation_registered_later_not_seen_by_existing_builder() {
        let mut factory = LinkFactory::from_static(test_defaults());
        let early = factory.make();
        factory.register("tag", |b| b.source("tagged"));

        assert!(!early.apply("tag").has_tracking());
        assert!(factory.make().apply("tag").has_tracking());
    }
}
