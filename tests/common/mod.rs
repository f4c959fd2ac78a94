#![allow(dead_code)]

use tracing_subscriber::EnvFilter;
use utm_builder::prelude::*;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_presets() -> PresetRegistry {
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
        )
        .with(
            "newsletter",
            Preset::new()
                .with(TrackingKey::Source, "newsletter")
                .with(TrackingKey::Medium, "email")
                .with(TrackingKey::Campaign, "newsletter"),
        )
}

pub fn test_defaults() -> StaticConfig {
    StaticConfig::new()
        .with_base_url("https://example.com")
        .with_client_url("https://client.example.com")
        .with_presets(test_presets())
}

pub fn create_test_factory() -> LinkFactory {
    init_tracing();
    LinkFactory::from_static(test_defaults())
}
