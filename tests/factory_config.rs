mod common;

use serial_test::serial;
use std::env;
use std::sync::Arc;
use utm_builder::config::load_from_env;
use utm_builder::prelude::*;

const VARS: &[&str] = &[
    "APP_URL",
    "UTM_BASE_URL",
    "UTM_CLIENT_URL",
    "UTM_REF_PREFIX",
    "UTM_LOWERCASE",
    "UTM_REPLACE_SPACES",
    "UTM_SPACE_REPLACEMENT",
    "UTM_PRESETS",
    "UTM_PRESETS_FILE",
];

fn clear_env() {
    // SAFETY: Tests touching the environment are run serially via #[serial]
    unsafe {
        for var in VARS {
            env::remove_var(var);
        }
    }
}

#[test]
#[serial]
fn test_env_config_drives_factory() {
    common::init_tracing();
    clear_env();
    // SAFETY: Tests are run serially
    unsafe {
        env::set_var("UTM_BASE_URL", "https://app.example.com");
        env::set_var("UTM_CLIENT_URL", "https://www.example.com");
        env::set_var("UTM_REF_PREFIX", "src_");
        env::set_var("UTM_SPACE_REPLACEMENT", "-");
    }

    let config = load_from_env().unwrap();
    let defaults = StaticConfig::new().with_presets(PresetRegistry::builtin());
    let factory = LinkFactory::from_provider(Arc::new(config), defaults);

    let url = factory
        .make()
        .set_path("offers")
        .campaign("Black Friday")
        .reference("user", 9)
        .build();
    assert_eq!(
        url,
        "https://app.example.com/offers?src_user=9&utm_campaign=black-friday"
    );

    // No preset source in the environment: the static table's catalog applies
    let url = factory.client().preset("whatsapp").build();
    assert_eq!(
        url,
        "https://www.example.com?utm_source=whatsapp&utm_medium=social&utm_campaign=share"
    );

    clear_env();
}

#[test]
#[serial]
fn test_unset_env_falls_back_to_static_table() {
    clear_env();

    let config = load_from_env().unwrap();
    let factory = LinkFactory::from_provider(Arc::new(config), common::test_defaults());

    assert_eq!(factory.base_url(), "https://example.com");
    assert_eq!(factory.client_url(), "https://client.example.com");
    assert_eq!(factory.settings().ref_prefix, "ref_");
    assert!(factory.settings().sanitize.lowercase);

    clear_env();
}

#[test]
#[serial]
fn test_static_presets_reachable_without_env_presets() {
    clear_env();

    let defaults = StaticConfig::new()
        .with_base_url("https://example.com")
        .with_presets(PresetRegistry::new().with(
            "promo",
            Preset::new()
                .with(TrackingKey::Source, "site")
                .with(TrackingKey::Medium, "banner"),
        ));

    let config = load_from_env().unwrap();
    let factory = LinkFactory::from_provider(Arc::new(config), defaults);

    assert_eq!(factory.presets().names().collect::<Vec<_>>(), vec!["promo"]);
    assert_eq!(
        factory.make().preset("promo").build(),
        "https://example.com?utm_source=site&utm_medium=banner"
    );

    clear_env();
}

#[test]
#[serial]
fn test_env_presets_replace_static_presets() {
    clear_env();
    // SAFETY: Tests are run serially
    unsafe {
        env::set_var("UTM_PRESETS", r#"{"partner": {"utm_source": "partner"}}"#);
    }

    let config = load_from_env().unwrap();
    let factory = LinkFactory::from_provider(Arc::new(config), common::test_defaults());

    assert!(factory.presets().contains("partner"));
    assert!(!factory.presets().contains("newsletter"));

    clear_env();
}

#[test]
#[serial]
fn test_sanitization_can_be_disabled_from_env() {
    clear_env();
    // SAFETY: Tests are run serially
    unsafe {
        env::set_var("UTM_LOWERCASE", "false");
        env::set_var("UTM_REPLACE_SPACES", "off");
    }

    let config = load_from_env().unwrap();
    let factory = LinkFactory::from_provider(Arc::new(config), common::test_defaults());

    let url = factory.make().source("Google Ads").build();
    assert_eq!(url, "https://example.com?utm_source=Google+Ads");

    clear_env();
}

#[test]
#[serial]
fn test_invalid_env_is_rejected() {
    clear_env();
    // SAFETY: Tests are run serially
    unsafe {
        env::set_var("UTM_BASE_URL", "not a url");
    }

    assert!(load_from_env().is_err());

    clear_env();
}

#[test]
fn test_missing_live_config_uses_static_defaults() {
    common::init_tracing();

    let factory =
        LinkFactory::from_provider(Arc::new(NullConfig::new()), common::test_defaults());

    let url = factory.make().set_path("page").preset("email").build();
    assert_eq!(url, "https://example.com/page?utm_source=email&utm_medium=email");
}

#[test]
fn test_resolver_without_layers_uses_caller_defaults() {
    let resolver = ConfigResolver::new(Vec::new());
    let factory = LinkFactory::new(&resolver);

    assert_eq!(factory.base_url(), "");
    assert_eq!(factory.settings(), &LinkSettings::default());
    assert_eq!(
        factory.make_with("https://example.com").reference("id", 1).build(),
        "https://example.com?ref_id=1"
    );
}

#[test]
fn test_custom_provider() {
    struct Tenant;

    impl ConfigProvider for Tenant {
        fn lookup(&self, key: SettingKey) -> Option<SettingValue> {
            match key {
                SettingKey::BaseUrl => Some(SettingValue::Text("https://tenant.example.com".into())),
                SettingKey::SpaceReplacement => Some(SettingValue::Text("+".into())),
                // Wrong shape: ignored, static table answers instead
                SettingKey::Lowercase => Some(SettingValue::Text("yes".into())),
                _ => None,
            }
        }
    }

    let factory = LinkFactory::from_provider(
        Arc::new(Tenant),
        StaticConfig::new().with_lowercase(false),
    );

    let url = factory.make().campaign("Big Sale").build();
    assert_eq!(url, "https://tenant.example.com?utm_campaign=Big%2BSale");
}
