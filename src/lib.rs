//! # UTM Builder
//!
//! Assembles campaign-tracking URLs from a base URL, an optional path,
//! standardized `utm_*` parameters and arbitrary extra query parameters.
//!
//! ## Architecture
//!
//! This crate follows the same layered layout as a service, scaled down to a library:
//!
//! - **Domain Layer** ([`domain`]) - The link builder, value types and provider traits
//! - **Application Layer** ([`application`]) - Config resolution and builder creation
//! - **Infrastructure Layer** ([`infrastructure`]) - Static and no-op config providers
//! - **Configuration** ([`config`]) - Environment-backed live configuration
//!
//! ## Features
//!
//! - Fluent builder with sanitized `utm_source` / `utm_medium` / ... setters
//! - Named presets, a built-in catalog, and presets loaded from JSON
//! - Prefixed reference parameters for entity identifiers
//! - Layered configuration: live provider, static table, caller default
//! - Named operations and the [`application::trackable::Trackable`] trait for reuse
//!
//! ## Quick Start
//!
//! ```ignore
//! use utm_builder::prelude::*;
//!
//! let factory = LinkFactory::from_static(
//!     StaticConfig::new()
//!         .with_base_url("https://example.com")
//!         .with_presets(PresetRegistry::builtin()),
//! );
//!
//! let url = factory
//!     .make()
//!     .set_path("bookings/42")
//!     .preset("newsletter")
//!     .reference("user", 123)
//!     .build();
//!
//! assert_eq!(
//!     url,
//!     "https://example.com/bookings/42?ref_user=123&utm_source=newsletter\
//!      &utm_medium=email&utm_campaign=newsletter"
//! );
//! ```
//!
//! ## Configuration
//!
//! Live configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use application::services::LinkFactory;
pub use domain::link_builder::LinkBuilder;
pub use error::{ConfigValueError, PresetError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ConfigResolver, LinkFactory};
    pub use crate::application::trackable::Trackable;
    pub use crate::config::Config;
    pub use crate::domain::entities::{
        LinkRecord, ParamMap, Preset, PresetRegistry, QueryValue, TrackingKey,
    };
    pub use crate::domain::link_builder::LinkBuilder;
    pub use crate::domain::link_settings::LinkSettings;
    pub use crate::domain::providers::{ConfigProvider, SettingKey, SettingValue};
    pub use crate::error::PresetError;
    pub use crate::infrastructure::{NullConfig, StaticConfig};
    pub use crate::utils::sanitizer::SanitizeOptions;
}
