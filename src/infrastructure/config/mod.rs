//! Configuration providers backed by in-process data.
//!
//! - [`StaticConfig`] - Static fallback table with the built-in defaults
//! - [`NullConfig`] - No-op provider for a missing live configuration

mod null_config;
mod static_config;

pub use null_config::NullConfig;
pub use static_config::StaticConfig;
