//! Provider trait definitions for the domain layer.
//!
//! The builder never reads configuration directly. It consumes settings
//! through the [`ConfigProvider`] trait, implemented in the infrastructure
//! layer and in [`crate::config`].
//!
//! # Architecture
//!
//! - Traits define the lookup contract
//! - Implementations live in `crate::infrastructure` and `crate::config`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod config_provider;

pub use config_provider::{ConfigProvider, SettingKey, SettingValue};

#[cfg(test)]
pub use config_provider::MockConfigProvider;
