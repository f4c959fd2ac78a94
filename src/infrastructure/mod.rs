//! Infrastructure layer for configuration sources.
//!
//! This layer implements the [`crate::domain::providers::ConfigProvider`]
//! trait with in-process data. The environment-backed provider lives in
//! [`crate::config`].
//!
//! # Modules
//!
//! - [`config`] - Static fallback table and no-op provider

pub mod config;

pub use config::{NullConfig, StaticConfig};
