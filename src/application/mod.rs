//! Application layer: configuration resolution and builder creation.
//!
//! This layer turns provider lookups into a settings snapshot and hands out
//! builders bound to it.
//!
//! # Contents
//!
//! - [`services::config_resolver::ConfigResolver`] - Layered config lookup with fallbacks
//! - [`services::link_factory::LinkFactory`] - Builder creation and operation registry
//! - [`trackable::Trackable`] - Tracking links derived from application resources

pub mod services;
pub mod trackable;
