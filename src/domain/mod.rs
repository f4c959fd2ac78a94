//! Domain layer containing the link builder and its value types.
//!
//! # Architecture
//!
//! - [`entities`] - Tracking keys, parameter maps, presets and records
//! - [`providers`] - Configuration lookup trait definitions
//! - [`link_builder`] - The parameter-accumulating builder
//! - [`link_settings`] - Resolved settings snapshot shared by builders
//! - [`operations`] - Named builder operations registered at runtime
//!
//! # Design Principles
//!
//! - The domain layer performs no I/O and never fails
//! - Configuration reaches it only as an already-resolved [`link_settings::LinkSettings`]
//! - Resolution and fallback live in [`crate::application::services`]
//!
//! # Link Assembly Flow
//!
//! 1. [`crate::application::services::LinkFactory`] resolves settings once
//! 2. Each call to `make()` / `client()` hands out a fresh [`link_builder::LinkBuilder`]
//! 3. Setters sanitize and accumulate parameters
//! 4. `build()` joins base URL and path and appends the encoded query

pub mod entities;
pub mod link_builder;
pub mod link_settings;
pub mod operations;
pub mod providers;
