//! Core value types of the link-building domain.
//!
//! # Entity Types
//!
//! - [`TrackingKey`] - One of the six standardized `utm_*` keys
//! - [`QueryValue`] - A scalar extra-parameter value
//! - [`ParamMap`] - Insertion-ordered parameter map
//! - [`Preset`] / [`PresetRegistry`] - Named partial tracking sets
//! - [`LinkRecord`] - Serializable snapshot of a builder

pub mod param_map;
pub mod preset;
pub mod query_value;
pub mod record;
pub mod tracking;

pub use param_map::ParamMap;
pub use preset::{Preset, PresetRegistry};
pub use query_value::QueryValue;
pub use record::LinkRecord;
pub use tracking::TrackingKey;
