//! Resolved settings snapshot carried by every builder.

use crate::domain::entities::PresetRegistry;
use crate::utils::sanitizer::SanitizeOptions;

/// Default prefix for reference parameters.
pub const DEFAULT_REF_PREFIX: &str = "ref_";

/// Configuration a builder needs after all fallbacks have been applied.
///
/// Built once per [`crate::application::services::LinkFactory`] and shared
/// between its builders through an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSettings {
    /// Prepended to keys written through `reference`.
    pub ref_prefix: String,
    pub sanitize: SanitizeOptions,
    pub presets: PresetRegistry,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            ref_prefix: DEFAULT_REF_PREFIX.to_string(),
            sanitize: SanitizeOptions::default(),
            presets: PresetRegistry::new(),
        }
    }
}
