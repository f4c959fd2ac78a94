//! Helper functions used by the link builder.
//!
//! - [`sanitizer`] - Tracking-value normalization
//! - [`url_assembly`] - Path joining and query-string encoding

pub mod sanitizer;
pub mod url_assembly;
