//! Normalization applied to tracking-parameter values before storage.

/// Sanitization switches resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Fold values to lowercase.
    pub lowercase: bool,
    /// Replace each space character with [`Self::space_replacement`].
    pub replace_spaces: bool,
    pub space_replacement: String,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            replace_spaces: true,
            space_replacement: "_".to_string(),
        }
    }
}

impl SanitizeOptions {
    /// Options that leave every value untouched.
    pub fn disabled() -> Self {
        Self {
            lowercase: false,
            replace_spaces: false,
            space_replacement: "_".to_string(),
        }
    }

    /// Whether sanitizing an already-sanitized value leaves it unchanged.
    ///
    /// Fails when replacement is on and the replacement either contains a
    /// space or is not lowercase while lowercasing is on.
    pub fn is_idempotent(&self) -> bool {
        if !self.replace_spaces {
            return true;
        }

        let replacement = &self.space_replacement;
        !replacement.contains(' ') && (!self.lowercase || replacement.to_lowercase() == *replacement)
    }
}

/// Sanitizes a tracking value.
///
/// # Rules
///
/// 1. **Lowercase** (if enabled): locale-independent Unicode lowercase
/// 2. **Spaces** (if enabled): every U+0020 is replaced; tabs, newlines and
///    other whitespace are kept
///
/// No trimming and no percent-encoding happen here.
///
/// The function is idempotent as long as the replacement contains no space
/// and is already lowercase when lowercasing is on; see
/// [`SanitizeOptions::is_idempotent`]. [`crate::config::Config::validate`]
/// rejects such values and the config resolver replaces them.
///
/// # Examples
///
/// ```ignore
/// let options = SanitizeOptions::default();
/// assert_eq!(sanitize("Summer Sale", &options), "summer_sale");
/// ```
pub fn sanitize(value: &str, options: &SanitizeOptions) -> String {
    let mut out = if options.lowercase {
        value.to_lowercase()
    } else {
        value.to_string()
    };

    if options.replace_spaces && out.contains(' ') {
        out = out.replace(' ', &options.space_replacement);
    }

    out
}
