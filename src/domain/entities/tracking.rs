//! Standardized campaign-tracking keys.

use serde::Serialize;
use std::fmt;

/// One of the six standardized tracking parameters.
///
/// Tracking maps only ever hold these keys; anything else offered through a
/// bulk setter is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrackingKey {
    #[serde(rename = "utm_source")]
    Source,
    #[serde(rename = "utm_medium")]
    Medium,
    #[serde(rename = "utm_campaign")]
    Campaign,
    #[serde(rename = "utm_term")]
    Term,
    #[serde(rename = "utm_content")]
    Content,
    #[serde(rename = "utm_id")]
    Id,
}

impl TrackingKey {
    /// All keys in canonical order.
    pub const ALL: [TrackingKey; 6] = [
        TrackingKey::Source,
        TrackingKey::Medium,
        TrackingKey::Campaign,
        TrackingKey::Term,
        TrackingKey::Content,
        TrackingKey::Id,
    ];

    /// Query-string name of the key (e.g. `utm_source`).
    pub const fn as_str(self) -> &'static str {
        match self {
            TrackingKey::Source => "utm_source",
            TrackingKey::Medium => "utm_medium",
            TrackingKey::Campaign => "utm_campaign",
            TrackingKey::Term => "utm_term",
            TrackingKey::Content => "utm_content",
            TrackingKey::Id => "utm_id",
        }
    }

    /// Parses a query-string name. Matching is exact and case-sensitive.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for TrackingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for key in TrackingKey::ALL {
            assert_eq!(TrackingKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_wrong_case() {
        assert_eq!(TrackingKey::parse("utm_foo"), None);
        assert_eq!(TrackingKey::parse("UTM_SOURCE"), None);
        assert_eq!(TrackingKey::parse("source"), None);
        assert_eq!(TrackingKey::parse(""), None);
    }

    #[test]
    fn test_serialize_uses_query_name() {
        let json = serde_json::to_string(&TrackingKey::Campaign).unwrap();
        assert_eq!(json, r#""utm_campaign""#);
    }
}
