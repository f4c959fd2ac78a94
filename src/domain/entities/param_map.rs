//! Insertion-ordered parameter map used for tracking and extra query parameters.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered string-keyed map with overwrite-in-place semantics.
///
/// Re-inserting an existing key replaces its value but keeps its original
/// position; new keys are appended. Query strings are short, so lookups are
/// linear scans over a `Vec`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> ParamMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or overwrites `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<V: Clone> ParamMap<V> {
    /// Merges `other` into `self`; keys from `other` win on collision.
    pub fn merge(&mut self, other: &ParamMap<V>) {
        for (key, value) in other.iter() {
            self.insert(key, value.clone());
        }
    }
}

impl<V> Default for ParamMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for ParamMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for ParamMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> IntoIterator for ParamMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for ParamMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_appends_new_keys_in_order() {
        let mut map = ParamMap::new();
        map.insert("b", 1);
        map.insert("a", 2);
        map.insert("c", 3);

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut map = ParamMap::new();
        map.insert("first", "x");
        map.insert("second", "y");

        let previous = map.insert("first", "z");

        assert_eq!(previous, Some("x"));
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![("first", &"z"), ("second", &"y")]
        );
    }

    #[test]
    fn test_merge_other_wins() {
        let mut base: ParamMap<&str> = [("a", "1"), ("b", "2")].into_iter().collect();
        let other: ParamMap<&str> = [("b", "20"), ("c", "30")].into_iter().collect();

        base.merge(&other);

        assert_eq!(
            base.iter().collect::<Vec<_>>(),
            vec![("a", &"1"), ("b", &"20"), ("c", &"30")]
        );
    }

    #[test]
    fn test_clear() {
        let mut map: ParamMap<i32> = [("a", 1)].into_iter().collect();
        assert!(!map.is_empty());

        map.clear();

        assert!(map.is_empty());
        assert!(!map.contains_key("a"));
    }

    #[test]
    fn test_serialize_preserves_order() {
        let map: ParamMap<&str> = [("z", "last"), ("a", "first")].into_iter().collect();

        let json = serde_json::to_string(&map).unwrap();

        assert_eq!(json, r#"{"z":"last","a":"first"}"#);
    }
}
