//! Query-parameter mapping for StayScout navigation requests.
//!
//! A [`QueryMap`] is the set of key/value pairs encoded into a navigation
//! request's URL and read back by the destination view to reconstruct filter
//! state. Values are strings or string arrays; repeated keys collapse into
//! an array on parse, and arrays repeat the key on encode
//! (`price=100&price=500`).
//!
//! Percent-encoding is delegated to `url::form_urlencoded`, so free-text
//! destinations ("São Paulo") survive the round trip.

/// Query key for the free-text destination filter.
pub const KEY_GOING_TO: &str = "goingTo";

/// Query key for the traveler-count filter.
pub const KEY_TRAVELERS: &str = "travelers";

/// Query key for the nightly price range. Always carries two values,
/// `min` then `max`.
pub const KEY_PRICE: &str = "price";

/// Query key for the star-rating filter.
pub const KEY_STARS: &str = "stars";

/// Query key for the check-in date (ISO-8601).
pub const KEY_CHECK_IN: &str = "checkIn";

/// Query key for the check-out date (ISO-8601).
pub const KEY_CHECK_OUT: &str = "checkOut";

/// A single query value: a plain string or a string array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Single(String),
    Many(Vec<String>),
}

impl QueryValue {
    /// The first (or only) string held by this value.
    pub fn first(&self) -> Option<&str> {
        match self {
            QueryValue::Single(s) => Some(s.as_str()),
            QueryValue::Many(values) => values.first().map(String::as_str),
        }
    }

}

/// An insertion-ordered query-parameter mapping.
///
/// Keys keep the order of their first appearance, so encoded URLs are
/// stable and comparable in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key`. A repeated key collapses into
    /// [`QueryValue::Many`], preserving the key's original position.
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some((_, existing)) = self.pairs.iter_mut().find(|(k, _)| k == key) {
            match existing {
                QueryValue::Single(prev) => {
                    let prev = std::mem::take(prev);
                    *existing = QueryValue::Many(vec![prev, value]);
                }
                QueryValue::Many(values) => values.push(value),
            }
        } else {
            self.pairs.push((key.to_owned(), QueryValue::Single(value)));
        }
    }

    /// Append every value in `values` under `key`.
    pub fn append_all(&mut self, key: &str, values: impl IntoIterator<Item = String>) {
        for value in values {
            self.append(key, value);
        }
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// The first string stored under `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(QueryValue::first)
    }

    /// All strings stored under `key`, in order.
    pub fn all(&self, key: &str) -> Vec<&str> {
        match self.get(key) {
            Some(QueryValue::Single(s)) => vec![s.as_str()],
            Some(QueryValue::Many(values)) => values.iter().map(String::as_str).collect(),
            None => Vec::new(),
        }
    }

    /// Number of distinct keys in the mapping.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encode the mapping as a percent-encoded query string
    /// (no leading `?`). Arrays repeat their key once per element.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            match value {
                QueryValue::Single(s) => {
                    serializer.append_pair(key, s);
                }
                QueryValue::Many(values) => {
                    for s in values {
                        serializer.append_pair(key, s);
                    }
                }
            }
        }
        serializer.finish()
    }

    /// Parse a percent-encoded query string (with or without a leading `?`)
    /// back into a mapping. Repeated keys collapse into arrays; parsing
    /// never fails — malformed pairs simply decode to whatever
    /// `form_urlencoded` yields.
    pub fn parse(input: &str) -> Self {
        let input = input.strip_prefix('?').unwrap_or(input);
        let mut map = Self::new();
        for (key, value) in url::form_urlencoded::parse(input.as_bytes()) {
            map.append(&key, value.into_owned());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut q = QueryMap::new();
        q.append(KEY_GOING_TO, "Rio");
        q.append(KEY_STARS, "4");
        let keys: Vec<&str> = q.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![KEY_GOING_TO, KEY_STARS]);
    }

    #[test]
    fn test_repeated_key_collapses_to_array() {
        let mut q = QueryMap::new();
        q.append(KEY_PRICE, "100");
        q.append(KEY_PRICE, "500");
        assert_eq!(q.len(), 1);
        assert_eq!(q.all(KEY_PRICE), vec!["100", "500"]);
    }

    #[test]
    fn test_encode_repeats_array_key() {
        let mut q = QueryMap::new();
        q.append_all(KEY_PRICE, vec!["100".to_owned(), "500".to_owned()]);
        assert_eq!(q.encode(), "price=100&price=500");
    }

    #[test]
    fn test_encode_percent_encodes_text() {
        let mut q = QueryMap::new();
        q.append(KEY_GOING_TO, "São Paulo");
        let encoded = q.encode();
        assert!(!encoded.contains(' '), "spaces must be encoded: {encoded}");
        let back = QueryMap::parse(&encoded);
        assert_eq!(back.first(KEY_GOING_TO), Some("São Paulo"));
    }

    #[test]
    fn test_parse_strips_leading_question_mark() {
        let q = QueryMap::parse("?goingTo=Rio&stars=4");
        assert_eq!(q.first(KEY_GOING_TO), Some("Rio"));
        assert_eq!(q.first(KEY_STARS), Some("4"));
    }

    #[test]
    fn test_roundtrip_preserves_values_and_order() {
        let mut q = QueryMap::new();
        q.append(KEY_GOING_TO, "Salvador");
        q.append_all(KEY_PRICE, vec!["100".to_owned(), "500".to_owned()]);
        q.append(KEY_STARS, "4");

        let back = QueryMap::parse(&q.encode());
        assert_eq!(back, q);
    }

    #[test]
    fn test_empty_map_encodes_empty() {
        assert_eq!(QueryMap::new().encode(), "");
        assert!(QueryMap::parse("").is_empty());
    }
}
