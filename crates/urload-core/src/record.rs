//! The URL record held in the working list.
//!
//! A record is a URL plus the request headers to send when fetching it
//! (typically a `Referer` set by link/image extraction). Records are values:
//! commands never mutate one in place, they build a new list instead.

use std::collections::BTreeMap;

/// Header name attached to records derived from a fetched page.
pub const REFERER: &str = "Referer";

/// One URL in the working list.
///
/// Equality and hashing cover both the URL text and the full header set.
/// Headers are kept in a sorted map, so two records built with the same
/// headers in a different insertion order compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UrlRecord {
    /// Literal URL text. Never validated as a well-formed URI.
    pub url: String,
    /// Extra request headers (empty means "no metadata").
    pub headers: BTreeMap<String, String>,
}

impl UrlRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Record for a URL discovered on `page`, carrying `page` as its referrer.
    pub fn with_referer(url: impl Into<String>, page: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(REFERER.to_string(), page.into());
        Self {
            url: url.into(),
            headers,
        }
    }

    pub fn with_headers(url: impl Into<String>, headers: BTreeMap<String, String>) -> Self {
        Self {
            url: url.into(),
            headers,
        }
    }

    pub fn referer(&self) -> Option<&str> {
        self.headers.get(REFERER).map(String::as_str)
    }
}

impl std::fmt::Display for UrlRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(r: &UrlRecord) -> u64 {
        let mut h = DefaultHasher::new();
        r.hash(&mut h);
        h.finish()
    }

    #[test]
    fn equality_ignores_header_insertion_order() {
        let mut a = BTreeMap::new();
        a.insert("X-Test".to_string(), "1".to_string());
        a.insert("Referer".to_string(), "http://ref".to_string());
        let mut b = BTreeMap::new();
        b.insert("Referer".to_string(), "http://ref".to_string());
        b.insert("X-Test".to_string(), "1".to_string());

        let ra = UrlRecord::with_headers("http://a", a);
        let rb = UrlRecord::with_headers("http://a", b);
        assert_eq!(ra, rb);
        assert_eq!(hash_of(&ra), hash_of(&rb));
    }

    #[test]
    fn headers_take_part_in_equality() {
        let plain = UrlRecord::new("http://a/img.png");
        let referred = UrlRecord::with_referer("http://a/img.png", "http://a/");
        assert_ne!(plain, referred);
        assert_eq!(referred.referer(), Some("http://a/"));
        assert_eq!(plain.referer(), None);
    }

    #[test]
    fn default_record_has_no_headers() {
        let r = UrlRecord::new("https://example.com");
        assert!(r.headers.is_empty());
        assert_eq!(r.to_string(), "https://example.com");
    }
}
