//! Query-string lookup abstraction.
//!
//! The resolver only needs "the string value for a named key". Hosts plug in
//! whatever they already have: a parsed map, a list of pairs, or a request URI.

use std::collections::{BTreeMap, HashMap};

use axum::extract::Query;
use axum::http::Uri;
use tracing::debug;

/// Read access to request query parameters.
pub trait QuerySource {
    /// Value for `key`, or `None` when the key is absent.
    fn query_value(&self, key: &str) -> Option<&str>;
}

impl<Q: QuerySource + ?Sized> QuerySource for &Q {
    fn query_value(&self, key: &str) -> Option<&str> {
        (**self).query_value(key)
    }
}

impl<S: std::hash::BuildHasher> QuerySource for HashMap<String, String, S> {
    fn query_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl QuerySource for BTreeMap<String, String> {
    fn query_value(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// First matching pair wins, like an HTTP query getter.
impl<K: AsRef<str>, V: AsRef<str>> QuerySource for [(K, V)] {
    fn query_value(&self, key: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> QuerySource for Vec<(K, V)> {
    fn query_value(&self, key: &str) -> Option<&str> {
        self.as_slice().query_value(key)
    }
}

/// Percent-decoded query pairs in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// Decode the query component of `uri`.
    ///
    /// A query that cannot be decoded is treated as empty, which in turn
    /// makes every pagination parameter fall back to its default.
    pub fn from_uri(uri: &Uri) -> Self {
        match Query::<Vec<(String, String)>>::try_from_uri(uri) {
            Ok(Query(pairs)) => Self(pairs),
            Err(e) => {
                debug!(%uri, error = %e, "undecodable query string, ignoring");
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(String, String)>> for QueryPairs {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl QuerySource for QueryPairs {
    fn query_value(&self, key: &str) -> Option<&str> {
        self.0.query_value(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_return_first_match() {
        let pairs = vec![("page", "2"), ("limit", "10"), ("page", "9")];
        assert_eq!(pairs.query_value("page"), Some("2"));
        assert_eq!(pairs.query_value("limit"), Some("10"));
        assert_eq!(pairs.query_value("sort"), None);
    }

    #[test]
    fn maps_lookup_by_key() {
        let mut map = HashMap::new();
        map.insert("page".to_string(), "3".to_string());
        assert_eq!(map.query_value("page"), Some("3"));
        assert_eq!(map.query_value("limit"), None);

        let tree: BTreeMap<String, String> = [("limit".to_string(), "7".to_string())].into();
        assert_eq!(tree.query_value("limit"), Some("7"));
    }

    #[test]
    fn uri_query_is_decoded() {
        let uri: Uri = "/items?page=4&limit=25&q=a%20b".parse().unwrap();
        let pairs = QueryPairs::from_uri(&uri);
        assert_eq!(pairs.query_value("page"), Some("4"));
        assert_eq!(pairs.query_value("limit"), Some("25"));
        assert_eq!(pairs.query_value("q"), Some("a b"));
    }

    #[test]
    fn uri_without_query_is_empty() {
        let uri: Uri = "/items".parse().unwrap();
        assert!(QueryPairs::from_uri(&uri).is_empty());
    }

    #[test]
    fn empty_value_is_present_but_blank() {
        let uri: Uri = "/items?page=&limit=5".parse().unwrap();
        let pairs = QueryPairs::from_uri(&uri);
        assert_eq!(pairs.query_value("page"), Some(""));
    }
}
