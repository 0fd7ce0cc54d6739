use std::collections::BTreeMap;

use crate::util;

/// Where query or body parameters of a request come from.
///
/// Callers either hand over a pre-encoded query string or a key/value map;
/// both are resolved into the same ordered list of pairs before signing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamSource {
    RawQueryString(String),
    ParamMap(BTreeMap<String, String>),
}

impl Default for ParamSource {
    fn default() -> Self {
        ParamSource::ParamMap(BTreeMap::new())
    }
}

impl ParamSource {
    /// Resolve into decoded `(key, value)` pairs.
    ///
    /// Raw strings are decoded with standard query-string rules; maps yield
    /// their entries in key order.
    pub fn resolve(&self) -> Vec<(String, String)> {
        match self {
            ParamSource::RawQueryString(query) => util::query_to_pairs(query),
            ParamSource::ParamMap(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ParamSource::RawQueryString(query) => util::query_to_pairs(query).is_empty(),
            ParamSource::ParamMap(map) => map.is_empty(),
        }
    }

    /// Remove `key` from a map source. Raw strings are left untouched.
    pub(crate) fn take(&mut self, key: &str) -> Option<String> {
        match self {
            ParamSource::RawQueryString(_) => None,
            ParamSource::ParamMap(map) => map.remove(key),
        }
    }
}

impl<'a> From<&'a str> for ParamSource {
    fn from(s: &'a str) -> Self {
        ParamSource::RawQueryString(s.into())
    }
}

impl From<String> for ParamSource {
    fn from(s: String) -> Self {
        ParamSource::RawQueryString(s)
    }
}

impl From<BTreeMap<String, String>> for ParamSource {
    fn from(map: BTreeMap<String, String>) -> Self {
        ParamSource::ParamMap(map)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ParamSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        ParamSource::ParamMap(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
