//! # Query
//!
//! The dashboard's node-name and status filters, and how they are read from
//! page parameters.

use crate::constants::query_params;
use serde::{Deserialize, Serialize};

/// User-controlled query over the instance listing
///
/// A `Query` is never edited in place: each edit produces a new value that
/// replaces the previous one in the view-model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    /// Case-insensitive node name prefix; empty matches every node
    pub name_filter: String,
    /// Exact check status an instance must have at least once; empty matches all
    pub status_filter: String,
}

impl Query {
    pub fn new(name_filter: impl Into<String>, status_filter: impl Into<String>) -> Self {
        Self {
            name_filter: name_filter.into(),
            status_filter: status_filter.into(),
        }
    }

    pub fn with_name_filter(&self, name_filter: impl Into<String>) -> Self {
        Self {
            name_filter: name_filter.into(),
            status_filter: self.status_filter.clone(),
        }
    }

    pub fn with_status_filter(&self, status_filter: impl Into<String>) -> Self {
        Self {
            name_filter: self.name_filter.clone(),
            status_filter: status_filter.into(),
        }
    }

    /// True when neither filter constrains the listing
    pub fn is_empty(&self) -> bool {
        self.name_filter.is_empty() && self.status_filter.is_empty()
    }

    /// Build a query from page parameters (`s` and `status`).
    ///
    /// Unknown keys are ignored and the last occurrence of a key wins.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        params
            .into_iter()
            .fold(Self::default(), |mut query, (key, value)| {
                match key.as_ref() {
                    query_params::NAME_FILTER => query.name_filter = value.into(),
                    query_params::STATUS_FILTER => query.status_filter = value.into(),
                    _ => {}
                }
                query
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_empty() {
        let query = Query::default();
        assert_eq!(query.name_filter, "");
        assert_eq!(query.status_filter, "");
        assert!(query.is_empty());
    }

    #[test]
    fn test_edits_produce_new_values() {
        let original = Query::new("node", "");
        let edited = original.with_status_filter("critical");

        assert_eq!(original, Query::new("node", ""));
        assert_eq!(edited, Query::new("node", "critical"));
        assert_eq!(edited.with_name_filter(""), Query::new("", "critical"));
    }

    #[test]
    fn test_from_params() {
        let query = Query::from_params([("s", "web"), ("status", "warning"), ("page", "2")]);
        assert_eq!(query, Query::new("web", "warning"));

        let query = Query::from_params([("s", "a"), ("s", "b")]);
        assert_eq!(query, Query::new("b", ""));

        let query = Query::from_params(Vec::<(String, String)>::new());
        assert!(query.is_empty());
    }

    #[test]
    fn test_partial_deserialization_defaults() {
        let query: Query = serde_json::from_str(r#"{"status_filter": "passing"}"#).unwrap();
        assert_eq!(query, Query::new("", "passing"));
    }
}
