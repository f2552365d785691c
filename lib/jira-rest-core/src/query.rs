//! Query parameter serialization.
//!
//! [`QueryParams`] keeps parameters in insertion order. Absent values are
//! remembered but never serialized, booleans become `true`/`false`, and a
//! list produces one `key=value` pair per element.
//!
//! ```
//! use jira_rest_core::QueryParams;
//!
//! let query = QueryParams::new()
//!     .with("groupname", "jira-users")
//!     .with("includeInactiveUsers", true)
//!     .with_opt("startAt", None::<u32>)
//!     .with("expand", vec!["names", "schema"]);
//!
//! assert_eq!(
//!     query.to_query_string(),
//!     "groupname=jira-users&includeInactiveUsers=true&expand=names&expand=schema"
//! );
//! ```

use std::fmt;

use url::form_urlencoded;

use crate::{Result, ToQueryPairs};

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// Text value.
    Str(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean value, serialized as `true` or `false`.
    Bool(bool),
    /// Repeated value: one pair per element, in order.
    List(Vec<QueryValue>),
}

impl QueryValue {
    fn push_strings(&self, out: &mut Vec<String>) {
        match self {
            Self::List(items) => items.iter().for_each(|item| item.push_strings(out)),
            scalar => out.push(scalar.to_string()),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! query_value_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

query_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Int)
    }
}

impl From<usize> for QueryValue {
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Int)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<QueryValue> + Clone> From<&[T]> for QueryValue {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().cloned().map(Into::into).collect())
    }
}

/// Ordered query parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<QueryValue>) {
        self.entries.push((name.into(), Some(value.into())));
    }

    /// Append a parameter that may be absent; `None` is never serialized.
    pub fn insert_opt<V: Into<QueryValue>>(&mut self, name: impl Into<String>, value: Option<V>) {
        self.entries.push((name.into(), value.map(Into::into)));
    }

    /// Chainable form of [`QueryParams::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Chainable form of [`QueryParams::insert_opt`].
    #[must_use]
    pub fn with_opt<V: Into<QueryValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.insert_opt(name, value);
        self
    }

    /// Append every field of a serializable parameter struct.
    ///
    /// Uses `serde_html_form`, so `Vec<T>` fields become repeated keys and
    /// fields skipped by serde (e.g. `skip_serializing_if = "Option::is_none"`)
    /// are omitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized as a flat form.
    pub fn extend_serialize<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        let encoded = serde_html_form::to_string(value)?;
        for (name, value) in form_urlencoded::parse(encoded.as_bytes()) {
            self.insert(name.into_owned(), value.into_owned());
        }
        Ok(())
    }

    /// Build parameters from a serializable parameter struct.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be serialized as a flat form.
    pub fn from_serialize<T: serde::Serialize>(value: &T) -> Result<Self> {
        let mut params = Self::new();
        params.extend_serialize(value)?;
        Ok(params)
    }

    /// Parse a query string (without the leading `?`).
    ///
    /// Every value comes back as [`QueryValue::Str`]; repeated keys stay
    /// separate entries.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let entries = form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .map(|(name, value)| (name.into_owned(), Some(QueryValue::Str(value.into_owned()))))
            .collect();
        Self { entries }
    }

    /// Returns `true` if no parameter would be serialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// Serialize to `application/x-www-form-urlencoded` form.
    ///
    /// An empty set yields an empty string, never a lone `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_query_pairs())
            .finish()
    }
}

impl ToQueryPairs for QueryParams {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            let Some(value) = value else { continue };
            let mut values = Vec::new();
            value.push_strings(&mut values);
            pairs.extend(values.into_iter().map(|v| (name.clone(), v)));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_key(query: &str, key: &str) -> usize {
        form_urlencoded::parse(query.as_bytes())
            .filter(|(k, _)| k == key)
            .count()
    }

    #[test]
    fn empty_params_give_empty_string() {
        assert_eq!(QueryParams::new().to_query_string(), "");
        let only_absent = QueryParams::new().with_opt("startAt", None::<u32>);
        assert_eq!(only_absent.to_query_string(), "");
        assert!(only_absent.is_empty());
    }

    #[test]
    fn absent_values_are_omitted() {
        let query = QueryParams::new()
            .with("query", "john")
            .with_opt("accountId", None::<String>)
            .with_opt("maxResults", Some(50))
            .to_query_string();

        assert_eq!(count_key(&query, "accountId"), 0);
        insta::assert_snapshot!(query, @"query=john&maxResults=50");
    }

    #[test]
    fn booleans_serialize_lowercase() {
        let query = QueryParams::new()
            .with("includeInactiveUsers", false)
            .with("returnTransitions", true)
            .to_query_string();
        insta::assert_snapshot!(query, @"includeInactiveUsers=false&returnTransitions=true");
    }

    #[test]
    fn arrays_repeat_key_in_order() {
        let ids = vec!["10000", "10001", "10002"];
        let query = QueryParams::new()
            .with("id", ids.clone())
            .with("maxResults", 3)
            .to_query_string();

        assert_eq!(count_key(&query, "id"), ids.len());
        let values: Vec<String> = form_urlencoded::parse(query.as_bytes())
            .filter(|(k, _)| k == "id")
            .map(|(_, v)| v.into_owned())
            .collect();
        assert_eq!(values, ids);
    }

    #[test]
    fn empty_array_produces_no_pair() {
        let query = QueryParams::new()
            .with("expand", Vec::<String>::new())
            .to_query_string();
        assert_eq!(query, "");
    }

    #[test]
    fn scalars_are_percent_encoded() {
        let query = QueryParams::new()
            .with("jql", "project = \"SUP\" & status != Done")
            .to_query_string();
        insta::assert_snapshot!(query, @"jql=project+%3D+%22SUP%22+%26+status+%21%3D+Done");
    }

    #[test]
    fn round_trip_preserves_keys_and_multiplicities() {
        let original = QueryParams::new()
            .with("groupId", vec!["a b", "c&d"])
            .with("startAt", 0)
            .with("caseInsensitive", true)
            .with("ratio", 0.5)
            .with_opt("skipped", None::<bool>);

        let parsed = QueryParams::parse(&original.to_query_string());

        let mut expected = original.to_query_pairs();
        let mut actual = parsed.to_query_pairs();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn from_serialize_struct() {
        #[derive(serde::Serialize)]
        #[serde(rename_all = "camelCase")]
        struct BulkGroups {
            group_id: Vec<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            start_at: Option<u32>,
            max_results: u32,
        }

        let params = QueryParams::from_serialize(&BulkGroups {
            group_id: vec!["g1".to_string(), "g2".to_string()],
            start_at: None,
            max_results: 25,
        })
        .expect("serialize");

        let query = params.to_query_string();
        assert_eq!(count_key(&query, "groupId"), 2);
        assert_eq!(count_key(&query, "startAt"), 0);
        assert_eq!(count_key(&query, "maxResults"), 1);
    }

    #[test]
    fn large_unsigned_values_keep_their_digits() {
        let pairs = QueryParams::new().with("id", u64::MAX).to_query_pairs();
        assert_eq!(pairs, vec![("id".to_string(), u64::MAX.to_string())]);
    }

    #[test]
    fn list_display_is_comma_separated() {
        let value = QueryValue::from(vec![1, 2, 3]);
        assert_eq!(value.to_string(), "1,2,3");
    }
}
