use crate::{error::Error, matchers::Matcher, request::RequestSnapshot};
use serde_json::Value;
use std::collections::BTreeMap;

/// A query parameter set: parameter name mapped to an ordered multi-value.
///
/// A repeated parameter (`value=1&value=2`) becomes one name carrying two
/// values in appearance order. A single scalar is a one-element multi-value,
/// so a scalar expectation never matches a request that repeats the name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryValues {
    values: BTreeMap<String, Vec<String>>,
}

impl QueryValues {
    pub fn new() -> Self {
        QueryValues::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends one value to the multi-value of `name`.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Parses a raw query string, percent-decoding names and values. The
    /// parse is lenient: pairs that fail to decode cleanly are decoded
    /// lossily rather than failing the whole string, so a malformed query
    /// degrades to whatever parses instead of breaking dispatch.
    pub(crate) fn parse(raw: &str) -> Self {
        let mut values = QueryValues::new();
        for (name, value) in form_urlencoded::parse(raw.as_bytes()) {
            values.append(name, value);
        }
        values
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = QueryValues::new();
        for (name, value) in iter {
            values.append(name, value);
        }
        values
    }
}

/// Builds a query expectation from a flat JSON object: scalar values become
/// single-element multi-values, arrays of scalars become multi-values in
/// array order. This is the JSON analog of passing a dictionary or an
/// anonymous record of expected parameters.
impl TryFrom<&Value> for QueryValues {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Error> {
        let map = value.as_object().ok_or_else(|| {
            Error::InvalidQuery("query expectation must be a JSON object".into())
        })?;

        let mut values = QueryValues::new();
        for (name, value) in map {
            match value {
                Value::Array(items) => {
                    for item in items {
                        values.append(name.clone(), scalar(item)?);
                    }
                }
                other => values.append(name.clone(), scalar(other)?),
            }
        }
        Ok(values)
    }
}

fn scalar(value: &Value) -> Result<String, Error> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(Error::InvalidQuery(
            "query values must be scalars or arrays of scalars".into(),
        )),
    }
}

/// Conversions the builder layer accepts as query expectations.
pub trait IntoQueryValues {
    fn into_query_values(self) -> Result<QueryValues, Error>;
}

impl IntoQueryValues for QueryValues {
    fn into_query_values(self) -> Result<QueryValues, Error> {
        Ok(self)
    }
}

impl IntoQueryValues for Value {
    fn into_query_values(self) -> Result<QueryValues, Error> {
        QueryValues::try_from(&self)
    }
}

impl IntoQueryValues for &Value {
    fn into_query_values(self) -> Result<QueryValues, Error> {
        QueryValues::try_from(self)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> IntoQueryValues for [(K, V); N] {
    fn into_query_values(self) -> Result<QueryValues, Error> {
        Ok(self.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<String>> IntoQueryValues for Vec<(K, V)> {
    fn into_query_values(self) -> Result<QueryValues, Error> {
        Ok(self.into_iter().collect())
    }
}

/// Exact query equality: the request must carry exactly the expected
/// parameter names, and for each name exactly the expected multi-value.
/// An extra or a missing parameter fails the match, and an empty
/// expectation requires the request to carry no query parameters at all.
///
/// Parameter order in the raw query string is irrelevant; the order of
/// repeated values for one name is significant.
pub struct QueryMatcher {
    expected: QueryValues,
}

impl QueryMatcher {
    pub fn new(expected: QueryValues) -> Self {
        QueryMatcher { expected }
    }
}

impl Matcher for QueryMatcher {
    fn matches(&self, req: &RequestSnapshot) -> bool {
        let actual = req.query().map(QueryValues::parse).unwrap_or_default();
        actual == self.expected
    }
}
