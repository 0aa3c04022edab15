use crate::{matchers::Matcher, request::RequestSnapshot};
use http::{HeaderName, HeaderValue};

/// Requires the named header (case-insensitive name, as always for HTTP) to
/// carry the expected value among its occurrences. Value comparison is
/// byte-exact.
pub struct HeaderMatcher {
    name: HeaderName,
    expected: HeaderValue,
}

impl HeaderMatcher {
    pub fn new(name: HeaderName, expected: HeaderValue) -> Self {
        HeaderMatcher { name, expected }
    }
}

impl Matcher for HeaderMatcher {
    fn matches(&self, req: &RequestSnapshot) -> bool {
        req.headers()
            .get_all(&self.name)
            .iter()
            .any(|v| v == &self.expected)
    }
}
