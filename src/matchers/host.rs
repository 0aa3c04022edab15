use crate::{matchers::Matcher, request::RequestSnapshot};

/// Exact host equality against the URI authority (or the `Host` header for
/// origin-form requests). The builder lowercases the registration side via
/// `url::Url`; the request side compares the authority as written, so
/// callers must not rely on case-insensitive host matching.
pub struct HostMatcher {
    expected: String,
}

impl HostMatcher {
    pub fn new(expected: impl Into<String>) -> Self {
        HostMatcher {
            expected: expected.into(),
        }
    }
}

impl Matcher for HostMatcher {
    fn matches(&self, req: &RequestSnapshot) -> bool {
        req.host().is_some_and(|h| h == self.expected)
    }
}
