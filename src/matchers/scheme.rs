use crate::{matchers::Matcher, request::RequestSnapshot};

/// Exact scheme equality. The builder normalizes the registration side
/// through `url::Url` (lowercased); the request side compares whatever its
/// URI parser preserved. Nothing beyond parser normalization is guaranteed.
pub struct SchemeMatcher {
    expected: String,
}

impl SchemeMatcher {
    pub fn new(expected: impl Into<String>) -> Self {
        SchemeMatcher {
            expected: expected.into(),
        }
    }
}

impl Matcher for SchemeMatcher {
    fn matches(&self, req: &RequestSnapshot) -> bool {
        req.scheme().is_some_and(|s| s == self.expected)
    }
}
