use crate::{matchers::Matcher, request::RequestSnapshot};
use http::Method;

/// Exact HTTP method equality.
pub struct MethodMatcher {
    expected: Method,
}

impl MethodMatcher {
    pub fn new(expected: Method) -> Self {
        MethodMatcher { expected }
    }
}

impl Matcher for MethodMatcher {
    fn matches(&self, req: &RequestSnapshot) -> bool {
        req.method() == &self.expected
    }
}
