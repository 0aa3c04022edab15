use crate::{matchers::Matcher, request::RequestSnapshot};

/// Exact path equality after stripping a single leading `/` independently
/// from the expected and the actual path, so `foo` and `/foo` are
/// interchangeable on both the registration and the request side. An empty
/// expected path matches the root path.
pub struct PathMatcher {
    expected: String,
}

impl PathMatcher {
    pub fn new(expected: impl Into<String>) -> Self {
        let expected = expected.into();
        PathMatcher {
            expected: strip_root(&expected).to_string(),
        }
    }
}

impl Matcher for PathMatcher {
    fn matches(&self, req: &RequestSnapshot) -> bool {
        strip_root(req.path()) == self.expected
    }
}

fn strip_root(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}
