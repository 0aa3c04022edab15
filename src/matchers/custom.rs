use crate::{matchers::Matcher, request::RequestSnapshot};

/// A caller-supplied condition over the snapshot, for anything the built-in
/// matchers cannot express. The function must be pure.
pub struct FunctionMatcher {
    f: Box<dyn Fn(&RequestSnapshot) -> bool + Send + Sync>,
}

impl FunctionMatcher {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&RequestSnapshot) -> bool + Send + Sync + 'static,
    {
        FunctionMatcher { f: Box::new(f) }
    }
}

impl Matcher for FunctionMatcher {
    fn matches(&self, req: &RequestSnapshot) -> bool {
        (self.f)(req)
    }
}
