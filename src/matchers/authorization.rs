use crate::{
    matchers::Matcher,
    request::{Authorization, RequestSnapshot},
};

/// Refinement over the parsed `Authorization` header.
///
/// The exact form requires the header to be present with the given scheme
/// and parameter, compared case-sensitively; an absent header never matches.
/// The function form hands the parsed header to a caller-supplied decision
/// function, with `None` as an explicit "absent" marker — absence is for the
/// function to judge, not an automatic failure.
pub struct AuthorizationMatcher {
    kind: Kind,
}

enum Kind {
    Exact {
        scheme: String,
        parameter: String,
    },
    Matching(Box<dyn Fn(Option<&Authorization>) -> bool + Send + Sync>),
}

impl AuthorizationMatcher {
    pub fn exact(scheme: impl Into<String>, parameter: impl Into<String>) -> Self {
        AuthorizationMatcher {
            kind: Kind::Exact {
                scheme: scheme.into(),
                parameter: parameter.into(),
            },
        }
    }

    pub fn matching<F>(f: F) -> Self
    where
        F: Fn(Option<&Authorization>) -> bool + Send + Sync + 'static,
    {
        AuthorizationMatcher {
            kind: Kind::Matching(Box::new(f)),
        }
    }
}

impl Matcher for AuthorizationMatcher {
    fn matches(&self, req: &RequestSnapshot) -> bool {
        let auth = req.authorization();
        match &self.kind {
            Kind::Exact { scheme, parameter } => auth.is_some_and(|a| {
                a.scheme() == scheme && a.parameter() == Some(parameter.as_str())
            }),
            Kind::Matching(f) => f(auth.as_ref()),
        }
    }
}
