//! Matching primitives: the [`Matcher`] trait, the AND-composed
//! [`Predicate`], and one concrete matcher per request attribute.

mod authorization;
mod custom;
mod header;
mod host;
mod method;
mod path;
mod query;
mod scheme;

pub use authorization::AuthorizationMatcher;
pub use custom::FunctionMatcher;
pub use header::HeaderMatcher;
pub use host::HostMatcher;
pub use method::MethodMatcher;
pub use path::PathMatcher;
pub use query::{IntoQueryValues, QueryMatcher, QueryValues};
pub use scheme::SchemeMatcher;

use crate::request::RequestSnapshot;
use std::sync::Arc;

/// A single matching criterion over a request snapshot.
///
/// Implementations must be pure: no side effects, and no access to anything
/// beyond the snapshot (in particular not the request body).
pub trait Matcher: Send + Sync {
    fn matches(&self, req: &RequestSnapshot) -> bool;
}

/// An AND-composition of matchers.
///
/// Composition is an explicit list append on a clone: [`Predicate::and`]
/// returns a new predicate and leaves the original untouched, so a predicate
/// captured by an already registered rule can never be affected by deriving
/// further predicates from it.
#[derive(Clone, Default)]
pub struct Predicate {
    conditions: Vec<Arc<dyn Matcher>>,
}

impl Predicate {
    /// A predicate with no conditions. Matches every request, which makes it
    /// both the neutral element for [`and`](Predicate::and) and a usable
    /// catch-all when registered directly.
    pub fn any() -> Self {
        Predicate::default()
    }

    /// Returns a new predicate requiring `matcher` in addition to every
    /// existing condition.
    pub fn and<M: Matcher + 'static>(&self, matcher: M) -> Self {
        let mut conditions = self.conditions.clone();
        conditions.push(Arc::new(matcher));
        Predicate { conditions }
    }

    /// True when every condition holds for the snapshot.
    pub fn matches(&self, req: &RequestSnapshot) -> bool {
        self.conditions.iter().all(|m| m.matches(req))
    }
}
