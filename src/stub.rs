use crate::{
    error::Error, matchers::Predicate, request::RequestSnapshot, response::Responder,
};
use bytes::Bytes;
use http::{Request, Response, StatusCode};
use std::sync::{Arc, RwLock};

/// A registered predicate→responder pair. Immutable once registered and
/// owned exclusively by the stub.
struct Rule {
    predicate: Predicate,
    responder: Arc<dyn Responder>,
}

/// Programmable replacement for an HTTP client transport.
///
/// Rules are consulted most-recently-registered first, so a later
/// registration overrides an earlier one that would also match the same
/// request. A request no rule matches gets a 404 with an empty body.
///
/// The stub is cheap to clone (clones share the rule list) and safe to
/// dispatch through from many in-flight requests at once. Registration is
/// meant for test setup; registering while dispatches are in flight is
/// memory-safe, but the priority order those dispatches observe is
/// unspecified.
#[derive(Clone, Default)]
pub struct HttpStub {
    rules: Arc<RwLock<Vec<Rule>>>,
}

impl HttpStub {
    pub fn new() -> Self {
        HttpStub::default()
    }

    /// Registers a rule with the highest priority so far.
    pub fn register<R>(&self, predicate: Predicate, responder: R)
    where
        R: Responder + 'static,
    {
        let mut rules = self.rules.write().unwrap();
        tracing::debug!("registering rule with priority over {} existing rule(s)", rules.len());
        rules.insert(
            0,
            Rule {
                predicate,
                responder: Arc::new(responder),
            },
        );
    }

    /// Finds the highest-priority rule whose predicate matches `req` and
    /// produces its response; returns a 404 with no content when nothing
    /// matches.
    ///
    /// Matching runs in a single deterministic pass over the rule list,
    /// newest first, short-circuiting at the first hit. The matched
    /// responder receives the original request untouched (body included),
    /// and any error it raises propagates to the caller; there is no
    /// fallback to lower-priority rules once a responder has been chosen.
    pub async fn dispatch(&self, req: Request<Bytes>) -> Result<Response<Bytes>, Error> {
        let snapshot = RequestSnapshot::from_request(&req);

        // Select under the read lock, await outside of it.
        let responder = {
            let rules = self.rules.read().unwrap();
            rules
                .iter()
                .find(|rule| rule.predicate.matches(&snapshot))
                .map(|rule| Arc::clone(&rule.responder))
        };

        match responder {
            Some(responder) => {
                tracing::debug!(
                    "request {} {} matched a configured rule",
                    snapshot.method(),
                    snapshot.uri()
                );
                responder.respond(req).await
            }
            None => {
                tracing::debug!(
                    "no rule matched request {} {}, returning 404",
                    snapshot.method(),
                    snapshot.uri()
                );
                let mut response = Response::new(Bytes::new());
                *response.status_mut() = StatusCode::NOT_FOUND;
                Ok(response)
            }
        }
    }
}
