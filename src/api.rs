//! Builder layer that turns high-level matching descriptions into a
//! [`Predicate`] plus a [`Responder`] and registers the pair on the stub.
//!
//! This layer only translates and composes; all matching semantics live in
//! [`crate::matchers`], and the engine never sees these caller-facing
//! shapes. Invalid caller input (unparseable host addresses, malformed
//! header names, non-object JSON query expectations) fails fast with a
//! panic at registration time, never silently.

use crate::{
    error::Error,
    matchers::{
        AuthorizationMatcher, FunctionMatcher, HeaderMatcher, HostMatcher, IntoQueryValues,
        Matcher, MethodMatcher, PathMatcher, Predicate, QueryMatcher, QueryValues, SchemeMatcher,
    },
    request::{Authorization, RequestSnapshot},
    response::{Responder, ResponderFn, StubResponse, APPLICATION_JSON_UTF8},
    stub::HttpStub,
};
use bytes::Bytes;
use http::{HeaderName, HeaderValue, Method, Request, Response, StatusCode};
use serde::Serialize;
use std::{fmt, future::Future};
use url::Url;

impl HttpStub {
    /// Starts a GET rule for the given host address, e.g.
    /// `https://api.example.com`. The clause starts out requiring an empty
    /// path and no query parameters at all; use [`RequestClause::path`] and
    /// [`RequestClause::query`] to expect more.
    ///
    /// # Panics
    ///
    /// Panics when `host_address` is not an absolute URL with a host.
    pub fn get(&self, host_address: &str) -> RequestClause<'_> {
        self.request(Method::GET, host_address)
    }

    /// Starts a rule for an arbitrary HTTP method. See [`HttpStub::get`].
    pub fn request(&self, method: Method, host_address: &str) -> RequestClause<'_> {
        let url = Url::parse(host_address).expect("host address is not a valid absolute URL");
        let host = url.host_str().expect("host address has no host part");

        let predicate = Predicate::any()
            .and(MethodMatcher::new(method))
            .and(SchemeMatcher::new(url.scheme()))
            .and(HostMatcher::new(host));

        RequestClause {
            stub: self,
            predicate,
            path: String::new(),
            query: QueryValues::new(),
        }
    }
}

/// One rule under construction: criteria accumulate, and a `respond*` call
/// freezes them into a predicate and registers the rule.
///
/// Every criteria method consumes the clause and returns a new one, and
/// predicate refinements AND onto what is already there, so a clause can be
/// specialized step by step without ever disturbing rules registered
/// earlier. Applying [`authorization`](RequestClause::authorization) or
/// [`authorization_matching`](RequestClause::authorization_matching) more
/// than once simply composes all the conditions.
pub struct RequestClause<'a> {
    stub: &'a HttpStub,
    predicate: Predicate,
    path: String,
    query: QueryValues,
}

impl<'a> RequestClause<'a> {
    /// Sets the expected path. A leading `/` is optional on both sides:
    /// `foo` and `/foo` register and match interchangeably.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the expected query parameters, exactly: the request must carry
    /// these names with these values and nothing else. Accepts pair
    /// collections and flat JSON objects (arrays become multi-values):
    ///
    /// ```
    /// # use httpstub::HttpStub;
    /// # let stub = HttpStub::new();
    /// stub.get("https://api.example.com")
    ///     .query(serde_json::json!({ "page": 2, "tag": ["a", "b"] }))
    ///     .respond_status(http::StatusCode::NO_CONTENT);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when a JSON expectation is not a flat object of scalars and
    /// arrays of scalars.
    pub fn query<Q: IntoQueryValues>(mut self, query: Q) -> Self {
        self.query = query.into_query_values().expect("invalid query expectation");
        self
    }

    /// Additionally requires the request to carry `name: value` among its
    /// headers.
    ///
    /// # Panics
    ///
    /// Panics when `name` or `value` is not a valid header name or value.
    pub fn header(self, name: &str, value: &str) -> Self {
        let name: HeaderName = name.parse().expect("invalid header name");
        let value: HeaderValue = value.parse().expect("invalid header value");
        self.and(HeaderMatcher::new(name, value))
    }

    /// Requires an `Authorization` header with exactly this scheme and
    /// parameter, compared case-sensitively. An absent header never matches.
    pub fn authorization(self, scheme: &str, parameter: &str) -> Self {
        self.and(AuthorizationMatcher::exact(scheme, parameter))
    }

    /// Hands the parsed `Authorization` header to `f`. An absent header is
    /// passed as `None` and is for `f` alone to judge, not an automatic
    /// mismatch.
    pub fn authorization_matching<F>(self, f: F) -> Self
    where
        F: Fn(Option<&Authorization>) -> bool + Send + Sync + 'static,
    {
        self.and(AuthorizationMatcher::matching(f))
    }

    /// ANDs an arbitrary snapshot condition onto the clause.
    pub fn matching<F>(self, f: F) -> Self
    where
        F: Fn(&RequestSnapshot) -> bool + Send + Sync + 'static,
    {
        self.and(FunctionMatcher::new(f))
    }

    fn and<M: Matcher + 'static>(mut self, matcher: M) -> Self {
        self.predicate = self.predicate.and(matcher);
        self
    }

    /// Freezes the criteria and registers the rule with the given responder.
    pub fn respond<R: Responder + 'static>(self, responder: R) {
        let RequestClause {
            stub,
            predicate,
            path,
            query,
        } = self;
        let predicate = predicate
            .and(PathMatcher::new(path))
            .and(QueryMatcher::new(query));
        stub.register(predicate, responder);
    }

    /// Registers a fixed status code with an empty body.
    ///
    /// # Panics
    ///
    /// Panics when `status` is not a valid HTTP status code.
    pub fn respond_status<S>(self, status: S)
    where
        S: TryInto<StatusCode>,
        <S as TryInto<StatusCode>>::Error: fmt::Debug,
    {
        let status = status.try_into().expect("invalid status code");
        self.respond(StubResponse::status(status));
    }

    /// Registers a prebuilt response template.
    pub fn respond_response(self, response: StubResponse) {
        self.respond(response);
    }

    /// Registers a 200 response with `value` serialized as JSON and
    /// `content-type: application/json; charset=utf-8`.
    ///
    /// # Panics
    ///
    /// Panics when `value` cannot be serialized to JSON.
    pub fn respond_json<T: Serialize + ?Sized>(self, value: &T) {
        let response = StubResponse::json(value).expect("cannot serialize JSON response body");
        self.respond(response);
    }

    /// Registers a 200 response carrying `content` with the given content
    /// type, byte for byte.
    ///
    /// # Panics
    ///
    /// Panics when `content_type` is not a valid header value.
    pub fn respond_bytes(self, content_type: &str, content: impl Into<Bytes>) {
        let content_type: HeaderValue = content_type.parse().expect("invalid content type");
        self.respond(StubResponse::bytes(content_type, content));
    }

    /// Registers a 200 response carrying already-serialized JSON bytes with
    /// `content-type: application/json; charset=utf-8`.
    pub fn respond_json_bytes(self, content: impl Into<Bytes>) {
        self.respond(StubResponse::bytes(
            HeaderValue::from_static(APPLICATION_JSON_UTF8),
            content,
        ));
    }

    /// Registers a synchronous response function. It receives the original
    /// request, body included, and its errors propagate to the dispatch
    /// caller.
    pub fn respond_with<F>(self, f: F)
    where
        F: Fn(Request<Bytes>) -> Result<Response<Bytes>, Error> + Send + Sync + 'static,
    {
        self.respond(ResponderFn::new(move |req| std::future::ready(f(req))));
    }

    /// Registers an asynchronous response function; the engine awaits it
    /// exactly once per matched request.
    pub fn respond_with_future<F, Fut>(self, f: F)
    where
        F: Fn(Request<Bytes>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, Error>> + Send + 'static,
    {
        self.respond(ResponderFn::new(f));
    }
}
