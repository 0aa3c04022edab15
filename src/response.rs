use crate::error::Error;
use async_trait::async_trait;
use bytes::Bytes;
use http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, Request, Response, StatusCode};
use serde::Serialize;
use std::future::Future;

pub(crate) const APPLICATION_JSON_UTF8: &str = "application/json; charset=utf-8";

/// Produces the response for a matched rule.
///
/// The responder receives the original request, body included, so it may
/// inspect everything the matching stage deliberately did not. Immediate
/// and deferred production go through the same async seam; a known-ahead
/// response is simply a responder that resolves right away.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, req: Request<Bytes>) -> Result<Response<Bytes>, Error>;
}

/// A reusable response template: status, headers and body.
///
/// `http::Response` is not `Clone`, so rules keep a template and stamp out
/// a fresh response per dispatch. The template reproduces exactly the status
/// and headers it was built with; the JSON constructor is the only place
/// where any serialization happens.
#[derive(Debug, Clone)]
pub struct StubResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl StubResponse {
    /// A response with the given status and an empty body.
    pub fn status(status: StatusCode) -> Self {
        StubResponse {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// A 200 response carrying `value` serialized as JSON with
    /// `content-type: application/json; charset=utf-8`.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        let body = serde_json::to_vec(value)?;
        Ok(StubResponse::bytes(
            HeaderValue::from_static(APPLICATION_JSON_UTF8),
            body,
        ))
    }

    /// A 200 response carrying raw bytes with the given content type.
    pub fn bytes(content_type: HeaderValue, content: impl Into<Bytes>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, content_type);
        StubResponse {
            status: StatusCode::OK,
            headers,
            body: content.into(),
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Builds a fresh `http::Response` from the template.
    pub fn to_response(&self) -> Response<Bytes> {
        let mut response = Response::new(self.body.clone());
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers.clone();
        response
    }
}

#[async_trait]
impl Responder for StubResponse {
    async fn respond(&self, _req: Request<Bytes>) -> Result<Response<Bytes>, Error> {
        Ok(self.to_response())
    }
}

/// Adapter turning a response function into a [`Responder`]. The function
/// may return a ready result (wrapped in `std::future::ready`) or a real
/// future; the engine treats both the same.
pub struct ResponderFn<F>(F);

impl<F> ResponderFn<F> {
    pub fn new(f: F) -> Self {
        ResponderFn(f)
    }
}

#[async_trait]
impl<F, Fut> Responder for ResponderFn<F>
where
    F: Fn(Request<Bytes>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response<Bytes>, Error>> + Send + 'static,
{
    async fn respond(&self, req: Request<Bytes>) -> Result<Response<Bytes>, Error> {
        (self.0)(req).await
    }
}
