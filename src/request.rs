use http::{
    header::{AUTHORIZATION, HOST},
    HeaderMap, Method, Request, Uri,
};

/// Read-only capture of the request parts that matching may look at.
///
/// A snapshot is created once per dispatched request, consumed during
/// matching and discarded afterwards. It clones the method, URI and header
/// map of the request and deliberately never touches the body, so the body
/// stays fully available to the responder of whichever rule matches.
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
}

impl RequestSnapshot {
    pub fn from_request<B>(req: &Request<B>) -> Self {
        RequestSnapshot {
            method: req.method().clone(),
            uri: req.uri().clone(),
            headers: req.headers().clone(),
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Scheme of the request URI, if the URI is in absolute form.
    pub fn scheme(&self) -> Option<&str> {
        self.uri.scheme_str()
    }

    /// Host the request is addressed to. The URI authority takes precedence;
    /// for origin-form requests the `Host` header is consulted instead.
    pub fn host(&self) -> Option<&str> {
        if let Some(host) = self.uri.host() {
            return Some(host);
        }

        self.headers
            .get(HOST)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(':').next().unwrap_or(v))
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Raw query string without the leading `?`, still percent-encoded.
    pub fn query(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Parsed `Authorization` header, or `None` when the header is absent
    /// or not valid UTF-8.
    pub fn authorization(&self) -> Option<Authorization> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;
        Some(Authorization::parse(value))
    }
}

/// An `Authorization` header value split at the first space:
/// `Bearer tok` has scheme `Bearer` and parameter `tok`. A value without a
/// space is a scheme-only credential with no parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authorization {
    scheme: String,
    parameter: Option<String>,
}

impl Authorization {
    pub(crate) fn parse(value: &str) -> Self {
        match value.split_once(' ') {
            Some((scheme, parameter)) => Authorization {
                scheme: scheme.to_string(),
                parameter: Some(parameter.to_string()),
            },
            None => Authorization {
                scheme: value.to_string(),
                parameter: None,
            },
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }
}
