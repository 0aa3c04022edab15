//! `httpstub` is an in-process, programmable stand-in for an HTTP client
//! transport: tests register predicate→response rules on an [`HttpStub`],
//! wire the stub in where the real transport would sit, and every request
//! dispatched through it is answered by the highest-priority matching rule
//! — or by a plain 404 with an empty body when nothing matches.
//!
//! Rules are consulted most-recently-registered first. That makes overriding
//! natural: register a broad rule early and a narrower one later (or a
//! catch-all first and specializations afterwards), and the later
//! registration wins whenever both would match.
//!
//! Matching looks only at an immutable [`RequestSnapshot`] of the request
//! (method, URI, headers) and never reads the body, so the responder of the
//! matching rule still receives the original request intact. There is no
//! network, no server and no connection handling involved; dispatch is an
//! ordinary async function call.
//!
//! # Example
//!
//! ```rust
//! use httpstub::prelude::*;
//! use bytes::Bytes;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Error> {
//! let stub = HttpStub::new();
//!
//! stub.get("https://api.example.com")
//!     .path("users/42")
//!     .respond_json(&serde_json::json!({ "id": 42, "name": "Hans" }));
//!
//! let request = http::Request::builder()
//!     .method("GET")
//!     .uri("https://api.example.com/users/42")
//!     .body(Bytes::new())?;
//!
//! let response = stub.dispatch(request).await?;
//! assert_eq!(response.status(), StatusCode::OK);
//!
//! // No rule matches this host, so the stub answers 404 with no content.
//! let request = http::Request::builder()
//!     .method("GET")
//!     .uri("https://other.example.com/users/42")
//!     .body(Bytes::new())?;
//! assert_eq!(stub.dispatch(request).await?.status(), StatusCode::NOT_FOUND);
//! # Ok(())
//! # }
//! ```
//!
//! Query expectations are exact: the request must carry exactly the expected
//! parameter names and values (in any parameter order), and a rule that
//! expects no query only matches requests without one.
//!
//! # Logging
//!
//! `httpstub` logs registration and match decisions through [`tracing`]
//! (with the `log` compatibility feature enabled), at debug level. In tests
//! with `env_logger`, call `let _ = env_logger::try_init();` and set
//! `RUST_LOG=httpstub=debug` to see them.

mod api;
mod error;
pub mod matchers;
mod request;
mod response;
mod stub;

pub use api::RequestClause;
pub use error::Error;
pub use request::{Authorization, RequestSnapshot};
pub use response::{Responder, ResponderFn, StubResponse};
pub use stub::HttpStub;

// The http verb and status types used throughout the public API.
pub use http::{Method, StatusCode};

pub mod prelude {
    pub use crate::{Error, HttpStub, Method, Responder, StatusCode, StubResponse};
}
