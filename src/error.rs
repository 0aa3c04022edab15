use thiserror::Error;

/// Errors surfaced while configuring the stub or dispatching a request.
///
/// A request that matches no rule is **not** an error; dispatch reports it
/// as a regular 404 response with an empty body.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid query expectation: {0}")]
    InvalidQuery(String),
    #[error("cannot build response: {0}")]
    InvalidResponse(#[from] http::Error),
    #[error("cannot serialize JSON body: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("responder error: {0}")]
    Producer(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an error raised inside a responder so it reaches the caller of
    /// `dispatch` as-is. A match is a commitment: the engine never falls
    /// back to lower-priority rules once a responder has started.
    pub fn producer<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Producer(err.into())
    }
}
