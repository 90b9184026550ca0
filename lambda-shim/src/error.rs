//! Decode-path error taxonomy.

use thiserror::Error;

/// Errors surfaced while translating an inbound event into a canonical
/// request.
///
/// All variants are terminal for the invocation: the handler is never
/// invoked once decoding fails, and the error is returned to the
/// invocation caller as a value. The encode path has no error conditions;
/// unclassifiable content falls back to binary-safe base64 instead.
#[derive(Debug, Error)]
pub enum ShimError {
    /// The event path could not be parsed as a URL path component.
    #[error("could not parse request path {path:?}: {source}")]
    PathParse {
        path: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    /// The event body was flagged as base64 but did not decode.
    #[error("could not base64 decode request body: {0}")]
    BodyDecode(#[from] base64::DecodeError),

    /// Any other failure while assembling the canonical request, e.g. an
    /// invalid method or header name.
    #[error("could not construct http request: {0}")]
    RequestConstruction(String),
}
