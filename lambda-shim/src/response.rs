//! Response capture: the write sink handed to handlers.

use bytes::{Bytes, BytesMut};
use http::header::IntoHeaderName;
use http::{HeaderMap, HeaderValue, StatusCode};

/// Records everything a handler emits for one invocation.
///
/// The status is fixed by the first body write or the first explicit
/// [`set_status`](ResponseWriter::set_status) call, whichever happens
/// first; a write with no status yet set fixes it to 200. Headers stay
/// mutable until encoding begins, and the body is append-only. There is
/// no close: the capture is final once the handler returns.
///
/// A writer is single-use — one per invocation, one writer (the handler),
/// one reader (the encoder).
#[derive(Debug, Default)]
pub struct ResponseWriter {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: BytesMut,
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured status, or `None` if nothing fixed it yet.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Fix the response status. Ignored once the status is already fixed,
    /// whether by an earlier call or by a body write.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status.get_or_insert(status);
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Set a header, replacing any previous values for the key.
    pub fn set_header<K: IntoHeaderName>(&mut self, name: K, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Add a header value, keeping any previous values for the key.
    pub fn add_header<K: IntoHeaderName>(&mut self, name: K, value: HeaderValue) {
        self.headers.append(name, value);
    }

    /// Append bytes to the response body, fixing the status to 200 if it
    /// is not fixed yet.
    pub fn write(&mut self, data: &[u8]) {
        if self.status.is_none() {
            self.status = Some(StatusCode::OK);
        }
        self.body.extend_from_slice(data);
    }

    /// The body bytes captured so far.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the capture for encoding.
    pub fn into_parts(self) -> (Option<StatusCode>, HeaderMap, Bytes) {
        (self.status, self.headers, self.body.freeze())
    }
}

impl std::io::Write for ResponseWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        ResponseWriter::write(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
