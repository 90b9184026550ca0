//! The handler capability boundary.

use bytes::Bytes;
use http::Request;

use crate::response::ResponseWriter;

/// Application code behind the shim.
///
/// A handler consumes one canonical request and writes its response into
/// the supplied [`ResponseWriter`]; no return value crosses the boundary.
/// The shim calls [`serve`](Handler::serve) exactly once per invocation,
/// sequentially with decode and encode.
pub trait Handler {
    fn serve(&self, request: Request<Bytes>, writer: &mut ResponseWriter);
}

impl<F> Handler for F
where
    F: Fn(Request<Bytes>, &mut ResponseWriter),
{
    fn serve(&self, request: Request<Bytes>, writer: &mut ResponseWriter) {
        self(request, writer)
    }
}
