//! # lambda-shim
//!
//! Run ordinary request/response handlers behind a serverless gateway.
//!
//! The shim translates gateway event envelopes into canonical
//! [`http::Request`] values, hands them to your [`Handler`] together with
//! a [`ResponseWriter`] sink, and converts whatever the handler writes
//! back into the envelope the gateway expects — header folding, default
//! content-type sniffing, and binary/base64 handling included. It never
//! owns a socket: each invocation is one pure, single-shot
//! transformation.
//!
//! Both gateway dialects are supported: the REST-proxy (v1) payload and
//! the HTTP-API (v2) payload with its separate cookie list.
//!
//! ```
//! use lambda_shim::{ApiGatewayProxyRequest, ResponseWriter, Shim};
//! use tokio_util::sync::CancellationToken;
//!
//! let shim = Shim::new(|_req, writer: &mut ResponseWriter| {
//!     writer.write(b"hello, world");
//! });
//!
//! let event = ApiGatewayProxyRequest {
//!     http_method: "GET".into(),
//!     path: "/hello".into(),
//!     ..Default::default()
//! };
//!
//! let resp = shim
//!     .handle_rest_api_request(event, CancellationToken::new())
//!     .unwrap();
//! assert_eq!(resp.status_code, 200);
//! assert_eq!(resp.body, "hello, world");
//! ```

pub mod dialect;
pub mod encode;
pub mod error;
pub mod handler;
pub mod log;
pub mod request;
pub mod response;
mod shim;

pub use error::ShimError;
pub use handler::Handler;
pub use log::{Log, NoopLog, TracingLog};
pub use request::{ConnectionInfo, REQUEST_ID_HEADER};
pub use response::ResponseWriter;
pub use shim::{Shim, ShimConfig};

// The envelope types come along so applications only import one crate.
pub use lambda_shim_core::{
    ApiGatewayProxyRequest, ApiGatewayProxyResponse, ApiGatewayV2HttpRequest,
    ApiGatewayV2HttpResponse,
};
