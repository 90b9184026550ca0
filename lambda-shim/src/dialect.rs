//! Dialect selection: one decode/encode capability pair per envelope
//! format.
//!
//! The REST-proxy and HTTP-API envelopes share the decode → invoke →
//! encode skeleton but differ in query-string source and cookie handling.
//! Each difference lives in a [`Dialect`] implementation; the entry
//! points pick one, and shared logic never branches on a type tag.

use bytes::Bytes;
use http::Request;
use lambda_shim_core::{
    ApiGatewayProxyRequest, ApiGatewayProxyResponse, ApiGatewayV2HttpRequest,
    ApiGatewayV2HttpResponse,
};
use tokio_util::sync::CancellationToken;

use crate::encode::{into_http_api_response, into_rest_proxy_response};
use crate::error::ShimError;
use crate::request::{from_http_api_event, from_rest_proxy_event};
use crate::response::ResponseWriter;

/// How one gateway dialect decodes its inbound event and encodes its
/// outbound envelope.
pub trait Dialect {
    type Event;
    type Response;

    fn decode(event: Self::Event, cancel: CancellationToken)
    -> Result<Request<Bytes>, ShimError>;

    fn encode(writer: ResponseWriter) -> Self::Response;
}

/// The REST-proxy (v1) dialect.
pub struct RestProxy;

impl Dialect for RestProxy {
    type Event = ApiGatewayProxyRequest;
    type Response = ApiGatewayProxyResponse;

    fn decode(
        event: Self::Event,
        cancel: CancellationToken,
    ) -> Result<Request<Bytes>, ShimError> {
        from_rest_proxy_event(event, cancel)
    }

    fn encode(writer: ResponseWriter) -> Self::Response {
        into_rest_proxy_response(writer)
    }
}

/// The HTTP-API (v2) dialect.
pub struct HttpApi;

impl Dialect for HttpApi {
    type Event = ApiGatewayV2HttpRequest;
    type Response = ApiGatewayV2HttpResponse;

    fn decode(
        event: Self::Event,
        cancel: CancellationToken,
    ) -> Result<Request<Bytes>, ShimError> {
        from_http_api_event(event, cancel)
    }

    fn encode(writer: ResponseWriter) -> Self::Response {
        into_http_api_response(writer)
    }
}
