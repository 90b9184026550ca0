//! Request decoding: inbound gateway events into canonical HTTP requests.
//!
//! Each dialect has its own entry point. Decoding is a pure, one-shot
//! transformation: any failure aborts the invocation before the handler
//! runs, and nothing is retried.

use std::collections::HashMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, HOST};
use http::uri::PathAndQuery;
use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Uri};
use lambda_shim_core::{ApiGatewayProxyRequest, ApiGatewayV2HttpRequest};
use tokio_util::sync::CancellationToken;
use url::form_urlencoded;

use crate::error::ShimError;

/// Header under which the gateway request id is exposed to handlers.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Connection-level facts that have no place on [`http::Request`] itself,
/// carried as a request extension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionInfo {
    /// Value of the `Host` header, when present.
    pub host: String,
    /// The gateway-reported source address of the caller.
    pub remote_addr: String,
}

/// Decode a REST-proxy (v1) event into a canonical request.
///
/// The event's `path` is used verbatim; `queryStringParameters` are
/// percent-encoded into the query string (map iteration order — the
/// gateway's map carries no meaningful order). The cancellation token is
/// attached as a request extension for the handler to observe.
pub fn from_rest_proxy_event(
    event: ApiGatewayProxyRequest,
    cancel: CancellationToken,
) -> Result<Request<Bytes>, ShimError> {
    let query = encode_query(&event.query_string_parameters);
    let uri = build_origin_uri(&event.path, &query)?;
    let method = parse_method(&event.http_method)?;
    let body = decode_body(event.body, event.is_base64_encoded)?;

    let mut headers = copy_headers(&event.headers)?;
    set_request_id(&mut headers, &event.request_context.request_id)?;

    build_request(
        method,
        uri,
        headers,
        body,
        event.request_context.identity.source_ip,
        cancel,
    )
}

/// Decode an HTTP-API (v2) event into a canonical request.
///
/// `rawPath` and `rawQueryString` are taken from the event as-is; the
/// method comes from the typed request context. A non-empty request id is
/// surfaced under [`REQUEST_ID_HEADER`].
pub fn from_http_api_event(
    event: ApiGatewayV2HttpRequest,
    cancel: CancellationToken,
) -> Result<Request<Bytes>, ShimError> {
    let uri = build_origin_uri(&event.raw_path, &event.raw_query_string)?;
    let method = parse_method(&event.request_context.http.method)?;
    let body = decode_body(event.body, event.is_base64_encoded)?;

    let mut headers = copy_headers(&event.headers)?;
    set_request_id(&mut headers, &event.request_context.request_id)?;

    build_request(
        method,
        uri,
        headers,
        body,
        event.request_context.http.source_ip,
        cancel,
    )
}

fn build_request(
    method: Method,
    uri: Uri,
    mut headers: HeaderMap,
    body: Bytes,
    remote_addr: String,
    cancel: CancellationToken,
) -> Result<Request<Bytes>, ShimError> {
    if !headers.contains_key(CONTENT_LENGTH) && !body.is_empty() {
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
    }

    let host = headers
        .get(HOST)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .unwrap_or_default();

    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .map_err(|err| ShimError::RequestConstruction(err.to_string()))?;
    *request.headers_mut() = headers;
    request
        .extensions_mut()
        .insert(ConnectionInfo { host, remote_addr });
    request.extensions_mut().insert(cancel);

    Ok(request)
}

fn encode_query(params: &HashMap<String, String>) -> String {
    if params.is_empty() {
        return String::new();
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

fn build_origin_uri(path: &str, query: &str) -> Result<Uri, ShimError> {
    let mut target = String::with_capacity(path.len() + query.len() + 2);
    target.push_str(if path.is_empty() { "/" } else { path });
    if !query.is_empty() {
        target.push('?');
        target.push_str(query);
    }

    let path_and_query: PathAndQuery = target.parse().map_err(|source| ShimError::PathParse {
        path: path.to_string(),
        source,
    })?;

    let mut parts = http::uri::Parts::default();
    parts.path_and_query = Some(path_and_query);
    Uri::from_parts(parts).map_err(|err| ShimError::RequestConstruction(err.to_string()))
}

fn parse_method(method: &str) -> Result<Method, ShimError> {
    // The gateway can omit the method on hand-crafted test events; an
    // empty method means GET, anything else unparseable is an error.
    if method.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(method.as_bytes())
        .map_err(|err| ShimError::RequestConstruction(format!("invalid method {method:?}: {err}")))
}

fn decode_body(body: String, is_base64_encoded: bool) -> Result<Bytes, ShimError> {
    if is_base64_encoded {
        let decoded = BASE64.decode(body.as_bytes())?;
        return Ok(Bytes::from(decoded));
    }
    Ok(Bytes::from(body))
}

fn copy_headers(entries: &HashMap<String, String>) -> Result<HeaderMap, ShimError> {
    let mut headers = HeaderMap::with_capacity(entries.len() + 2);
    for (name, value) in entries {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|err| {
            ShimError::RequestConstruction(format!("invalid header name {name:?}: {err}"))
        })?;
        let value = HeaderValue::from_str(value).map_err(|err| {
            ShimError::RequestConstruction(format!("invalid value for header {name:?}: {err}"))
        })?;
        headers.insert(name, value);
    }
    Ok(headers)
}

fn set_request_id(headers: &mut HeaderMap, request_id: &str) -> Result<(), ShimError> {
    if request_id.is_empty() {
        return Ok(());
    }
    let value = HeaderValue::from_str(request_id).map_err(|err| {
        ShimError::RequestConstruction(format!("invalid request id {request_id:?}: {err}"))
    })?;
    headers.insert(REQUEST_ID_HEADER, value);
    Ok(())
}
