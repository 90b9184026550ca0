//! Response encoding: captured responses into outbound envelopes.
//!
//! Both encoders share the same skeleton: fold the captured headers, fill
//! in a Content-Type when the handler set none, then let the classifier
//! decide whether the body travels as text or base64. The HTTP-API
//! dialect additionally moves `Set-Cookie` values into the envelope's own
//! cookie list before folding.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::header::SET_COOKIE;
use lambda_shim_core::{
    ApiGatewayProxyResponse, ApiGatewayV2HttpResponse, CONTENT_TYPE, detect_content_type, fold,
    is_textual,
};

use crate::response::ResponseWriter;

/// Encode a capture into a REST-proxy (v1) envelope.
pub fn into_rest_proxy_response(writer: ResponseWriter) -> ApiGatewayProxyResponse {
    let (status, headers, body) = writer.into_parts();

    let mut headers = fold(&headers);
    let content_type = headers
        .entry(CONTENT_TYPE.to_string())
        .or_insert_with(|| detect_content_type(&body).to_string())
        .clone();

    let (body, is_base64_encoded) = encode_body(&body, &content_type);

    ApiGatewayProxyResponse {
        status_code: status.map(|status| status.as_u16()).unwrap_or_default(),
        headers,
        body,
        is_base64_encoded,
        ..Default::default()
    }
}

/// Encode a capture into an HTTP-API (v2) envelope.
///
/// `Set-Cookie` values are transported in the envelope's `cookies` field
/// in this dialect; they are drained out of the header map, in the order
/// the handler added them, before the remaining headers are folded.
pub fn into_http_api_response(writer: ResponseWriter) -> ApiGatewayV2HttpResponse {
    let (status, mut headers, body) = writer.into_parts();

    let cookies: Vec<String> = headers
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect();
    headers.remove(SET_COOKIE);

    let mut headers = fold(&headers);
    let content_type = headers
        .entry(CONTENT_TYPE.to_string())
        .or_insert_with(|| detect_content_type(&body).to_string())
        .clone();

    let (body, is_base64_encoded) = encode_body(&body, &content_type);

    ApiGatewayV2HttpResponse {
        status_code: status.map(|status| status.as_u16()).unwrap_or_default(),
        headers,
        cookies,
        body,
        is_base64_encoded,
        ..Default::default()
    }
}

/// Binary content is base64-encoded for safe transport through the
/// string-bodied envelope; textual content rides verbatim.
fn encode_body(body: &[u8], content_type: &str) -> (String, bool) {
    if is_textual(content_type) {
        (String::from_utf8_lossy(body).into_owned(), false)
    } else {
        (BASE64.encode(body), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderValue, StatusCode};

    #[test]
    fn test_rest_text_body_rides_verbatim() {
        let mut writer = ResponseWriter::new();
        writer.write(b"hello, world");

        let resp = into_rest_proxy_response(writer);
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.body, "hello, world");
        assert!(!resp.is_base64_encoded);
        assert_eq!(
            resp.headers.get("Content-Type").map(String::as_str),
            Some("text/plain; charset=utf-8")
        );
    }

    #[test]
    fn test_rest_binary_body_is_base64() {
        let payload = [0x1f, 0x8b, 0x08, 0x00, 0x01, 0x02];
        let mut writer = ResponseWriter::new();
        writer.set_header("content-type", HeaderValue::from_static("application/octet-stream"));
        writer.write(&payload);

        let resp = into_rest_proxy_response(writer);
        assert!(resp.is_base64_encoded);
        assert_eq!(BASE64.decode(&resp.body).unwrap(), payload);
    }

    #[test]
    fn test_existing_content_type_is_not_overwritten() {
        let mut writer = ResponseWriter::new();
        writer.set_header("Content-Type", HeaderValue::from_static("application/json"));
        writer.write(b"{\"ok\":true}");

        let resp = into_rest_proxy_response(writer);
        assert_eq!(
            resp.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(!resp.is_base64_encoded);
    }

    #[test]
    fn test_untouched_capture_encodes_status_zero() {
        let resp = into_rest_proxy_response(ResponseWriter::new());
        assert_eq!(resp.status_code, 0);
        // Content-Type is still always present.
        assert!(resp.headers.contains_key("Content-Type"));
    }

    #[test]
    fn test_v2_extracts_cookies_in_order() {
        let mut writer = ResponseWriter::new();
        writer.add_header(SET_COOKIE, HeaderValue::from_static("a=1"));
        writer.add_header(SET_COOKIE, HeaderValue::from_static("b=2"));
        writer.set_header("content-type", HeaderValue::from_static("text/plain"));
        writer.set_status(StatusCode::CREATED);
        writer.write(b"made");

        let resp = into_http_api_response(writer);
        assert_eq!(resp.status_code, 201);
        assert_eq!(resp.cookies, vec!["a=1", "b=2"]);
        assert!(!resp.headers.contains_key("Set-Cookie"));
        assert_eq!(resp.body, "made");
    }

    #[test]
    fn test_v2_binary_detection_uses_mime_classifier() {
        // "hi" is valid UTF-8; the MIME rule still base64-encodes it
        // because of its declared content type.
        let mut writer = ResponseWriter::new();
        writer.set_header("content-type", HeaderValue::from_static("application/octet-stream"));
        writer.write(b"hi");

        let resp = into_http_api_response(writer);
        assert!(resp.is_base64_encoded);
        assert_eq!(BASE64.decode(&resp.body).unwrap(), b"hi");
    }

    #[test]
    fn test_folded_multi_values_survive_encoding() {
        let mut writer = ResponseWriter::new();
        writer.add_header("accept-encoding", HeaderValue::from_static("gzip"));
        writer.add_header("accept-encoding", HeaderValue::from_static("deflate"));
        writer.write(b"ok");

        let resp = into_rest_proxy_response(writer);
        assert_eq!(
            resp.headers.get("Accept-Encoding").map(String::as_str),
            Some("gzip,deflate")
        );
    }
}
