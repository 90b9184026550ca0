//! Serde models of the gateway event envelopes.
//!
//! Two inbound dialects are supported: the REST-proxy payload
//! ([`ApiGatewayProxyRequest`]) and the HTTP-API v2 payload
//! ([`ApiGatewayV2HttpRequest`]), each with its outbound counterpart.
//! Field names follow the gateway's camelCase wire format. The gateway
//! omits or nulls most fields depending on the integration, so everything
//! is defaulted and null-tolerant.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize `null` as the field's default value. The gateway sends
/// explicit nulls for absent maps and bodies.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Inbound REST-proxy (v1) event.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayProxyRequest {
    pub resource: String,
    pub path: String,
    pub http_method: String,
    #[serde(deserialize_with = "null_default")]
    pub headers: HashMap<String, String>,
    #[serde(deserialize_with = "null_default")]
    pub multi_value_headers: HashMap<String, Vec<String>>,
    #[serde(deserialize_with = "null_default")]
    pub query_string_parameters: HashMap<String, String>,
    #[serde(deserialize_with = "null_default")]
    pub path_parameters: HashMap<String, String>,
    #[serde(deserialize_with = "null_default")]
    pub stage_variables: HashMap<String, String>,
    pub request_context: ApiGatewayProxyRequestContext,
    #[serde(deserialize_with = "null_default")]
    pub body: String,
    pub is_base64_encoded: bool,
}

/// Request context attached to a REST-proxy event.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayProxyRequestContext {
    pub account_id: String,
    pub stage: String,
    pub request_id: String,
    pub identity: ApiGatewayRequestIdentity,
    pub resource_path: String,
    pub http_method: String,
    pub api_id: String,
}

/// Caller identity for the REST-proxy dialect.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayRequestIdentity {
    pub source_ip: String,
    pub user_agent: String,
}

/// Outbound REST-proxy (v1) envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayProxyResponse {
    pub status_code: u16,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub multi_value_headers: HashMap<String, Vec<String>>,
    pub body: String,
    pub is_base64_encoded: bool,
}

/// Inbound HTTP-API (v2) event.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayV2HttpRequest {
    pub version: String,
    pub route_key: String,
    pub raw_path: String,
    pub raw_query_string: String,
    #[serde(deserialize_with = "null_default")]
    pub cookies: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub headers: HashMap<String, String>,
    #[serde(deserialize_with = "null_default")]
    pub query_string_parameters: HashMap<String, String>,
    #[serde(deserialize_with = "null_default")]
    pub path_parameters: HashMap<String, String>,
    #[serde(deserialize_with = "null_default")]
    pub stage_variables: HashMap<String, String>,
    pub request_context: ApiGatewayV2HttpRequestContext,
    #[serde(deserialize_with = "null_default")]
    pub body: String,
    pub is_base64_encoded: bool,
}

/// Request context attached to an HTTP-API event.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayV2HttpRequestContext {
    pub account_id: String,
    pub api_id: String,
    pub domain_name: String,
    pub stage: String,
    pub request_id: String,
    pub time_epoch: i64,
    pub http: ApiGatewayV2HttpDescription,
}

/// The `http` block of the HTTP-API request context.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayV2HttpDescription {
    pub method: String,
    pub path: String,
    pub protocol: String,
    pub source_ip: String,
    pub user_agent: String,
}

/// Outbound HTTP-API (v2) envelope.
///
/// Cookies travel in their own field in this dialect; the encoder strips
/// `Set-Cookie` out of `headers` and fills `cookies` instead.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiGatewayV2HttpResponse {
    pub status_code: u16,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub multi_value_headers: HashMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<String>,
    pub body: String,
    pub is_base64_encoded: bool,
}
