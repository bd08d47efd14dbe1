//! Request synthesis: one endpoint definition in, one concrete request out.

use crate::sample::sample_schema;
use crate::spec::{EndpointDescriptor, ParameterLocation};
use serde::Serialize;
use serde_json::{Map, Value};

/// Content types tried, in order, when picking a request body representation.
const PREFERRED_CONTENT_TYPES: [&str; 3] = [
    "application/json",
    "application/x-www-form-urlencoded",
    "multipart/form-data",
];

/// A fully resolved request, ready for display or execution.
///
/// Built fresh on every synthesis call and immutable once built. The
/// execution collaborator is responsible for swapping placeholder
/// credentials for real ones before sending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDescriptor {
    /// Fully qualified URL, query string included. Path `{param}` tokens
    /// are left literal; only query parameters are substituted.
    pub url: String,
    /// Upper-case method token.
    pub method: String,
    /// Ordered header map; later inserts win on conflict.
    pub headers: Map<String, Value>,
    pub body: Option<Value>,
    pub content_type: Option<String>,
}

/// Compose a request for an endpoint with no caller-supplied headers.
pub fn compose(endpoint: &EndpointDescriptor, base_url: &str) -> RequestDescriptor {
    compose_with_headers(endpoint, base_url, &Map::new())
}

/// Compose a request for an endpoint.
///
/// `extra_headers` come from the credentials collaborator and are merged
/// first; the engine's own `Content-Type` / `Accept` land on top and win
/// on conflict. This function never fails: absent optional sections
/// degrade to `None` or empty, matching the sampler's no-throw policy.
///
/// # Arguments
///
/// * `endpoint` - The flattened endpoint to synthesize a request for
/// * `base_url` - Server base URL, typically `SpecDocument::base_url`
/// * `extra_headers` - Caller-supplied auth/custom headers
pub fn compose_with_headers(
    endpoint: &EndpointDescriptor,
    base_url: &str,
    extra_headers: &Map<String, Value>,
) -> RequestDescriptor {
    let mut url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.path.trim_start_matches('/')
    );

    let query = build_query(endpoint);
    if !query.is_empty() {
        let rendered: Vec<String> = query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        url.push('?');
        url.push_str(&rendered.join("&"));
    }

    let content_type = select_content_type(endpoint.request_body.as_ref());
    let body = content_type.as_ref().and_then(|ct| {
        endpoint
            .request_body
            .as_ref()
            .and_then(|content| content.get(ct.as_str()))
            .and_then(|media| media.get("schema"))
            .map(sample_schema)
    });

    let mut headers = extra_headers.clone();
    if let Some(ct) = &content_type {
        headers.insert("Content-Type".to_string(), Value::String(ct.clone()));
        if ct == "application/json" {
            headers.insert(
                "Accept".to_string(),
                Value::String("application/json".to_string()),
            );
        }
    }

    RequestDescriptor {
        url,
        method: endpoint.method.clone(),
        headers,
        body,
        content_type,
    }
}

/// Resolve query parameter values in declaration order.
///
/// Per parameter: explicit `example`, else the first of `examples`, else a
/// sampled value from the schema, else the empty string. Object and array
/// values are JSON-stringified before entering the query string.
fn build_query(endpoint: &EndpointDescriptor) -> Vec<(String, String)> {
    endpoint
        .parameters
        .iter()
        .filter(|p| p.location == ParameterLocation::Query)
        .map(|p| {
            let value = p
                .example
                .clone()
                .or_else(|| p.examples.first().cloned())
                .or_else(|| p.schema.as_ref().map(sample_schema))
                .unwrap_or(Value::Null);
            (p.name.clone(), query_value_to_string(&value))
        })
        .collect()
}

fn query_value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // objects and arrays travel JSON-stringified
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

/// Pick the content type for a request body content map: the first of the
/// preferred types that exists, otherwise the map's first key in source
/// order, otherwise nothing.
fn select_content_type(content: Option<&Value>) -> Option<String> {
    let map = content?.as_object()?;
    if map.is_empty() {
        return None;
    }
    for preferred in PREFERRED_CONTENT_TYPES {
        if map.contains_key(preferred) {
            return Some(preferred.to_string());
        }
    }
    map.keys().next().cloned()
}
