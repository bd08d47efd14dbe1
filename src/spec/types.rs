use serde_json::Value;

/// Where a parameter is carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Query,
    Path,
    Header,
    Cookie,
}

impl ParameterLocation {
    /// Parse the OpenAPI `in` field. Unrecognized values degrade to `Query`
    /// so a malformed parameter never blocks catalog construction.
    pub fn from_in_field(raw: &str) -> Self {
        match raw {
            "path" => ParameterLocation::Path,
            "header" => ParameterLocation::Header,
            "cookie" => ParameterLocation::Cookie,
            _ => ParameterLocation::Query,
        }
    }
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterLocation::Query => write!(f, "query"),
            ParameterLocation::Path => write!(f, "path"),
            ParameterLocation::Header => write!(f, "header"),
            ParameterLocation::Cookie => write!(f, "cookie"),
        }
    }
}

/// One parameter of an endpoint, lifted out of the raw document.
///
/// The schema stays a raw [`Value`] on purpose: source documents are loosely
/// shaped and must flow through untouched. Schemas are read-only here.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    pub name: String,
    pub location: ParameterLocation,
    pub required: bool,
    pub schema: Option<Value>,
    pub example: Option<Value>,
    pub examples: Vec<Value>,
}

/// One operation of the flattened endpoint catalog.
///
/// Identity within a catalog is `"{method} {path}"` (see [`EndpointDescriptor::key`]);
/// if a malformed document repeats a `(method, path)` pair the last entry wins.
#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    /// Upper-case HTTP method token (`GET`, `POST`, ...).
    pub method: String,
    /// Path template with `{param}` placeholders left literal.
    pub path: String,
    pub summary: Option<String>,
    pub operation_id: Option<String>,
    /// Path-item level parameters first, then the operation's own.
    pub parameters: Vec<ParameterSpec>,
    /// The operation's `requestBody.content` map, verbatim.
    pub request_body: Option<Value>,
    pub security: Option<Value>,
}

impl EndpointDescriptor {
    /// Catalog identity key, e.g. `"GET /pets/{id}"`.
    pub fn key(&self) -> String {
        format!("{} {}", self.method, self.path)
    }

    /// Concatenated haystack used by catalog search.
    pub(crate) fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.method,
            self.path,
            self.summary.as_deref().unwrap_or(""),
            self.operation_id.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_from_in_field() {
        assert_eq!(ParameterLocation::from_in_field("path"), ParameterLocation::Path);
        assert_eq!(ParameterLocation::from_in_field("header"), ParameterLocation::Header);
        assert_eq!(ParameterLocation::from_in_field("cookie"), ParameterLocation::Cookie);
        assert_eq!(ParameterLocation::from_in_field("query"), ParameterLocation::Query);
        // unknown degrades to query
        assert_eq!(ParameterLocation::from_in_field("body"), ParameterLocation::Query);
    }

    #[test]
    fn test_endpoint_key() {
        let ep = EndpointDescriptor {
            method: "GET".to_string(),
            path: "/pets/{id}".to_string(),
            summary: None,
            operation_id: None,
            parameters: vec![],
            request_body: None,
            security: None,
        };
        assert_eq!(ep.key(), "GET /pets/{id}");
    }
}
