use super::load::SpecDocument;
use super::types::{EndpointDescriptor, ParameterLocation, ParameterSpec};
use serde_json::Value;

const METHODS: [&str; 8] = [
    "get", "post", "put", "delete", "patch", "options", "head", "trace",
];

/// Extract parameter metadata from a raw `parameters` array
///
/// Entries that are not object-shaped or have no `name` are skipped; a
/// malformed parameter never blocks the rest of the catalog.
///
/// # Arguments
///
/// * `params` - The raw `parameters` value from a path item or operation
///
/// # Returns
///
/// Parameter metadata in source order
pub fn extract_parameters(params: Option<&Value>) -> Vec<ParameterSpec> {
    let mut out = Vec::new();
    let Some(list) = params.and_then(Value::as_array) else {
        return out;
    };
    for entry in list {
        let Some(obj) = entry.as_object() else {
            continue;
        };
        let Some(name) = obj.get("name").and_then(Value::as_str) else {
            tracing::debug!("skipping parameter without a name");
            continue;
        };
        let location = obj
            .get("in")
            .and_then(Value::as_str)
            .map(ParameterLocation::from_in_field)
            .unwrap_or(ParameterLocation::Query);
        let examples = obj
            .get("examples")
            .map(|ex| match ex {
                // OpenAPI 3 keyed examples: values in source order
                Value::Object(map) => map
                    .values()
                    .map(|v| v.get("value").cloned().unwrap_or_else(|| v.clone()))
                    .collect(),
                // Swagger-style plain list
                Value::Array(list) => list.clone(),
                other => vec![other.clone()],
            })
            .unwrap_or_default();

        out.push(ParameterSpec {
            name: name.to_string(),
            location,
            required: obj.get("required").and_then(Value::as_bool).unwrap_or(false),
            schema: obj.get("schema").cloned(),
            example: obj.get("example").cloned(),
            examples,
        });
    }
    out
}

/// Flatten a document's `paths` into an ordered endpoint catalog
///
/// Paths iterate in the order their keys appear in the source document, and
/// each path item's method keys iterate in source order too; the UI lists
/// endpoints in exactly this order. Only HTTP method keys are kept; `summary`,
/// `servers`, vendor extensions and the like are ignored at this level.
/// Path-item `parameters` are prepended to each operation's own list.
///
/// Duplicate `(method, path)` pairs keep the last occurrence.
pub fn flatten_endpoints(doc: &SpecDocument) -> Vec<EndpointDescriptor> {
    let mut endpoints: Vec<EndpointDescriptor> = Vec::new();

    let Some(paths) = doc.paths() else {
        return endpoints;
    };

    for (path, item) in paths {
        let Some(item_obj) = item.as_object() else {
            tracing::warn!(path = %path, "skipping non-object path item");
            continue;
        };
        let shared_params = extract_parameters(item_obj.get("parameters"));

        for (key, operation) in item_obj {
            let method_lower = key.to_ascii_lowercase();
            if !METHODS.contains(&method_lower.as_str()) {
                continue;
            }
            let op = operation.as_object();

            let mut parameters = shared_params.clone();
            parameters.extend(extract_parameters(
                op.and_then(|o| o.get("parameters")),
            ));

            let descriptor = EndpointDescriptor {
                method: method_lower.to_ascii_uppercase(),
                path: path.clone(),
                summary: op
                    .and_then(|o| o.get("summary"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                operation_id: op
                    .and_then(|o| o.get("operationId"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                parameters,
                request_body: op
                    .and_then(|o| o.get("requestBody"))
                    .and_then(|rb| rb.get("content"))
                    .cloned(),
                security: op.and_then(|o| o.get("security")).cloned(),
            };

            // last write wins on duplicate (method, path)
            if let Some(existing) = endpoints
                .iter_mut()
                .find(|e| e.method == descriptor.method && e.path == descriptor.path)
            {
                *existing = descriptor;
            } else {
                endpoints.push(descriptor);
            }
        }
    }

    endpoints
}

/// Filter a catalog by a case-insensitive substring query
///
/// The match runs over `"{method} {path} {summary} {operationId}"` per
/// endpoint. An empty query returns the full list, order preserved.
pub fn search<'a>(
    endpoints: &'a [EndpointDescriptor],
    query: &str,
) -> Vec<&'a EndpointDescriptor> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return endpoints.iter().collect();
    }
    endpoints
        .iter()
        .filter(|e| e.search_text().to_lowercase().contains(&needle))
        .collect()
}
