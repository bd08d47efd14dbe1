//! Pure emitters: one structured request in, idiomatic source text out.
//!
//! Each emitter uses the method token and URL exactly as composed, writes
//! every header literally, and serializes JSON bodies pretty-printed. The
//! output shapes are fixed so the parsers in this module's sibling can
//! recover the request structurally (round-trip invariant).

use super::{ContentSnippet, Language};
use crate::compose::RequestDescriptor;
use serde_json::Value;

/// Emit source text for a request in the given language.
pub fn emit(language: Language, req: &RequestDescriptor) -> String {
    match language {
        Language::Javascript => emit_javascript(req),
        Language::Python => emit_python(req),
        Language::Curl => emit_curl(req),
    }
}

/// Emit the full snippet set, one per supported language.
pub fn emit_all(req: &RequestDescriptor) -> Vec<ContentSnippet> {
    Language::all()
        .iter()
        .map(|&language| ContentSnippet {
            language,
            code: emit(language, req),
        })
        .collect()
}

fn is_json(req: &RequestDescriptor) -> bool {
    req.content_type.as_deref() == Some("application/json")
}

fn header_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Pretty-print a JSON body and re-indent its continuation lines so the
/// literal sits at `indent` inside the surrounding construct.
fn pretty_body(body: &Value, indent: &str) -> String {
    let pretty = serde_json::to_string_pretty(body).unwrap_or_else(|_| "null".to_string());
    pretty.replace('\n', &format!("\n{indent}"))
}

/// Generic stringifier for non-JSON bodies.
fn raw_body(body: &Value) -> String {
    match body {
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

/// fetch()-style JavaScript.
pub fn emit_javascript(req: &RequestDescriptor) -> String {
    let mut code = String::new();
    code.push_str(&format!("fetch('{}', {{\n", req.url));
    code.push_str(&format!("  method: '{}'", req.method));

    if !req.headers.is_empty() {
        let entries: Vec<String> = req
            .headers
            .iter()
            .map(|(k, v)| format!("    '{}': '{}'", k, header_value(v)))
            .collect();
        code.push_str(",\n  headers: {\n");
        code.push_str(&entries.join(",\n"));
        code.push_str("\n  }");
    }

    if let Some(body) = &req.body {
        if is_json(req) {
            code.push_str(&format!(
                ",\n  body: JSON.stringify({})",
                pretty_body(body, "  ")
            ));
        } else {
            code.push_str(&format!(",\n  body: '{}'", raw_body(body)));
        }
    }

    code.push_str("\n})\n");
    code.push_str("  .then(response => response.json())\n");
    code.push_str("  .then(data => console.log(data));\n");
    code
}

/// requests-style Python.
pub fn emit_python(req: &RequestDescriptor) -> String {
    let verb = req.method.to_lowercase();
    let mut code = String::from("import requests\n\n");

    if !req.headers.is_empty() {
        let entries: Vec<String> = req
            .headers
            .iter()
            .map(|(k, v)| format!("    '{}': '{}'", k, header_value(v)))
            .collect();
        code.push_str("headers = {\n");
        code.push_str(&entries.join(",\n"));
        code.push_str("\n}\n\n");
    }

    code.push_str(&format!("response = requests.{}('{}'", verb, req.url));
    if !req.headers.is_empty() {
        code.push_str(", headers=headers");
    }
    if let Some(body) = &req.body {
        if is_json(req) {
            code.push_str(&format!(", json={}", pretty_body(body, "")));
        } else if body.is_object() || body.is_array() {
            code.push_str(&format!(", data={}", pretty_body(body, "")));
        } else {
            code.push_str(&format!(", data='{}'", raw_body(body)));
        }
    }
    code.push_str(")\n\n");

    code.push_str("print(response.status_code)\n");
    if is_json(req) {
        code.push_str("print(response.json())\n");
    } else {
        code.push_str("print(response.text)\n");
    }
    code
}

/// cURL command. GET stays implicit; the URL follows `curl` directly so
/// the inverse parser's first-quoted-string rule lands on it.
pub fn emit_curl(req: &RequestDescriptor) -> String {
    let mut parts: Vec<String> = Vec::new();
    if req.method == "GET" {
        parts.push(format!("curl '{}'", req.url));
    } else {
        parts.push(format!("curl -X {} '{}'", req.method, req.url));
    }

    for (k, v) in &req.headers {
        parts.push(format!("-H '{}: {}'", k, header_value(v)));
    }

    if let Some(body) = &req.body {
        let payload = if is_json(req) {
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "null".to_string())
        } else {
            raw_body(body)
        };
        parts.push(format!("-d '{}'", payload.replace('\'', "'\\''")));
    }

    let mut code = parts.join(" \\\n  ");
    code.push('\n');
    code
}
