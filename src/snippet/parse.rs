//! Best-effort inverse of the emitters: regex/token extraction of
//! `{url, method, headers, body}` from a code string.
//!
//! The extraction is intentionally lossy. Ties break toward the first
//! occurrence in source text; missing fields resolve to documented defaults
//! rather than failing; only input with no recognizable call shape at all
//! yields `None`. Object literals go through a naive quote normalization
//! (bare keys quoted, single quotes swapped to double) before JSON parsing,
//! which mis-parses strings that themselves contain quotes, a known
//! limitation kept for compatibility with the snippets users already edit.

use super::Language;
use crate::compose::RequestDescriptor;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

static FETCH_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"fetch\s*\(\s*['"]([^'"]+)['"]"#).unwrap());
static JS_METHOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"method\s*:\s*['"]([A-Za-z]+)['"]"#).unwrap());
static JS_HEADERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"headers\s*:\s*\{").unwrap());
static JS_BODY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"body\s*:\s*JSON\.stringify\s*\(").unwrap());

static PY_CALL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"requests\.(get|post|put|delete|patch|head|options)\s*\(\s*['"]([^'"]+)['"]"#)
        .unwrap()
});
static PY_HEADERS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"headers\s*=\s*\{").unwrap());
static PY_JSON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"json\s*=\s*\{").unwrap());
static PY_DATA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"data\s*=\s*\{").unwrap());

static CURL_STRING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"'([^']+)'|"([^"]+)""#).unwrap());
static CURL_METHOD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-X\s+([A-Za-z]+)").unwrap());
static CURL_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"-H\s+['"]([^'"]+)['"]"#).unwrap());
static CURL_DATA_SQ_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)-d\s+'([^']*)'").unwrap());
static CURL_DATA_DQ_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?s)-d\s+"([^"]*)""#).unwrap());

static BARE_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([{,]\s*)([A-Za-z_][A-Za-z0-9_\-]*)\s*:").unwrap());

/// Methods an edited javascript snippet may declare; anything else keeps
/// the GET default.
const JS_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "PATCH"];

/// A request recovered from an edited code snippet.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRequest {
    pub url: String,
    pub method: String,
    pub headers: Map<String, Value>,
    pub body: Option<Value>,
    /// The snippet text the request was extracted from, verbatim.
    pub original_code: String,
}

impl ParsedRequest {
    /// Convert to the descriptor shape the validator and execution
    /// collaborator consume. The content type is read back from the
    /// parsed headers when present.
    pub fn into_descriptor(self) -> RequestDescriptor {
        let content_type = self
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("content-type"))
            .and_then(|(_, v)| v.as_str())
            .map(str::to_string);
        RequestDescriptor {
            url: self.url,
            method: self.method,
            headers: self.headers,
            body: self.body,
            content_type,
        }
    }
}

/// Parse a code snippet in the given language.
///
/// Returns `None` only when no recognizable call shape exists in the input
/// (no `fetch(...)` URL, no `requests.<verb>(...)` call, no quoted string
/// after `curl`). Missing method/headers/body are not failures.
pub fn parse(language: Language, code: &str) -> Option<ParsedRequest> {
    match language {
        Language::Javascript => parse_javascript(code),
        Language::Python => parse_python(code),
        Language::Curl => parse_curl(code),
    }
}

fn parse_javascript(code: &str) -> Option<ParsedRequest> {
    let url = FETCH_URL_RE.captures(code)?.get(1)?.as_str().to_string();

    let method = JS_METHOD_RE
        .captures(code)
        .map(|c| c[1].to_ascii_uppercase())
        .filter(|m| JS_METHODS.contains(&m.as_str()))
        .unwrap_or_else(|| "GET".to_string());

    let headers = JS_HEADERS_RE
        .find(code)
        .and_then(|m| balanced_block(code, m.end() - 1, '{', '}'))
        .map(parse_object_literal)
        .unwrap_or_default();

    let body = JS_BODY_RE
        .find(code)
        .and_then(|m| balanced_block(code, m.end() - 1, '(', ')'))
        .and_then(|block| {
            // strip the stringify parentheses
            let inner = block[1..block.len() - 1].trim();
            parse_value_literal(inner)
        });

    Some(ParsedRequest {
        url,
        method,
        headers,
        body,
        original_code: code.to_string(),
    })
}

fn parse_python(code: &str) -> Option<ParsedRequest> {
    let call = PY_CALL_RE.captures(code)?;
    let method = call.get(1)?.as_str().to_ascii_uppercase();
    let url = call.get(2)?.as_str().to_string();

    let headers = PY_HEADERS_RE
        .find(code)
        .and_then(|m| balanced_block(code, m.end() - 1, '{', '}'))
        .map(parse_object_literal)
        .unwrap_or_default();

    let body = PY_JSON_RE
        .find(code)
        .or_else(|| PY_DATA_RE.find(code))
        .and_then(|m| balanced_block(code, m.end() - 1, '{', '}'))
        .and_then(parse_value_literal);

    Some(ParsedRequest {
        url,
        method,
        headers,
        body,
        original_code: code.to_string(),
    })
}

fn parse_curl(code: &str) -> Option<ParsedRequest> {
    let after_curl = &code[code.find("curl")?..];
    let url_caps = CURL_STRING_RE.captures(after_curl)?;
    let url = url_caps
        .get(1)
        .or_else(|| url_caps.get(2))?
        .as_str()
        .to_string();

    let method = CURL_METHOD_RE
        .captures(code)
        .map(|c| c[1].to_ascii_uppercase())
        .unwrap_or_else(|| "GET".to_string());

    let mut headers = Map::new();
    for caps in CURL_HEADER_RE.captures_iter(code) {
        if let Some((key, value)) = caps[1].split_once(':') {
            // later duplicates overwrite earlier ones
            headers.insert(
                key.trim().to_string(),
                Value::String(value.trim().to_string()),
            );
        }
    }

    let body = CURL_DATA_SQ_RE
        .captures(code)
        .or_else(|| CURL_DATA_DQ_RE.captures(code))
        .and_then(|caps| serde_json::from_str(&caps[1]).ok());

    Some(ParsedRequest {
        url,
        method,
        headers,
        body,
        original_code: code.to_string(),
    })
}

/// Slice out a balanced delimiter block starting at `open_idx` (which must
/// point at the opening delimiter), delimiters included. The scan does not
/// understand string literals; delimiters inside quoted strings skew the
/// balance; that fragility is part of this parser's contract.
fn balanced_block(text: &str, open_idx: usize, open: char, close: char) -> Option<&str> {
    let mut depth = 0usize;
    for (offset, c) in text[open_idx..].char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(&text[open_idx..open_idx + offset + c.len_utf8()]);
            }
        }
    }
    None
}

/// Lenient quote normalization: single quotes to double, bare keys quoted.
fn normalize_literal(raw: &str) -> String {
    let double_quoted = raw.replace('\'', "\"");
    BARE_KEY_RE
        .replace_all(&double_quoted, "${1}\"${2}\":")
        .into_owned()
}

/// Parse an object literal into a header-style map; unparseable input
/// degrades to an empty map.
fn parse_object_literal(raw: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(&normalize_literal(raw)) {
        Ok(Value::Object(map)) => map,
        _ => {
            tracing::debug!("header literal did not normalize to a JSON object");
            Map::new()
        }
    }
}

/// Parse a body literal; unparseable input degrades to `None`.
fn parse_value_literal(raw: &str) -> Option<Value> {
    match serde_json::from_str(&normalize_literal(raw)) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = %err, "body literal did not parse");
            None
        }
    }
}
