#![allow(clippy::unwrap_used, clippy::expect_used)]

use apiforge::compose::RequestDescriptor;
use apiforge::snippet::{emit, emit_all, parse, Language};
use serde_json::{json, Map};

fn post_descriptor() -> RequestDescriptor {
    let mut headers = Map::new();
    headers.insert("Content-Type".to_string(), json!("application/json"));
    RequestDescriptor {
        url: "https://api.test/x".to_string(),
        method: "POST".to_string(),
        headers,
        body: Some(json!({"a": 1})),
        content_type: Some("application/json".to_string()),
    }
}

fn get_descriptor() -> RequestDescriptor {
    RequestDescriptor {
        url: "https://api.test/pets?limit=10".to_string(),
        method: "GET".to_string(),
        headers: Map::new(),
        body: None,
        content_type: None,
    }
}

#[test]
fn test_javascript_round_trip() {
    let descriptor = post_descriptor();
    let code = emit(Language::Javascript, &descriptor);

    let parsed = parse(Language::Javascript, &code).unwrap();
    assert_eq!(parsed.url, "https://api.test/x");
    assert_eq!(parsed.method, "POST");
    assert_eq!(
        parsed.headers.get("Content-Type"),
        Some(&json!("application/json"))
    );
    assert_eq!(parsed.body, Some(json!({"a": 1})));
    assert_eq!(parsed.original_code, code);
}

#[test]
fn test_python_round_trip() {
    let descriptor = post_descriptor();
    let code = emit(Language::Python, &descriptor);

    let parsed = parse(Language::Python, &code).unwrap();
    assert_eq!(parsed.url, "https://api.test/x");
    assert_eq!(parsed.method, "POST");
    assert_eq!(
        parsed.headers.get("Content-Type"),
        Some(&json!("application/json"))
    );
    assert_eq!(parsed.body, Some(json!({"a": 1})));
}

#[test]
fn test_curl_round_trip() {
    let descriptor = post_descriptor();
    let code = emit(Language::Curl, &descriptor);

    let parsed = parse(Language::Curl, &code).unwrap();
    assert_eq!(parsed.url, "https://api.test/x");
    assert_eq!(parsed.method, "POST");
    assert_eq!(
        parsed.headers.get("Content-Type"),
        Some(&json!("application/json"))
    );
    assert_eq!(parsed.body, Some(json!({"a": 1})));
}

#[test]
fn test_get_round_trip_all_languages() {
    let descriptor = get_descriptor();
    for snippet in emit_all(&descriptor) {
        let parsed = parse(snippet.language, &snippet.code)
            .unwrap_or_else(|| panic!("{} failed to parse back", snippet.language));
        assert_eq!(parsed.url, descriptor.url, "{}", snippet.language);
        assert_eq!(parsed.method, "GET", "{}", snippet.language);
        assert!(parsed.body.is_none(), "{}", snippet.language);
    }
}

#[test]
fn test_nested_body_round_trip() {
    let mut descriptor = post_descriptor();
    descriptor.body = Some(json!({
        "booking": {"checkIn": "2026-08-07", "guests": [ {"name": "A"}, {"name": "B"} ]},
        "notify": false
    }));
    for snippet in emit_all(&descriptor) {
        let parsed = parse(snippet.language, &snippet.code).unwrap();
        assert_eq!(parsed.body, descriptor.body, "{}", snippet.language);
    }
}

#[test]
fn test_parse_user_edited_javascript() {
    // the kind of snippet a user pastes back after editing: bare keys,
    // single quotes, reordered fields
    let code = r#"
const res = await fetch('https://api.test/orders?expand=items', {
  headers: { Authorization: 'Bearer abc123', 'X-Env': 'staging' },
  method: 'put',
  body: JSON.stringify({id: 7, tags: ['a', 'b']})
});
"#;
    let parsed = parse(Language::Javascript, code).unwrap();
    assert_eq!(parsed.url, "https://api.test/orders?expand=items");
    assert_eq!(parsed.method, "PUT");
    assert_eq!(parsed.headers.get("Authorization"), Some(&json!("Bearer abc123")));
    assert_eq!(parsed.headers.get("X-Env"), Some(&json!("staging")));
    assert_eq!(parsed.body, Some(json!({"id": 7, "tags": ["a", "b"]})));
}

#[test]
fn test_parse_user_edited_python() {
    let code = r#"
import requests

headers = {'Accept': 'application/json'}
response = requests.delete("https://api.test/orders/42", headers=headers)
print(response.status_code)
"#;
    let parsed = parse(Language::Python, code).unwrap();
    assert_eq!(parsed.method, "DELETE");
    assert_eq!(parsed.url, "https://api.test/orders/42");
    assert_eq!(parsed.headers.get("Accept"), Some(&json!("application/json")));
    assert!(parsed.body.is_none());
}

#[test]
fn test_parse_user_edited_curl() {
    let code = "curl 'https://api.test/search' -H 'X-A: 1' -H \"X-B: 2\" -d '{\"q\": \"rust\"}'";
    let parsed = parse(Language::Curl, code).unwrap();
    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.headers.get("X-A"), Some(&json!("1")));
    assert_eq!(parsed.headers.get("X-B"), Some(&json!("2")));
    assert_eq!(parsed.body, Some(json!({"q": "rust"})));
}

#[test]
fn test_unparseable_input_returns_none() {
    assert!(parse(Language::Javascript, "").is_none());
    assert!(parse(Language::Python, "requests are fun").is_none());
    assert!(parse(Language::Curl, "wget https://api.test").is_none());
}

#[test]
fn test_malformed_fragments_keep_defaults() {
    // broken headers literal and broken body are individually non-fatal
    let code = r#"
fetch('https://api.test/a', {
  method: 'POST',
  headers: { 'X-Ok': 'yes', oops },
  body: JSON.stringify({unterminated: )
});
"#;
    let parsed = parse(Language::Javascript, code).unwrap();
    assert_eq!(parsed.url, "https://api.test/a");
    assert_eq!(parsed.method, "POST");
    assert!(parsed.headers.is_empty());
    assert!(parsed.body.is_none());
}
