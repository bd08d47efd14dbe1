#![allow(clippy::unwrap_used, clippy::expect_used)]

use apiforge::spec::{flatten_endpoints, load_document, load_document_file, search, InvalidSpecError};
use std::io::Write;

const YAML_SPEC: &str = r#"openapi: 3.0.3
info:
  title: Booking API
  version: "2.1.0"
servers:
  - url: https://api.booking.test/v2
paths:
  /rooms:
    get:
      operationId: list_rooms
      summary: List available rooms
      parameters:
        - name: city
          in: query
          required: true
          schema: { type: string }
    post:
      operationId: create_room
      requestBody:
        content:
          application/json:
            schema:
              type: object
              properties:
                name: { type: string }
  /rooms/{id}:
    parameters:
      - name: id
        in: path
        required: true
        schema: { type: string }
    get:
      operationId: get_room
"#;

#[test]
fn test_load_yaml_and_json_give_identical_catalogs() {
    let from_yaml = load_document(YAML_SPEC).unwrap();

    let value: serde_json::Value = serde_yaml::from_str(YAML_SPEC).unwrap();
    let from_json = load_document(&serde_json::to_string(&value).unwrap()).unwrap();

    assert_eq!(from_yaml.title, "Booking API");
    assert_eq!(from_yaml.title, from_json.title);
    assert_eq!(from_yaml.base_url.as_deref(), Some("https://api.booking.test/v2"));

    let eps_yaml = flatten_endpoints(&from_yaml);
    let eps_json = flatten_endpoints(&from_json);
    let keys_yaml: Vec<String> = eps_yaml.iter().map(|e| e.key()).collect();
    let keys_json: Vec<String> = eps_json.iter().map(|e| e.key()).collect();
    assert_eq!(keys_yaml, keys_json);
    assert_eq!(
        keys_yaml,
        vec!["GET /rooms", "POST /rooms", "GET /rooms/{id}"]
    );
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("openapi.yaml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(YAML_SPEC.as_bytes()).unwrap();

    let doc = load_document_file(&path).unwrap();
    assert_eq!(flatten_endpoints(&doc).len(), 3);
}

#[test]
fn test_invalid_document_rejected() {
    let err = load_document(r#"{"foo": "bar"}"#).unwrap_err();
    assert_eq!(err, InvalidSpecError::MissingVersionMarker);

    // a marker alone is enough; an empty paths map yields an empty catalog
    let doc = load_document(r#"{"openapi": "3.0.0", "paths": {}}"#).unwrap();
    assert!(flatten_endpoints(&doc).is_empty());

    // missing paths is not an error either
    let doc = load_document(r#"{"swagger": "2.0"}"#).unwrap();
    assert!(flatten_endpoints(&doc).is_empty());
}

#[test]
fn test_flattening_preserves_source_order_not_alphabetical() {
    let doc = load_document(
        r#"{"openapi": "3.0.0", "paths": {
            "/b": {"get": {}},
            "/a": {"get": {}, "delete": {}}
        }}"#,
    )
    .unwrap();
    let keys: Vec<String> = flatten_endpoints(&doc).iter().map(|e| e.key()).collect();
    assert_eq!(keys, vec!["GET /b", "GET /a", "DELETE /a"]);
}

#[test]
fn test_duplicate_method_entries_last_wins() {
    // "get" and "GET" collapse onto the same endpoint key
    let doc = load_document(
        r#"{"openapi": "3.0.0", "paths": {
            "/x": {"get": {"summary": "first"}, "GET": {"summary": "second"}}
        }}"#,
    )
    .unwrap();
    let eps = flatten_endpoints(&doc);
    assert_eq!(eps.len(), 1);
    assert_eq!(eps[0].summary.as_deref(), Some("second"));
}

#[test]
fn test_malformed_path_items_degrade() {
    let doc = load_document(
        r#"{"openapi": "3.0.0", "paths": {
            "/ok": {"get": {}},
            "/broken": "not an object",
            "/also-ok": {"post": {"parameters": "not a list"}}
        }}"#,
    )
    .unwrap();
    let keys: Vec<String> = flatten_endpoints(&doc).iter().map(|e| e.key()).collect();
    assert_eq!(keys, vec!["GET /ok", "POST /also-ok"]);
}

#[test]
fn test_search_is_case_insensitive_and_order_preserving() {
    let doc = load_document(YAML_SPEC).unwrap();
    let eps = flatten_endpoints(&doc);

    assert_eq!(search(&eps, "").len(), 3);
    let rooms = search(&eps, "ROOMS");
    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[0].key(), "GET /rooms");

    assert_eq!(search(&eps, "available").len(), 1);
    assert_eq!(search(&eps, "create_room").len(), 1);
    assert!(search(&eps, "payments").is_empty());
}
