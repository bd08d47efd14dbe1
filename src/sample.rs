//! Deterministic example synthesis for JSON-Schema-shaped type descriptions.
//!
//! `sample_schema` walks a schema and produces a concrete, plausible value
//! without any randomness, so identical input always yields identical output
//! and generated examples never flake. The walk is bounded by an explicit
//! depth accumulator rather than cycle detection: object identity is not
//! reliable across document copies, a depth cap is.

use chrono::{SecondsFormat, Utc};
use serde_json::{json, Map, Value};

/// Maximum recursion depth before the sampler gives up on a branch.
const MAX_SAMPLE_DEPTH: usize = 6;

const NIL_UUID: &str = "00000000-0000-0000-0000-000000000000";

/// Produce a deterministic example value for a schema.
///
/// Resolution order, first match wins:
///
/// 1. `example`, verbatim
/// 2. `default`, verbatim
/// 3. `const`, verbatim
/// 4. first `enum` entry
/// 5. depth guard (`null` past depth 6)
/// 6. type-directed synthesis: explicit `type`, else the first
///    `oneOf`/`anyOf` branch, else `object` when `allOf`/`properties`
///    are present, else the string fallback
///
/// This function never fails: unrecognized shapes degrade to `null` or the
/// string fallback so one malformed fragment of a large document cannot
/// block synthesis for the rest of the catalog.
pub fn sample_schema(schema: &Value) -> Value {
    sample_schema_at(schema, 0)
}

/// [`sample_schema`] with an explicit starting depth.
pub fn sample_schema_at(schema: &Value, depth: usize) -> Value {
    let Some(obj) = schema.as_object() else {
        // non-object schema node (null, bool, string...) carries no type info
        return Value::Null;
    };

    if let Some(example) = obj.get("example") {
        return example.clone();
    }
    if let Some(default) = obj.get("default") {
        return default.clone();
    }
    if let Some(constant) = obj.get("const") {
        return constant.clone();
    }
    if let Some(first) = obj.get("enum").and_then(Value::as_array).and_then(|e| e.first()) {
        return first.clone();
    }

    if depth > MAX_SAMPLE_DEPTH {
        return Value::Null;
    }

    let explicit_type = obj.get("type").and_then(Value::as_str);
    let ty = match explicit_type {
        Some(t) => t,
        None => {
            // untyped union: descend into the first branch
            if let Some(branch) = first_union_branch(obj) {
                return sample_schema_at(branch, depth + 1);
            }
            if obj.contains_key("allOf") || obj.contains_key("properties") {
                "object"
            } else {
                // untyped schemas are treated as strings
                "string"
            }
        }
    };

    match ty {
        "object" => sample_object(obj, depth),
        "array" => {
            let items = obj.get("items").cloned().unwrap_or_else(|| json!({}));
            Value::Array(vec![sample_schema_at(&items, depth + 1)])
        }
        "number" | "integer" => json!(0),
        "boolean" => json!(false),
        _ => sample_string(obj),
    }
}

fn first_union_branch(obj: &Map<String, Value>) -> Option<&Value> {
    obj.get("oneOf")
        .or_else(|| obj.get("anyOf"))
        .and_then(Value::as_array)
        .and_then(|branches| branches.first())
}

/// Sample an object schema, folding `allOf` members' properties in before
/// the schema's own so direct composition behaves like a flat object.
fn sample_object(obj: &Map<String, Value>, depth: usize) -> Value {
    let mut properties: Map<String, Value> = Map::new();
    if let Some(all_of) = obj.get("allOf").and_then(Value::as_array) {
        for member in all_of {
            if let Some(props) = member.get("properties").and_then(Value::as_object) {
                for (name, prop) in props {
                    properties.insert(name.clone(), prop.clone());
                }
            }
        }
    }
    if let Some(props) = obj.get("properties").and_then(Value::as_object) {
        for (name, prop) in props {
            properties.insert(name.clone(), prop.clone());
        }
    }

    let mut out = Map::new();
    for (name, prop) in &properties {
        let mut value = sample_schema_at(prop, depth + 1);
        if value.is_null() {
            value = zero_value(prop);
        }
        out.insert(name.clone(), value);
    }
    Value::Object(out)
}

/// Type-appropriate zero value used when recursion on a property came back
/// empty (depth guard, explicit null example). Whether the property is
/// required does not change the substitute.
fn zero_value(prop: &Value) -> Value {
    match prop.get("type").and_then(Value::as_str) {
        Some("number") | Some("integer") => json!(0),
        Some("boolean") => json!(false),
        Some("array") => json!([]),
        Some("object") => json!({}),
        _ => json!(""),
    }
}

/// Canned literals for string formats; everything unrecognized (including
/// `pattern`-only schemas) collapses to the literal `"string"`.
fn sample_string(obj: &Map<String, Value>) -> Value {
    match obj.get("format").and_then(Value::as_str) {
        Some("date-time") => json!(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        Some("date") => json!(Utc::now().format("%Y-%m-%d").to_string()),
        Some("email") => json!("user@example.com"),
        Some("uuid") => json!(NIL_UUID),
        Some("uri") | Some("url") => json!("https://example.com"),
        _ => json!("string"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_wins_over_enum() {
        let schema = json!({"example": "E", "enum": ["A", "B"]});
        assert_eq!(sample_schema(&schema), json!("E"));
    }

    #[test]
    fn test_default_and_const_precedence() {
        assert_eq!(sample_schema(&json!({"default": 7, "const": 9})), json!(7));
        assert_eq!(sample_schema(&json!({"const": 9, "enum": [1]})), json!(9));
    }

    #[test]
    fn test_enum_returns_first_element() {
        let schema = json!({"type": "string", "enum": ["metric", "imperial"]});
        assert_eq!(sample_schema(&schema), json!("metric"));
    }

    #[test]
    fn test_primitive_zeros() {
        assert_eq!(sample_schema(&json!({"type": "integer"})), json!(0));
        assert_eq!(sample_schema(&json!({"type": "number"})), json!(0));
        assert_eq!(sample_schema(&json!({"type": "boolean"})), json!(false));
    }

    #[test]
    fn test_untyped_schema_is_a_string() {
        assert_eq!(sample_schema(&json!({})), json!("string"));
        assert_eq!(sample_schema(&json!({"pattern": "^x+$"})), json!("string"));
    }

    #[test]
    fn test_string_formats() {
        assert_eq!(
            sample_schema(&json!({"type": "string", "format": "email"})),
            json!("user@example.com")
        );
        assert_eq!(
            sample_schema(&json!({"type": "string", "format": "uuid"})),
            json!(NIL_UUID)
        );
        assert_eq!(
            sample_schema(&json!({"type": "string", "format": "uri"})),
            json!("https://example.com")
        );
        let date = sample_schema(&json!({"type": "string", "format": "date"}));
        assert_eq!(date.as_str().unwrap().len(), 10);
    }

    #[test]
    fn test_object_with_properties() {
        let schema = json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "count": {"type": "integer"}
            }
        });
        assert_eq!(sample_schema(&schema), json!({"name": "string", "count": 0}));
    }

    #[test]
    fn test_all_of_composition() {
        let schema = json!({
            "allOf": [
                {"properties": {"a": {"type": "integer"}}},
                {"properties": {"b": {"type": "boolean"}}}
            ],
            "properties": {"c": {"type": "string"}}
        });
        assert_eq!(
            sample_schema(&schema),
            json!({"a": 0, "b": false, "c": "string"})
        );
    }

    #[test]
    fn test_array_wraps_single_item() {
        let schema = json!({"type": "array", "items": {"type": "integer"}});
        assert_eq!(sample_schema(&schema), json!([0]));
        // itemless arrays still produce one element
        assert_eq!(sample_schema(&json!({"type": "array"})), json!(["string"]));
    }

    #[test]
    fn test_union_takes_first_branch() {
        let schema = json!({
            "oneOf": [
                {"type": "object", "properties": {"kind": {"const": "x"}}},
                {"type": "integer"}
            ]
        });
        assert_eq!(sample_schema(&schema), json!({"kind": "x"}));
    }

    #[test]
    fn test_depth_guard_terminates_deep_nesting() {
        // build a property chain deeper than the guard
        let mut schema = json!({"type": "integer"});
        for _ in 0..20 {
            schema = json!({"type": "object", "properties": {"next": schema}});
        }
        let sampled = sample_schema(&schema);
        // terminated, and the truncated branch got the object zero value
        let mut cursor = &sampled;
        let mut hops = 0;
        while let Some(next) = cursor.get("next") {
            cursor = next;
            hops += 1;
        }
        assert!(hops <= MAX_SAMPLE_DEPTH + 1);
    }

    #[test]
    fn test_determinism() {
        let schema = json!({
            "type": "object",
            "properties": {
                "id": {"type": "string", "format": "uuid"},
                "tags": {"type": "array", "items": {"enum": ["a", "b"]}},
                "nested": {"properties": {"flag": {"type": "boolean"}}}
            }
        });
        assert_eq!(sample_schema(&schema), sample_schema(&schema));
    }

    #[test]
    fn test_null_example_substituted_in_object() {
        let schema = json!({
            "type": "object",
            "properties": {
                "n": {"type": "integer", "example": null},
                "s": {"example": null}
            }
        });
        assert_eq!(sample_schema(&schema), json!({"n": 0, "s": ""}));
    }
}
