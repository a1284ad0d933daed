//! Representative example payloads from derived JSON Schemas.
//!
//! Endpoint metadata wants a structurally valid instance of each declared
//! shape without running anybody's constructor. The shape's derived
//! [`schemars`] schema is the type descriptor; this module walks it and
//! builds the zero-ish value: empty strings, zero numbers, false booleans,
//! empty collections, recursing into nested records.
//!
//! Synthesis never fails: anything the walk cannot make sense of degrades
//! to `null` for that position. A bad example must never stop a route from
//! registering.
//!
//! # Example
//!
//! ```rust
//! use schemars::JsonSchema;
//! use serde_json::json;
//!
//! #[derive(JsonSchema)]
//! struct CreateOrder {
//!     id: String,
//!     quantity: i32,
//! }
//!
//! let example = keryx_docs::example::of::<CreateOrder>();
//! assert_eq!(example, json!({"id": "", "quantity": 0}));
//! ```

use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde_json::{json, Map, Value};

/// Nesting depth at which the walk gives up on a position.
///
/// Recursive shapes reference themselves through `$defs`; the cap turns the
/// cycle into a `null` leaf instead of unbounded recursion.
const RECURSION_LIMIT: usize = 16;

/// Builds a representative instance of `T` from its derived schema.
#[must_use]
pub fn of<T: JsonSchema>() -> Value {
    let schema = SchemaGenerator::default().into_root_schema_for::<T>();
    from_schema(&schema)
}

/// Builds a representative instance from an already-generated schema.
#[must_use]
pub fn from_schema(schema: &Schema) -> Value {
    let root = schema.as_value();
    let defs = root.get("$defs").and_then(Value::as_object);
    synthesize(root, defs, 0)
}

fn synthesize(node: &Value, defs: Option<&Map<String, Value>>, depth: usize) -> Value {
    if depth > RECURSION_LIMIT {
        tracing::trace!("example synthesis stopped at recursion limit");
        return Value::Null;
    }

    // `true`/`false` schemas carry no structure to describe.
    let Some(node) = node.as_object() else {
        return Value::Null;
    };

    if let Some(reference) = node.get("$ref").and_then(Value::as_str) {
        if let Some(target) = reference
            .strip_prefix("#/$defs/")
            .and_then(|name| defs.and_then(|d| d.get(name)))
        {
            return synthesize(target, defs, depth + 1);
        }
        tracing::trace!("unresolvable schema reference: {}", reference);
        return Value::Null;
    }

    if let Some(value) = node.get("const") {
        return value.clone();
    }
    if let Some(first) = node.get("enum").and_then(Value::as_array).and_then(|v| v.first()) {
        return first.clone();
    }

    // Nullable shapes arrive as anyOf/oneOf with a null arm; take the first
    // arm that describes an actual value.
    for combinator in ["anyOf", "oneOf"] {
        if let Some(arms) = node.get(combinator).and_then(Value::as_array) {
            return arms
                .iter()
                .find(|arm| !is_null_schema(arm))
                .map_or(Value::Null, |arm| synthesize(arm, defs, depth + 1));
        }
    }

    match primary_type(node) {
        Some("string") => string_example(node),
        Some("integer" | "number") => json!(0),
        Some("boolean") => json!(false),
        Some("array") => json!([]),
        Some("object") => object_example(node, defs, depth),
        Some(_) => Value::Null,
        None if node.contains_key("properties") => object_example(node, defs, depth),
        None => Value::Null,
    }
}

/// Extracts the schema's effective type, skipping a `"null"` arm when the
/// type is a nullable union like `["string", "null"]`.
fn primary_type(node: &Map<String, Value>) -> Option<&str> {
    match node.get("type") {
        Some(Value::String(ty)) => Some(ty.as_str()),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .find(|ty| *ty != "null")
            .or(Some("null")),
        _ => None,
    }
}

fn string_example(node: &Map<String, Value>) -> Value {
    match node.get("format").and_then(Value::as_str) {
        Some("date-time") => json!("1970-01-01T00:00:00Z"),
        Some("date") => json!("1970-01-01"),
        Some("uuid") => json!("00000000-0000-0000-0000-000000000000"),
        _ => json!(""),
    }
}

fn object_example(
    node: &Map<String, Value>,
    defs: Option<&Map<String, Value>>,
    depth: usize,
) -> Value {
    let mut example = Map::new();
    if let Some(properties) = node.get("properties").and_then(Value::as_object) {
        for (name, property) in properties {
            example.insert(name.clone(), synthesize(property, defs, depth + 1));
        }
    }
    Value::Object(example)
}

fn is_null_schema(node: &Value) -> bool {
    node.as_object()
        .and_then(|o| o.get("type"))
        .and_then(Value::as_str)
        == Some("null")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct CreateOrder {
        id: String,
        quantity: i32,
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Address {
        street: String,
        zip_code: u32,
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Customer {
        name: String,
        shipping: Address,
        active: bool,
        tags: Vec<String>,
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Sparse {
        note: Option<String>,
        fallback: Option<Address>,
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    enum OrderStatus {
        Pending,
        Shipped,
        Cancelled,
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Audit {
        recorded_at: DateTime<Utc>,
    }

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct TreeNode {
        name: String,
        child: Option<Box<TreeNode>>,
    }

    #[test]
    fn test_flat_struct() {
        let example = of::<CreateOrder>();
        assert_eq!(example, json!({"id": "", "quantity": 0}));
    }

    #[test]
    fn test_nested_struct_recurses() {
        let example = of::<Customer>();
        assert_eq!(example["name"], "");
        assert_eq!(example["active"], false);
        assert_eq!(example["tags"], json!([]));
        assert_eq!(example["shipping"], json!({"street": "", "zip_code": 0}));
    }

    #[test]
    fn test_optional_fields_take_inner_shape() {
        let example = of::<Sparse>();
        assert_eq!(example["note"], "");
        assert_eq!(example["fallback"], json!({"street": "", "zip_code": 0}));
    }

    #[test]
    fn test_enum_takes_first_member() {
        assert_eq!(of::<OrderStatus>(), json!("Pending"));
    }

    #[test]
    fn test_date_time_format_sentinel() {
        let example = of::<Audit>();
        assert_eq!(example["recorded_at"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_recursive_shape_terminates() {
        let example = of::<TreeNode>();
        assert_eq!(example["name"], "");
        // The self-referential arm bottoms out quietly.
        assert!(example.get("child").is_some());
    }

    #[test]
    fn test_scalar_roots() {
        assert_eq!(of::<String>(), json!(""));
        assert_eq!(of::<u64>(), json!(0));
        assert_eq!(of::<bool>(), json!(false));
        assert_eq!(of::<Vec<i32>>(), json!([]));
    }

    #[test]
    fn test_map_becomes_empty_object() {
        let example = of::<std::collections::HashMap<String, i32>>();
        assert_eq!(example, json!({}));
    }

    #[test]
    fn test_unresolvable_reference_degrades_to_null() {
        let schema = Schema::try_from(json!({"$ref": "#/$defs/Missing"})).unwrap();
        assert_eq!(from_schema(&schema), Value::Null);
    }

    #[test]
    fn test_hand_written_schema() {
        let schema = Schema::try_from(json!({
            "type": "object",
            "properties": {
                "token": {"type": "string", "format": "uuid"},
                "ratio": {"type": "number"}
            }
        }))
        .unwrap();

        let example = from_schema(&schema);
        assert_eq!(example["token"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(example["ratio"], 0);
    }
}
