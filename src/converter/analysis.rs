use serde_json::Value;

/// How a JSON Schema node is interpreted, decided by its `type` keyword
/// plus the modifier keys valid for that type.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind<'a> {
    Object,
    Array {
        items: Option<&'a Value>,
    },
    String {
        format: Option<&'a str>,
        symbols: Option<&'a [Value]>,
    },
    Integer,
    Number,
    Boolean,
    Null,
    /// Unknown `type` string or a `type` that is not a string at all.
    Unrecognized,
}

/// Classify a JSON Schema node.
///
/// A node without `type`, including a node that is not an object, is an
/// object schema.
pub fn classify(json_type: &Value) -> SchemaKind<'_> {
    let declared = match json_type.get("type") {
        None => "object",
        Some(Value::String(t)) => t.as_str(),
        Some(_) => return SchemaKind::Unrecognized,
    };

    match declared {
        "object" => SchemaKind::Object,
        "array" => SchemaKind::Array {
            items: json_type.get("items"),
        },
        "string" => SchemaKind::String {
            format: json_type.get("format").and_then(Value::as_str),
            symbols: json_type
                .get("enum")
                .and_then(Value::as_array)
                .map(Vec::as_slice),
        },
        "integer" => SchemaKind::Integer,
        "number" => SchemaKind::Number,
        "boolean" => SchemaKind::Boolean,
        "null" => SchemaKind::Null,
        _ => SchemaKind::Unrecognized,
    }
}

/// Collect the `required` list of an object schema.
///
/// A missing or non-array `required` means no field is required.
pub fn required_fields(json_object: &Value) -> Vec<&str> {
    json_object
        .get("required")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}
