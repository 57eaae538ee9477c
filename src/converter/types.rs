use serde_json::Value;

use crate::avro::{AvroType, Primitive};
use crate::common::names::enum_name;
use crate::converter::analysis::SchemaKind;
use crate::converter::structs::create_enum_type;

/// Convert a JSON Schema `string` node into an Avro type.
///
/// `enum` wins over `format`. Only the exact formats `date` and
/// `date-time` map to `long` (epoch milliseconds).
pub fn json_schema_string_to_avro_type(
    owner: &str,
    format: Option<&str>,
    symbols: Option<&[Value]>,
) -> AvroType {
    if let Some(values) = symbols {
        return create_enum_type(&enum_name(owner), enum_symbols(values));
    }

    match format {
        Some("date" | "date-time") => AvroType::Primitive(Primitive::Long),
        _ => AvroType::Primitive(Primitive::String),
    }
}

/// Convert a scalar JSON Schema kind into an Avro primitive.
///
/// Structured kinds never reach here; they fall back to `string` like any
/// unrecognized type.
pub fn json_schema_primitive_to_avro_type(kind: &SchemaKind<'_>) -> AvroType {
    let primitive = match kind {
        SchemaKind::Integer => Primitive::Int,
        SchemaKind::Number => Primitive::Double,
        SchemaKind::Boolean => Primitive::Boolean,
        SchemaKind::Null => Primitive::Null,
        _ => Primitive::String,
    };
    AvroType::Primitive(primitive)
}

/// Enum symbols in document order. Non-string members keep their JSON text.
fn enum_symbols(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}
