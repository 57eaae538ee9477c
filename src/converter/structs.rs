use serde_json::Value;

use crate::avro::{AvroField, AvroType, Primitive};

/// Create an Avro record type.
///
/// A record is a structured type with named fields.
pub fn create_avro_record(name: &str, namespace: &str, fields: Vec<AvroField>) -> AvroType {
    AvroType::Record {
        r#type: "record".to_string(),
        name: name.to_string(),
        namespace: namespace.to_string(),
        fields,
    }
}

/// Create an Avro enum type. Symbols are kept verbatim.
pub fn create_enum_type(name: &str, symbols: Vec<String>) -> AvroType {
    AvroType::Enum {
        r#type: "enum".to_string(),
        name: name.to_string(),
        symbols,
    }
}

/// Create an Avro array type.
pub fn create_array_type(items: AvroType) -> AvroType {
    AvroType::Array {
        r#type: "array".to_string(),
        items: Box::new(items),
    }
}

/// Wrap a type in a union with `null`.
///
/// Avro uses this pattern to make fields nullable.
pub fn nullable(avro_type: AvroType) -> AvroType {
    AvroType::Union(vec![AvroType::Primitive(Primitive::Null), avro_type])
}

/// A field that must be present: bare type, no default.
pub fn required_field(name: &str, field_type: AvroType) -> AvroField {
    AvroField {
        name: name.to_string(),
        field_type,
        default: None,
    }
}

/// A field that may be absent: `[null, T]` defaulting to `null`.
pub fn optional_field(name: &str, field_type: AvroType) -> AvroField {
    AvroField {
        name: name.to_string(),
        field_type: nullable(field_type),
        default: Some(Value::Null),
    }
}
