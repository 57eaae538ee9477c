use serde_json::Value;

use crate::avro::{AvroField, AvroType, Primitive};
use crate::common::names::record_name;
use crate::converter::analysis::{classify, required_fields, SchemaKind};
use crate::converter::structs::{
    create_array_type, create_avro_record, optional_field, required_field,
};
use crate::converter::types::{json_schema_primitive_to_avro_type, json_schema_string_to_avro_type};

/// Suffix appended to an array's name to name its element type.
pub const ITEM_SUFFIX: &str = "Item";

/// Convert a JSON Schema node into an Avro type.
///
/// `name` names the record (or enum) this node becomes, if it becomes one.
/// For properties it is the field name.
pub fn json_type_to_avro_type(json_type: &Value, name: &str, namespace: &str) -> AvroType {
    match classify(json_type) {
        SchemaKind::Object => json_schema_object_to_avro_record(json_type, name, namespace),
        SchemaKind::Array { items } => json_schema_array_to_avro_array(items, name, namespace),
        SchemaKind::String { format, symbols } => {
            json_schema_string_to_avro_type(name, format, symbols)
        }
        kind => json_schema_primitive_to_avro_type(&kind),
    }
}

/// Convert a JSON schema object declaration to an Avro record.
///
/// Fields follow the order of `properties`. A property listed in `required`
/// keeps its bare type; any other becomes `[null, T]` with a `null` default.
pub fn json_schema_object_to_avro_record(
    json_object: &Value,
    name: &str,
    namespace: &str,
) -> AvroType {
    let required = required_fields(json_object);

    let fields: Vec<AvroField> = json_object
        .get("properties")
        .and_then(Value::as_object)
        .map(|props| {
            props
                .iter()
                .map(|(field_name, field_schema)| {
                    let field_type = json_type_to_avro_type(field_schema, field_name, namespace);
                    if required.contains(&field_name.as_str()) {
                        required_field(field_name, field_type)
                    } else {
                        optional_field(field_name, field_type)
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    create_avro_record(&record_name(name), namespace, fields)
}

/// Convert a JSON Schema array into an Avro array.
///
/// Elements are named `<name>Item`; without `items` the array holds strings.
pub fn json_schema_array_to_avro_array(
    items: Option<&Value>,
    name: &str,
    namespace: &str,
) -> AvroType {
    let item_type = match items {
        Some(items) => {
            json_type_to_avro_type(items, &format!("{name}{ITEM_SUFFIX}"), namespace)
        }
        None => AvroType::Primitive(Primitive::String),
    };
    create_array_type(item_type)
}
