use jsonschema2avro::converter::{convert_json_schema_to_avro, jsons_to_avro, DEFAULT_NAMESPACE};
use jsonschema2avro::{AvroConverter, AvroType, Primitive, TranslateError};
use rstest::rstest;
use serde_json::{json, Value};
use std::fs;

fn fixture(stem: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/jsonschema/{stem}.json")).unwrap()
}

#[rstest]
#[case("user", "User")]
#[case("document_tags", "Document")]
#[case("nested_object", "Person")]
#[case("enum_status", "Ticket")]
#[case("formats_and_primitives", "Event")]
#[case("complex_user", "ComplexUser")]
#[case("array_of_objects", "Line")]
fn output_is_a_valid_avro_schema(#[case] stem: &str, #[case] name: &str) {
    let avsc = convert_json_schema_to_avro(&fixture(stem), name).unwrap();
    apache_avro::Schema::parse_str(&avsc).unwrap();
}

#[test]
fn optionality_matches_required_for_every_property() {
    let schema: Value = serde_json::from_str(&fixture("complex_user")).unwrap();
    let avro = jsons_to_avro(&schema["properties"]["profile"], "profile", DEFAULT_NAMESPACE);

    assert_eq!(avro.fields().len(), 2);
    let name = avro.field("name").unwrap();
    assert_eq!(name.field_type, AvroType::Primitive(Primitive::String));
    assert!(name.default.is_none());

    let contacts = avro.field("contacts").unwrap();
    assert!(contacts.is_optional());
    match &contacts.field_type {
        AvroType::Union(branches) => {
            assert_eq!(branches[0], AvroType::Primitive(Primitive::Null));
            assert!(matches!(branches[1], AvroType::Array { .. }));
        }
        other => panic!("expected union, got {other:?}"),
    }
}

#[test]
fn enum_symbols_are_verbatim() {
    let schema = json!({"type": "string", "enum": ["b", "a", "A-1", "b2"]});
    match AvroConverter::new().translate(&schema, "grade") {
        AvroType::Enum { name, symbols, .. } => {
            assert_eq!(name, "Grade");
            assert_eq!(symbols, ["b", "a", "A-1", "b2"]);
        }
        other => panic!("expected enum, got {other:?}"),
    }
}

#[test]
fn array_items_enum_is_named_after_item() {
    let schema = json!({"type": "array", "items": {"type": "string", "enum": ["x"]}});
    match AvroConverter::new().translate(&schema, "levels") {
        AvroType::Array { items, .. } => assert_eq!(items.name(), Some("LevelsItem")),
        other => panic!("expected array, got {other:?}"),
    }
}

#[test]
fn non_object_root_is_an_empty_record() {
    let avro = AvroConverter::new().translate(&json!("string"), "Scalar");
    assert_eq!(avro.name(), Some("Scalar"));
    assert!(avro.fields().is_empty());
}

#[test]
fn irrelevant_keys_are_ignored() {
    let plain = json!({"type": "integer"});
    let decorated = json!({
        "type": "integer",
        "minimum": 1,
        "properties": {"x": {"type": "string"}},
        "items": {"type": "string"},
        "enum": ["1"],
        "format": "date"
    });
    let converter = AvroConverter::new();
    assert_eq!(
        converter.translate(&plain, "n"),
        converter.translate(&decorated, "n")
    );
}

#[test]
fn malformed_text_never_yields_a_schema() {
    let err = convert_json_schema_to_avro("not a valid json", "Test").unwrap_err();
    let TranslateError::MalformedInput(inner) = &err;
    assert!(err.to_string().ends_with(&inner.to_string()));
}

#[test]
fn rendered_text_is_pretty_printed() {
    let avsc = convert_json_schema_to_avro(&fixture("user"), "User").unwrap();
    assert!(avsc.starts_with("{\n  \"type\": \"record\",\n  \"name\": \"User\""));
    assert!(avsc.contains(DEFAULT_NAMESPACE));
}
