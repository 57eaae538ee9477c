use serde_json::Value;

use crate::avro::AvroType;
use crate::converter::conversion::json_type_to_avro_type;
use crate::error::TranslateError;

/// Namespace given to every record when none is configured.
pub const DEFAULT_NAMESPACE: &str = "org.example.generated";

/// Settings for converting JSON Schema → Avro Schema.
///
/// Holds no per-call state, so one converter can be shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvroConverter {
    pub namespace: String,
}

impl Default for AvroConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl AvroConverter {
    /// Create a new converter with default settings.
    pub fn new() -> Self {
        Self::with_namespace(DEFAULT_NAMESPACE)
    }

    pub fn with_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Translate a parsed JSON Schema node into an Avro type named after `name`.
    pub fn translate(&self, json_schema: &Value, name: &str) -> AvroType {
        json_type_to_avro_type(json_schema, name, &self.namespace)
    }

    /// Parse JSON Schema text and render the derived Avro schema as
    /// pretty-printed JSON.
    pub fn convert_str(&self, json_schema: &str, name: &str) -> Result<String, TranslateError> {
        let node: Value = serde_json::from_str(json_schema)?;
        Ok(self.translate(&node, name).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_text_is_an_error() {
        let err = AvroConverter::new()
            .convert_str("not a valid json", "Test")
            .unwrap_err();
        assert!(matches!(err, TranslateError::MalformedInput(_)));
        assert!(err
            .to_string()
            .starts_with("Error converting JSON Schema to Avro: "));
    }

    #[test]
    fn custom_namespace_applies_to_nested_records() {
        let converter = AvroConverter::with_namespace("com.acme");
        let text = converter
            .convert_str(
                r#"{"properties": {"inner": {"type": "object"}}}"#,
                "outer",
            )
            .unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["namespace"], "com.acme");
        assert_eq!(value["fields"][0]["type"][1]["namespace"], "com.acme");
    }
}
