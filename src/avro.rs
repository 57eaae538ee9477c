use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Avro primitive type names produced by the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Null,
    Boolean,
    Int,
    Long,
    Double,
    String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AvroType {
    Primitive(Primitive),
    Record {
        #[serde(rename = "type")]
        r#type: String,
        name: String,
        namespace: String,
        fields: Vec<AvroField>,
    },
    Enum {
        #[serde(rename = "type")]
        r#type: String,
        name: String,
        symbols: Vec<String>,
    },
    Array {
        #[serde(rename = "type")]
        r#type: String,
        items: Box<AvroType>,
    },
    /// Only ever `[null, T]`, see [`crate::converter::structs::nullable`].
    Union(Vec<AvroType>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvroField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: AvroType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl AvroType {
    /// Name of a record or enum; `None` for anonymous types.
    pub fn name(&self) -> Option<&str> {
        match self {
            AvroType::Record { name, .. } | AvroType::Enum { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Fields of a record, empty for every other type.
    pub fn fields(&self) -> &[AvroField] {
        match self {
            AvroType::Record { fields, .. } => fields,
            _ => &[],
        }
    }

    pub fn field(&self, name: &str) -> Option<&AvroField> {
        self.fields().iter().find(|f| f.name == name)
    }
}

impl AvroField {
    /// A field is optional when it carries a `null` default.
    pub fn is_optional(&self) -> bool {
        matches!(self.default, Some(Value::Null))
    }
}

/// Pretty-printed Avro schema JSON, 2-space indented.
impl fmt::Display for AvroType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
