pub mod analysis;
pub mod conversion;
pub mod state;
pub mod structs;
pub mod types;

pub use state::{AvroConverter, DEFAULT_NAMESPACE};

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::avro::AvroType;
use crate::error::{ConvertFileError, TranslateError};

/// Record name used when no name can be derived from the input location.
pub const DEFAULT_ROOT_NAME: &str = "document";

/// Convert an in-memory JSON Schema into an Avro Schema.
pub fn jsons_to_avro(json_schema: &Value, name: &str, namespace: &str) -> AvroType {
    AvroConverter::with_namespace(namespace).translate(json_schema, name)
}

/// Convert JSON Schema text into pretty-printed Avro Schema text using the
/// default namespace.
pub fn convert_json_schema_to_avro(json_schema: &str, name: &str) -> Result<String, TranslateError> {
    AvroConverter::new().convert_str(json_schema, name)
}

/// Convert a JSON Schema file into an Avro Schema file.
///
/// This reads a JSON Schema file (from disk or HTTP), converts it to Avro,
/// and writes the `.avsc` text to `avro_schema_path` when given.
///
/// # Arguments
/// * `json_schema_file_path` - Path or URL of the input JSON Schema.
/// * `avro_schema_path` - Where the Avro schema will be written, if anywhere.
/// * `root_name` - Record name; defaults to the input's file stem.
/// * `namespace` - Namespace override.
///
/// # Returns
/// The rendered Avro schema text.
pub fn convert_jsons_to_avro(
    json_schema_file_path: &str,
    avro_schema_path: Option<&Path>,
    root_name: Option<&str>,
    namespace: Option<&str>,
) -> Result<String, ConvertFileError> {
    let content = if json_schema_file_path.starts_with("http") {
        tracing::debug!(url = json_schema_file_path, "fetching schema");
        reqwest::blocking::get(json_schema_file_path)?
            .error_for_status()?
            .text()?
    } else {
        fs::read_to_string(json_schema_file_path).map_err(|source| ConvertFileError::Read {
            path: json_schema_file_path.into(),
            source,
        })?
    };

    let stem = Path::new(json_schema_file_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(DEFAULT_ROOT_NAME);
    let name = root_name.unwrap_or(stem);

    let converter = namespace
        .map(AvroConverter::with_namespace)
        .unwrap_or_default();
    let avro = converter.convert_str(&content, name)?;

    if let Some(path) = avro_schema_path {
        fs::write(path, &avro).map_err(|source| ConvertFileError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(?path, "wrote Avro schema");
    }

    Ok(avro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn converts_file_named_after_stem() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("user-profile.json");
        let output = dir.path().join("out.avsc");
        fs::write(&input, r#"{"properties": {"id": {"type": "integer"}}}"#).unwrap();

        let text = convert_jsons_to_avro(input.to_str().unwrap(), Some(&output), None, None).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert_eq!(text, written);
        let value: Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["name"], "Userprofile");
        assert_eq!(value["namespace"], DEFAULT_NAMESPACE);
    }

    #[test]
    fn missing_input_reports_read_error() {
        let err = convert_jsons_to_avro("/definitely/not/here.json", None, None, None).unwrap_err();
        assert!(matches!(err, ConvertFileError::Read { .. }));
    }

    #[test]
    fn malformed_file_reports_translate_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.json");
        fs::write(&input, "not a valid json").unwrap();
        let err = convert_jsons_to_avro(input.to_str().unwrap(), None, Some("Bad"), None).unwrap_err();
        assert!(matches!(
            err,
            ConvertFileError::Translate(TranslateError::MalformedInput(_))
        ));
    }
}
