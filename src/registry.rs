//! Schema documents stored by (type, version), instance validation, and
//! Avro derivation from stored documents.

pub mod store;
pub mod validation;

pub use store::{JsonFileStore, MemoryStore, NewSchema, SchemaEntry, SchemaStore};
pub use validation::{validate_instance, ValidationReport};

use serde_json::Value;

use crate::common::hash::fingerprint;
use crate::converter::AvroConverter;
use crate::error::RegistryError;

/// Request to store a JSON Schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRequest {
    pub schema_type: String,
    pub version: String,
    pub schema_content: String,
}

/// Request to validate a JSON instance against a stored schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub schema_type: String,
    pub version: String,
    pub json_data: String,
}

pub struct SchemaRegistry<S> {
    store: S,
    converter: AvroConverter,
}

impl<S: SchemaStore> SchemaRegistry<S> {
    pub fn new(store: S) -> Self {
        Self::with_converter(store, AvroConverter::new())
    }

    pub fn with_converter(store: S, converter: AvroConverter) -> Self {
        Self { store, converter }
    }

    /// Store a schema document after checking it is JSON and its key is free.
    pub fn save_schema(&mut self, request: SchemaRequest) -> Result<SchemaEntry, RegistryError> {
        let document: Value = serde_json::from_str(&request.schema_content)
            .map_err(|e| RegistryError::InvalidSchema(e.to_string()))?;

        if self.store.exists(&request.schema_type, &request.version) {
            return Err(RegistryError::AlreadyExists {
                schema_type: request.schema_type,
                version: request.version,
            });
        }

        let entry = self.store.insert(NewSchema {
            fingerprint: fingerprint(&document),
            schema_type: request.schema_type,
            version: request.version,
            schema_content: request.schema_content,
        })?;
        tracing::info!(
            id = entry.id,
            schema_type = %entry.schema_type,
            version = %entry.version,
            "stored schema"
        );
        Ok(entry)
    }

    pub fn find_schema(&self, schema_type: &str, version: &str) -> Result<&SchemaEntry, RegistryError> {
        self.store
            .find(schema_type, version)
            .ok_or_else(|| RegistryError::NotFound {
                schema_type: schema_type.to_string(),
                version: version.to_string(),
            })
    }

    /// Validate an instance against the stored schema for its key.
    pub fn validate_json(&self, request: &ValidationRequest) -> Result<ValidationReport, RegistryError> {
        let entry = self.find_schema(&request.schema_type, &request.version)?;
        let report = validate_instance(&entry.schema_content, &request.json_data);
        tracing::debug!(
            schema_type = %request.schema_type,
            version = %request.version,
            valid = report.valid,
            errors = report.errors.len(),
            "validated instance"
        );
        Ok(report)
    }

    /// Derive the Avro schema of a stored document; the record is named
    /// after the schema type.
    pub fn avro_schema(&self, schema_type: &str, version: &str) -> Result<String, RegistryError> {
        let entry = self.find_schema(schema_type, version)?;
        Ok(self.converter.convert_str(&entry.schema_content, schema_type)?)
    }

    pub fn list(&self) -> &[SchemaEntry] {
        self.store.entries()
    }
}
