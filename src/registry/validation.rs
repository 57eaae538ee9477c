use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of validating one JSON instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            valid: false,
            errors,
        }
    }

    fn failed(message: impl std::fmt::Display) -> Self {
        Self::invalid(vec![format!("Validation error: {message}")])
    }
}

/// Validate `instance` text against `schema` text with a draft 7 validator.
///
/// Unparseable text or an uncompilable schema is reported as an invalid
/// result rather than an error.
pub fn validate_instance(schema: &str, instance: &str) -> ValidationReport {
    let schema: Value = match serde_json::from_str(schema) {
        Ok(v) => v,
        Err(e) => return ValidationReport::failed(e),
    };
    let instance: Value = match serde_json::from_str(instance) {
        Ok(v) => v,
        Err(e) => return ValidationReport::failed(e),
    };
    let validator = match jsonschema::draft7::new(&schema) {
        Ok(v) => v,
        Err(e) => return ValidationReport::failed(e),
    };

    let errors: Vec<String> = validator
        .iter_errors(&instance)
        .map(|e| e.to_string())
        .collect();
    if errors.is_empty() {
        ValidationReport::valid()
    } else {
        ValidationReport::invalid(errors)
    }
}
