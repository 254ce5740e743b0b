use jsonschema::{validator_for, Validator};
use serde_json::Value;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("{0}")]
    ValidationFailed(String),
}

/// Compile a JSON Schema (draft 2020-12) for repeated use.
pub fn compile(schema: &Value) -> Result<Validator, SchemaValidationError> {
    validator_for(schema).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))
}

/// Check an instance against a compiled schema, reporting the first violation.
pub fn check(validator: &Validator, instance: &Value) -> Result<(), SchemaValidationError> {
    let first = validator.iter_errors(instance).next().map(|e| e.to_string());
    match first {
        Some(err) => Err(SchemaValidationError::ValidationFailed(err)),
        None => Ok(()),
    }
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
///
/// On failure, carries the first violation reported by the validator.
pub fn validate_json(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator = compile(schema)?;
    check(&validator, instance)
}
