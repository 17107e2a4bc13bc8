//! JSON Schema validation for message catalogs.
//!
//! Catalog files are checked against the embedded schema before they are
//! deserialized, so unknown keys and empty strings are reported with the
//! path that caused them.

use std::sync::OnceLock;

/// Embedded catalog schema (loaded at compile time).
const CATALOG_SCHEMA_JSON: &str = include_str!("../../schema/catalog.schema.json");

/// Compiled validator (initialized once, reused).
static COMPILED_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

fn get_validator() -> Result<&'static jsonschema::Validator, String> {
    COMPILED_SCHEMA
        .get_or_init(|| {
            let schema_value: serde_json::Value = serde_json::from_str(CATALOG_SCHEMA_JSON)
                .map_err(|e| format!("Invalid schema JSON: {}", e))?;

            jsonschema::options()
                .build(&schema_value)
                .map_err(|e| format!("Failed to compile schema: {}", e))
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Validate a catalog document against the schema.
///
/// Returns every violation, each suffixed with its location in the document.
pub fn validate_catalog_schema(catalog_json: &serde_json::Value) -> Result<(), Vec<String>> {
    let validator = get_validator().map_err(|e| vec![e])?;

    let errors: Vec<String> = validator
        .iter_errors(catalog_json)
        .map(|e| format!("{} at {}", e, e.instance_path))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_valid() {
        assert!(validate_catalog_schema(&serde_json::json!({})).is_ok());
    }

    #[test]
    fn test_partial_override_is_valid() {
        let value = serde_json::json!({
            "suggestions": { "generic": "Ask your transplant team." },
            "notes": { "extreme_weight": "Note: check weight-based dosing." }
        });
        assert!(validate_catalog_schema(&value).is_ok());
    }

    #[test]
    fn test_unknown_key_fails() {
        let value = serde_json::json!({
            "suggestions": { "sirolimus": "Not a known drug message" }
        });
        assert!(validate_catalog_schema(&value).is_err());
    }

    #[test]
    fn test_unknown_section_fails() {
        let value = serde_json::json!({ "thresholds": {} });
        assert!(validate_catalog_schema(&value).is_err());
    }

    #[test]
    fn test_empty_message_fails() {
        let value = serde_json::json!({
            "validation": { "missing_drug": "" }
        });
        let errors = validate_catalog_schema(&value).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("/validation/missing_drug")));
    }

    #[test]
    fn test_non_string_message_fails() {
        let value = serde_json::json!({
            "notes": { "elevated_creatinine": 150 }
        });
        assert!(validate_catalog_schema(&value).is_err());
    }
}
