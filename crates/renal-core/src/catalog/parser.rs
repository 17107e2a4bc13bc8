//! Catalog parsing from YAML/JSON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::types::{BaseAdvice, ContextNote, TroughBand, ValidationError};

use super::schema::validate_catalog_schema;

/// Errors that can occur when loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Catalog failed schema validation: {}", .0.join("; "))]
    SchemaError(Vec<String>),

    #[error("Message is blank: {0}")]
    EmptyMessage(String),
}

/// Messages reported for rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationMessages {
    pub missing_drug: String,
    pub invalid_weight: String,
    pub invalid_creatinine: String,
    pub invalid_trough: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            missing_drug: "Please choose a drug.".to_string(),
            invalid_weight: "Weight must be a positive number.".to_string(),
            invalid_creatinine: "Creatinine must be a positive number.".to_string(),
            invalid_trough: "Trough level must be zero or a positive number.".to_string(),
        }
    }
}

/// Drug-specific base suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionMessages {
    pub tacrolimus_low: String,
    pub tacrolimus_high: String,
    pub tacrolimus_within_range: String,
    pub cyclosporin: String,
    pub mycophenolate: String,
    pub generic: String,
}

impl Default for SuggestionMessages {
    fn default() -> Self {
        Self {
            tacrolimus_low: "Educational suggestion: trough appears low vs a typical 5–8 range; \
                discuss if a small upward adjustment is appropriate."
                .to_string(),
            tacrolimus_high: "Educational suggestion: trough appears high vs a typical 5–8 range; \
                discuss if a downward adjustment is appropriate."
                .to_string(),
            tacrolimus_within_range: "Educational suggestion: trough appears within a common \
                maintenance range; maintain and continue monitoring."
                .to_string(),
            cyclosporin: "Educational suggestion: ensure consistent timing relative to food; \
                review target levels with clinician."
                .to_string(),
            mycophenolate: "Educational suggestion: consider GI tolerance and adherence; \
                consult pharmacist/clinician."
                .to_string(),
            generic: "Educational suggestion: consult transplant pharmacist/clinician \
                regarding individualised dosing."
                .to_string(),
        }
    }
}

/// Contextual notes appended to a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteMessages {
    pub elevated_creatinine: String,
    pub extreme_weight: String,
}

impl Default for NoteMessages {
    fn default() -> Self {
        Self {
            elevated_creatinine: "Note: creatinine is elevated; kidney function/trends \
                should be reviewed clinically."
                .to_string(),
            extreme_weight: "Note: weight is at an extreme; dosing may require closer \
                professional review."
                .to_string(),
        }
    }
}

/// Every user-facing string the evaluator can produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageCatalog {
    pub validation: ValidationMessages,
    pub suggestions: SuggestionMessages,
    pub notes: NoteMessages,
}

impl MessageCatalog {
    /// Parse a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a catalog from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse a catalog file, choosing the format by extension.
    ///
    /// `.json` files are read as JSON; anything else as YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        tracing::debug!(path = %path.display(), json = is_json, "loading message catalog");

        if is_json {
            Self::from_json_file(path)
        } else {
            Self::from_yaml_file(path)
        }
    }

    fn from_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        // An empty YAML document deserializes to null; treat it as "no overrides".
        let value = if value.is_null() {
            serde_json::Value::Object(Default::default())
        } else {
            value
        };

        validate_catalog_schema(&value).map_err(CatalogError::SchemaError)?;

        let catalog: MessageCatalog = serde_json::from_value(value)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject messages that are blank once trimmed.
    fn validate(&self) -> Result<(), CatalogError> {
        for (key, message) in self.entries() {
            if message.trim().is_empty() {
                return Err(CatalogError::EmptyMessage(key.to_string()));
            }
        }
        Ok(())
    }

    /// All messages keyed by their dotted path.
    pub fn entries(&self) -> [(&'static str, &str); 12] {
        [
            ("validation.missing_drug", self.validation.missing_drug.as_str()),
            ("validation.invalid_weight", self.validation.invalid_weight.as_str()),
            ("validation.invalid_creatinine", self.validation.invalid_creatinine.as_str()),
            ("validation.invalid_trough", self.validation.invalid_trough.as_str()),
            ("suggestions.tacrolimus_low", self.suggestions.tacrolimus_low.as_str()),
            ("suggestions.tacrolimus_high", self.suggestions.tacrolimus_high.as_str()),
            ("suggestions.tacrolimus_within_range", self.suggestions.tacrolimus_within_range.as_str()),
            ("suggestions.cyclosporin", self.suggestions.cyclosporin.as_str()),
            ("suggestions.mycophenolate", self.suggestions.mycophenolate.as_str()),
            ("suggestions.generic", self.suggestions.generic.as_str()),
            ("notes.elevated_creatinine", self.notes.elevated_creatinine.as_str()),
            ("notes.extreme_weight", self.notes.extreme_weight.as_str()),
        ]
    }

    /// Wording for a validation failure.
    pub fn validation_message(&self, error: ValidationError) -> &str {
        match error {
            ValidationError::MissingDrug => &self.validation.missing_drug,
            ValidationError::InvalidWeight => &self.validation.invalid_weight,
            ValidationError::InvalidCreatinine => &self.validation.invalid_creatinine,
            ValidationError::InvalidTrough => &self.validation.invalid_trough,
        }
    }

    /// Wording for a base suggestion.
    pub fn advice_message(&self, advice: BaseAdvice) -> &str {
        match advice {
            BaseAdvice::Tacrolimus(TroughBand::Low) => &self.suggestions.tacrolimus_low,
            BaseAdvice::Tacrolimus(TroughBand::High) => &self.suggestions.tacrolimus_high,
            BaseAdvice::Tacrolimus(TroughBand::WithinRange) => {
                &self.suggestions.tacrolimus_within_range
            }
            BaseAdvice::Cyclosporin => &self.suggestions.cyclosporin,
            BaseAdvice::Mycophenolate => &self.suggestions.mycophenolate,
            BaseAdvice::Generic => &self.suggestions.generic,
        }
    }

    /// Wording for a contextual note.
    pub fn note_message(&self, note: ContextNote) -> &str {
        match note {
            ContextNote::ElevatedCreatinine => &self.notes.elevated_creatinine,
            ContextNote::ExtremeWeight => &self.notes.extreme_weight,
        }
    }
}
