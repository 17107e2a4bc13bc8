//! Core types for dosing evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An immunosuppressant the rule set knows about, or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drug {
    Tacrolimus,
    Cyclosporin,
    Mycophenolate,
    /// Any other non-empty drug name. Receives the generic suggestion.
    Other(String),
}

impl Drug {
    /// Map a raw token to a drug. Matching is exact and case-sensitive.
    pub fn parse(token: &str) -> Self {
        match token {
            "tacrolimus" => Drug::Tacrolimus,
            "cyclosporin" => Drug::Cyclosporin,
            "mycophenolate" => Drug::Mycophenolate,
            other => Drug::Other(other.to_string()),
        }
    }

    /// The token this drug is submitted as.
    pub fn as_str(&self) -> &str {
        match self {
            Drug::Tacrolimus => "tacrolimus",
            Drug::Cyclosporin => "cyclosporin",
            Drug::Mycophenolate => "mycophenolate",
            Drug::Other(name) => name,
        }
    }

    /// Whether this is one of the enumerated drugs.
    pub fn is_known(&self) -> bool {
        !matches!(self, Drug::Other(_))
    }

    /// The enumerated drugs, in the order they are offered on the form.
    pub fn known() -> [Drug; 3] {
        [Drug::Tacrolimus, Drug::Cyclosporin, Drug::Mycophenolate]
    }
}

impl fmt::Display for Drug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw dosing form submission.
///
/// Field names follow the HTML form, so this deserializes directly from
/// `application/x-www-form-urlencoded` bodies. A missing field is `None`,
/// which is distinct from a field submitted empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DosingForm {
    #[serde(default)]
    pub drug: Option<String>,

    #[serde(default, rename = "weightKg")]
    pub weight_kg: Option<String>,

    #[serde(default, rename = "creatinineUmolL")]
    pub creatinine_umol_l: Option<String>,

    #[serde(default, rename = "troughLevelNgmL")]
    pub trough_level_ngml: Option<String>,
}

impl DosingForm {
    /// Build a form where every numeric field was submitted.
    pub fn from_fields(
        drug: Option<&str>,
        weight_kg: &str,
        creatinine_umol_l: &str,
        trough_level_ngml: &str,
    ) -> Self {
        Self {
            drug: drug.map(str::to_string),
            weight_kg: Some(weight_kg.to_string()),
            creatinine_umol_l: Some(creatinine_umol_l.to_string()),
            trough_level_ngml: Some(trough_level_ngml.to_string()),
        }
    }
}

/// A validated dosing request. All numeric fields are finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosingRequest {
    pub drug: Drug,

    #[serde(rename = "weightKg")]
    pub weight_kg: f64,

    #[serde(rename = "creatinineUmolL")]
    pub creatinine_umol_l: f64,

    #[serde(rename = "troughLevelNgmL")]
    pub trough_level_ngml: f64,
}

/// A violated input constraint. Declaration order is reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    MissingDrug,
    InvalidWeight,
    InvalidCreatinine,
    InvalidTrough,
}

/// Where a tacrolimus trough falls relative to the 5-8 ng/mL band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TroughBand {
    Low,
    WithinRange,
    High,
}

/// The drug-specific part of a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "band")]
pub enum BaseAdvice {
    Tacrolimus(TroughBand),
    Cyclosporin,
    Mycophenolate,
    Generic,
}

/// A contextual annotation appended after the base advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextNote {
    ElevatedCreatinine,
    ExtremeWeight,
}

impl ContextNote {
    /// All notes, in the order they are appended.
    pub const ALL: [ContextNote; 2] = [ContextNote::ElevatedCreatinine, ContextNote::ExtremeWeight];
}

/// A suggestion before it is rendered to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub base: BaseAdvice,

    #[serde(default)]
    pub notes: Vec<ContextNote>,
}

/// The result of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "value")]
pub enum DosingOutcome {
    /// One message per violated constraint, never empty.
    Errors(Vec<String>),

    /// Advisory text for a fully valid request.
    Suggestion(String),
}

impl DosingOutcome {
    pub fn is_suggestion(&self) -> bool {
        matches!(self, DosingOutcome::Suggestion(_))
    }

    pub fn is_errors(&self) -> bool {
        matches!(self, DosingOutcome::Errors(_))
    }

    /// The suggestion text, if any.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            DosingOutcome::Suggestion(text) => Some(text),
            DosingOutcome::Errors(_) => None,
        }
    }

    /// The validation messages, empty for a suggestion.
    pub fn errors(&self) -> &[String] {
        match self {
            DosingOutcome::Errors(errors) => errors,
            DosingOutcome::Suggestion(_) => &[],
        }
    }
}
