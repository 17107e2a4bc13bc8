//! # renal-core
//!
//! Deterministic dosing suggestion evaluator for the renal transplant demo.
//!
//! Given a drug name and three raw numeric fields (weight, creatinine,
//! trough level), the evaluator either reports every invalid field or
//! produces one educational suggestion string. It is **not** clinical
//! decision support.
//!
//! ## Key Guarantees
//!
//! 1. **Total**: Every input produces an outcome; nothing panics
//! 2. **Deterministic**: Same input always produces same output
//! 3. **Pure**: No I/O and no mutable shared state during evaluation
//!
//! ## Example
//!
//! ```rust
//! use renal_core::{evaluate, DosingOutcome};
//!
//! match evaluate(Some("tacrolimus"), "70", "90", "3") {
//!     DosingOutcome::Suggestion(text) => assert!(text.contains("appears low")),
//!     DosingOutcome::Errors(errors) => panic!("unexpected errors: {:?}", errors),
//! }
//! ```

pub mod catalog;
pub mod evaluator;
pub mod numeric;
pub mod rules;
pub mod types;
pub mod validation;

// Re-export main types at crate root
pub use catalog::{CatalogError, MessageCatalog};
pub use evaluator::DosingEvaluator;
pub use types::{
    Advice, BaseAdvice, ContextNote, DosingForm, DosingOutcome, DosingRequest, Drug,
    TroughBand, ValidationError,
};

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_EVALUATOR: DosingEvaluator = DosingEvaluator::new();
}

/// Evaluate a dosing submission with the built-in wording.
///
/// This is the main entry point.
///
/// # Arguments
///
/// * `drug` - Drug token; `None` or empty is a validation error
/// * `weight_kg` - Raw weight, must be a positive number
/// * `creatinine_umol_l` - Raw creatinine, must be a positive number
/// * `trough_level_ngml` - Raw trough level, must be zero or positive
pub fn evaluate(
    drug: Option<&str>,
    weight_kg: &str,
    creatinine_umol_l: &str,
    trough_level_ngml: &str,
) -> DosingOutcome {
    DEFAULT_EVALUATOR.evaluate(drug, weight_kg, creatinine_umol_l, trough_level_ngml)
}

/// Evaluate a raw form submission with the built-in wording.
pub fn evaluate_form(form: &DosingForm) -> DosingOutcome {
    DEFAULT_EVALUATOR.evaluate_form(form)
}
