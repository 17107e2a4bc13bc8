//! Evaluator: validates a submission and renders the outcome.
//!
//! Evaluation never fails. Bad input becomes `DosingOutcome::Errors`;
//! good input becomes a single `DosingOutcome::Suggestion` whose base text
//! is followed by any contextual notes, each separated by one space.

use crate::catalog::MessageCatalog;
use crate::rules::advise;
use crate::types::{Advice, DosingForm, DosingOutcome, ValidationError};
use crate::validation::validate;

/// Evaluates dosing submissions against a message catalog.
///
/// Immutable after construction; share it behind an `Arc` across threads.
#[derive(Debug, Clone, Default)]
pub struct DosingEvaluator {
    catalog: MessageCatalog,
}

impl DosingEvaluator {
    /// An evaluator with the built-in wording.
    pub fn new() -> Self {
        Self::default()
    }

    /// An evaluator with custom wording.
    pub fn with_catalog(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    /// Validate and apply rules without rendering text.
    pub fn assess(&self, form: &DosingForm) -> Result<Advice, Vec<ValidationError>> {
        validate(form).map(|request| advise(&request))
    }

    /// Evaluate a raw submission.
    pub fn evaluate_form(&self, form: &DosingForm) -> DosingOutcome {
        match self.assess(form) {
            Ok(advice) => DosingOutcome::Suggestion(self.render_advice(&advice)),
            Err(errors) => DosingOutcome::Errors(self.render_errors(&errors)),
        }
    }

    /// Evaluate individual fields where all three numbers were submitted.
    pub fn evaluate(
        &self,
        drug: Option<&str>,
        weight_kg: &str,
        creatinine_umol_l: &str,
        trough_level_ngml: &str,
    ) -> DosingOutcome {
        self.evaluate_form(&DosingForm::from_fields(
            drug,
            weight_kg,
            creatinine_umol_l,
            trough_level_ngml,
        ))
    }

    /// Render structured advice as suggestion text.
    pub fn render_advice(&self, advice: &Advice) -> String {
        let mut text = self.catalog.advice_message(advice.base).to_string();
        for note in &advice.notes {
            text.push(' ');
            text.push_str(self.catalog.note_message(*note));
        }
        text
    }

    /// Render validation errors as user-facing messages.
    pub fn render_errors(&self, errors: &[ValidationError]) -> Vec<String> {
        errors
            .iter()
            .map(|error| self.catalog.validation_message(*error).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseAdvice, ContextNote, TroughBand};

    #[test]
    fn test_render_joins_notes_with_single_space() {
        let evaluator = DosingEvaluator::new();
        let text = evaluator.render_advice(&Advice {
            base: BaseAdvice::Generic,
            notes: vec![ContextNote::ElevatedCreatinine, ContextNote::ExtremeWeight],
        });
        assert_eq!(
            text,
            "Educational suggestion: consult transplant pharmacist/clinician regarding individualised dosing. \
             Note: creatinine is elevated; kidney function/trends should be reviewed clinically. \
             Note: weight is at an extreme; dosing may require closer professional review."
        );
    }

    #[test]
    fn test_assess_returns_structured_advice() {
        let evaluator = DosingEvaluator::new();
        let advice = evaluator
            .assess(&DosingForm::from_fields(Some("tacrolimus"), "70", "90", "9"))
            .unwrap();
        assert_eq!(advice.base, BaseAdvice::Tacrolimus(TroughBand::High));
        assert!(advice.notes.is_empty());
    }

    #[test]
    fn test_custom_catalog_changes_wording_only() {
        let catalog = MessageCatalog::from_yaml(
            r#"
validation:
  missing_drug: "Select a medication."
suggestions:
  cyclosporin: "Take it at the same time relative to meals."
"#,
        )
        .unwrap();
        let evaluator = DosingEvaluator::with_catalog(catalog);

        assert_eq!(
            evaluator.evaluate(Some("cyclosporin"), "70", "90", "6"),
            DosingOutcome::Suggestion("Take it at the same time relative to meals.".to_string())
        );
        assert_eq!(
            evaluator.evaluate(None, "70", "90", "6"),
            DosingOutcome::Errors(vec!["Select a medication.".to_string()])
        );
    }
}
