//! Input validation.
//!
//! All four checks run independently and accumulate, so a submission with
//! several bad fields reports every one of them in a single pass.

use crate::numeric::coerce;
use crate::types::{DosingForm, DosingRequest, Drug, ValidationError};

/// Validate a raw submission into a typed request.
///
/// Errors come back in reporting order: missing drug, weight, creatinine,
/// trough.
pub fn validate(form: &DosingForm) -> Result<DosingRequest, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let drug = form
        .drug
        .as_deref()
        .filter(|name| !name.is_empty())
        .map(Drug::parse);
    if drug.is_none() {
        errors.push(ValidationError::MissingDrug);
    }

    let weight_kg = coerce(form.weight_kg.as_deref()).filter(|w| w.is_finite() && *w > 0.0);
    if weight_kg.is_none() {
        errors.push(ValidationError::InvalidWeight);
    }

    let creatinine_umol_l =
        coerce(form.creatinine_umol_l.as_deref()).filter(|c| c.is_finite() && *c > 0.0);
    if creatinine_umol_l.is_none() {
        errors.push(ValidationError::InvalidCreatinine);
    }

    let trough_level_ngml =
        coerce(form.trough_level_ngml.as_deref()).filter(|t| t.is_finite() && *t >= 0.0);
    if trough_level_ngml.is_none() {
        errors.push(ValidationError::InvalidTrough);
    }

    match (drug, weight_kg, creatinine_umol_l, trough_level_ngml) {
        (Some(drug), Some(weight_kg), Some(creatinine_umol_l), Some(trough_level_ngml)) => {
            Ok(DosingRequest {
                drug,
                weight_kg,
                creatinine_umol_l,
                trough_level_ngml,
            })
        }
        _ => Err(errors),
    }
}
