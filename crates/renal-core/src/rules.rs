//! Suggestion rules.
//!
//! Rules are fixed and ordered:
//! 1. The drug selects the base advice (tacrolimus also bands the trough)
//! 2. Contextual notes are checked in `ContextNote::ALL` order and appended
//!    when their condition holds, regardless of drug

use crate::types::{Advice, BaseAdvice, ContextNote, DosingRequest, Drug, TroughBand};

/// Lower edge of the typical tacrolimus maintenance band (ng/mL).
pub const TACROLIMUS_TROUGH_LOW: f64 = 5.0;

/// Upper edge of the typical tacrolimus maintenance band (ng/mL).
pub const TACROLIMUS_TROUGH_HIGH: f64 = 8.0;

/// Creatinine above this is flagged as elevated (µmol/L).
pub const CREATININE_ELEVATED_ABOVE: f64 = 150.0;

/// Weights strictly outside `[WEIGHT_MIN_KG, WEIGHT_MAX_KG]` are flagged.
pub const WEIGHT_MIN_KG: f64 = 40.0;
pub const WEIGHT_MAX_KG: f64 = 120.0;

/// Band a tacrolimus trough level. Both edges are within range.
pub fn trough_band(trough_level_ngml: f64) -> TroughBand {
    if trough_level_ngml < TACROLIMUS_TROUGH_LOW {
        TroughBand::Low
    } else if trough_level_ngml > TACROLIMUS_TROUGH_HIGH {
        TroughBand::High
    } else {
        TroughBand::WithinRange
    }
}

/// Select the drug-specific base advice.
pub fn base_advice(request: &DosingRequest) -> BaseAdvice {
    match request.drug {
        Drug::Tacrolimus => BaseAdvice::Tacrolimus(trough_band(request.trough_level_ngml)),
        Drug::Cyclosporin => BaseAdvice::Cyclosporin,
        Drug::Mycophenolate => BaseAdvice::Mycophenolate,
        Drug::Other(_) => BaseAdvice::Generic,
    }
}

impl ContextNote {
    /// Whether this note applies to the request.
    pub fn applies(&self, request: &DosingRequest) -> bool {
        match self {
            ContextNote::ElevatedCreatinine => {
                request.creatinine_umol_l > CREATININE_ELEVATED_ABOVE
            }
            ContextNote::ExtremeWeight => {
                request.weight_kg < WEIGHT_MIN_KG || request.weight_kg > WEIGHT_MAX_KG
            }
        }
    }
}

/// Apply every rule to a validated request.
pub fn advise(request: &DosingRequest) -> Advice {
    Advice {
        base: base_advice(request),
        notes: ContextNote::ALL
            .into_iter()
            .filter(|note| note.applies(request))
            .collect(),
    }
}
