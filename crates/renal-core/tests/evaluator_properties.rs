use proptest::prelude::*;
use renal_core::{evaluate, evaluate_form, DosingForm, DosingOutcome};

const MISSING_DRUG: &str = "Please choose a drug.";
const INVALID_WEIGHT: &str = "Weight must be a positive number.";
const INVALID_CREATININE: &str = "Creatinine must be a positive number.";
const INVALID_TROUGH: &str = "Trough level must be zero or a positive number.";

fn drug_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("tacrolimus".to_string()),
        Just("cyclosporin".to_string()),
        Just("mycophenolate".to_string()),
        "[A-Za-z][A-Za-z -]{0,20}",
    ]
}

fn positive() -> impl Strategy<Value = f64> {
    (1u32..1_000_000u32).prop_map(|n| f64::from(n) / 100.0)
}

fn non_negative() -> impl Strategy<Value = f64> {
    (0u32..100_000u32).prop_map(|n| f64::from(n) / 100.0)
}

/// A raw field paired with whether it should pass a `> 0` check.
fn raw_positive_field() -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        positive().prop_map(|v| (v.to_string(), true)),
        (0u32..1000u32).prop_map(|n| (format!("-{}", n), false)),
        Just(("0".to_string(), false)),
        Just(("Infinity".to_string(), false)),
        "[a-z]{1,6}".prop_map(|s| (s, false)),
    ]
}

proptest! {
    #[test]
    fn valid_inputs_always_suggest(
        drug in drug_name(),
        weight in positive(),
        creatinine in positive(),
        trough in non_negative(),
    ) {
        let outcome = evaluate(
            Some(&drug),
            &weight.to_string(),
            &creatinine.to_string(),
            &trough.to_string(),
        );
        prop_assert!(outcome.is_suggestion(), "got {:?}", outcome);
    }

    #[test]
    fn errors_list_exactly_the_violations_in_order(
        drug in prop_oneof![Just(None), Just(Some(String::new())), drug_name().prop_map(Some)],
        (weight, weight_ok) in raw_positive_field(),
        (creatinine, creatinine_ok) in raw_positive_field(),
        (trough, trough_ok) in prop_oneof![
            non_negative().prop_map(|v| (v.to_string(), true)),
            (1u32..1000u32).prop_map(|n| (format!("-{}", n), false)),
            "[a-z]{1,6}".prop_map(|s| (s, false)),
        ],
    ) {
        let drug_ok = drug.as_deref().is_some_and(|d| !d.is_empty());
        let outcome = evaluate(drug.as_deref(), &weight, &creatinine, &trough);

        let mut expected = Vec::new();
        if !drug_ok { expected.push(MISSING_DRUG.to_string()); }
        if !weight_ok { expected.push(INVALID_WEIGHT.to_string()); }
        if !creatinine_ok { expected.push(INVALID_CREATININE.to_string()); }
        if !trough_ok { expected.push(INVALID_TROUGH.to_string()); }

        if expected.is_empty() {
            prop_assert!(outcome.is_suggestion());
        } else {
            prop_assert_eq!(outcome, DosingOutcome::Errors(expected));
        }
    }

    #[test]
    fn evaluation_is_idempotent(
        drug in proptest::option::of(".{0,12}"),
        weight in ".{0,8}",
        creatinine in ".{0,8}",
        trough in ".{0,8}",
    ) {
        let first = evaluate(drug.as_deref(), &weight, &creatinine, &trough);
        let second = evaluate(drug.as_deref(), &weight, &creatinine, &trough);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn arbitrary_forms_never_panic(
        drug in proptest::option::of(".*"),
        weight in proptest::option::of(".*"),
        creatinine in proptest::option::of(".*"),
        trough in proptest::option::of(".*"),
    ) {
        let form = DosingForm {
            drug,
            weight_kg: weight,
            creatinine_umol_l: creatinine,
            trough_level_ngml: trough,
        };
        let outcome = evaluate_form(&form);
        prop_assert!(outcome.is_suggestion() != outcome.is_errors());
        if let DosingOutcome::Errors(errors) = outcome {
            prop_assert!(!errors.is_empty());
        }
    }
}

#[test]
fn weight_boundaries() {
    let note = "Note: weight is at an extreme";
    for weight in ["40", "120"] {
        let outcome = evaluate(Some("cyclosporin"), weight, "90", "6");
        assert!(!outcome.suggestion().unwrap().contains(note), "weight {weight}");
    }
    for weight in ["39.9", "120.1"] {
        let outcome = evaluate(Some("cyclosporin"), weight, "90", "6");
        assert!(outcome.suggestion().unwrap().contains(note), "weight {weight}");
    }
}

#[test]
fn creatinine_boundaries() {
    let note = "Note: creatinine is elevated";
    let at = evaluate(Some("mycophenolate"), "70", "150", "6");
    assert!(!at.suggestion().unwrap().contains(note));
    let above = evaluate(Some("mycophenolate"), "70", "150.1", "6");
    assert!(above.suggestion().unwrap().contains(note));
}

#[test]
fn trough_boundaries() {
    let cases = [
        ("4.99", "appears low"),
        ("5", "appears within a common maintenance range"),
        ("8", "appears within a common maintenance range"),
        ("8.01", "appears high"),
    ];
    for (trough, expected) in cases {
        let outcome = evaluate(Some("tacrolimus"), "70", "90", trough);
        assert!(
            outcome.suggestion().unwrap().contains(expected),
            "trough {trough}: {outcome:?}"
        );
    }
}

#[test]
fn blank_trough_counts_as_zero() {
    let outcome = evaluate(Some("tacrolimus"), "70", "90", "");
    assert!(outcome.suggestion().unwrap().contains("appears low"));
}
