use pretty_assertions::assert_eq;
use quid6_instruments::classify::{CompositeScores, ScoreInput};
use quid6_instruments::{Diagnosis, InstrumentError, PathwayStep, ScheduleTarget, classify};

fn step_ids(steps: &[PathwayStep]) -> Vec<&'static str> {
    steps.iter().map(PathwayStep::as_str).collect()
}

#[test]
fn mixed_with_stress_not_greater_is_urge_predominant() {
    // SUI 4, UUI 6: both met, stress not strictly greater.
    let result = classify(&[2, 1, 1, 2, 2, 2]).unwrap();

    assert_eq!(
        result.message,
        "Urge-Predominant Mixed Urinary Incontinence<br />Schedule with APP"
    );
    assert_eq!(result.schedule_target, ScheduleTarget::App);
    assert_eq!(
        step_ids(&result.pathway_steps),
        ["introduction", "up-mui", "upath-1", "upath-2", "upath-3", "close"]
    );
}

#[test]
fn stress_only() {
    let result = classify(&[3, 1, 1, 0, 0, 0]).unwrap();

    assert_eq!(
        result.message,
        "Stress Urinary Incontinence<br />Schedule with surgeon"
    );
    assert_eq!(result.schedule_target, ScheduleTarget::Surgeon);
    assert_eq!(result.diagnosis, Diagnosis::Stress);
    assert_eq!(
        step_ids(&result.pathway_steps),
        ["introduction", "sui", "spath-1", "spath-2", "spath-3", "close"]
    );
}

#[test]
fn urge_only() {
    let result = classify(&[0, 1, 0, 2, 2, 2]).unwrap();

    assert_eq!(
        result.message,
        "Urge Urinary Incontinence<br />Schedule with APP"
    );
    assert_eq!(result.schedule_target, ScheduleTarget::App);
    assert_eq!(
        step_ids(&result.pathway_steps),
        ["introduction", "uui", "upath-1", "upath-2", "upath-3", "close"]
    );
}

#[test]
fn all_zero_has_no_pathway() {
    let result = classify(&[0, 0, 0, 0, 0, 0]).unwrap();

    assert_eq!(
        result.message,
        "No clear predominance; further evaluation may be needed<br />Schedule with APP"
    );
    assert_eq!(result.schedule_target, ScheduleTarget::App);
    assert!(result.pathway_steps.is_empty());
}

#[test]
fn stress_predominant_mixed_goes_to_surgeon() {
    // SUI 9, UUI 6.
    let result = classify(&[3, 3, 3, 2, 2, 2]).unwrap();

    assert_eq!(result.diagnosis, Diagnosis::StressPredominantMixed);
    assert_eq!(
        result.message,
        "Stress-Predominant Mixed Urinary Incontinence<br />Schedule with surgeon"
    );
    assert_eq!(result.schedule_target, ScheduleTarget::Surgeon);
    assert_eq!(
        step_ids(&result.pathway_steps),
        ["introduction", "sp-mui", "spath-1", "spath-2", "spath-3", "close"]
    );
}

#[test]
fn urge_predominant_mixed_when_urge_higher() {
    // SUI 6, UUI 7.
    let result = classify(&[3, 2, 1, 3, 3, 1]).unwrap();

    assert_eq!(result.diagnosis, Diagnosis::UrgePredominantMixed);
    assert_eq!(result.composite, CompositeScores { sui: 6, uui: 7 });
}

#[test]
fn tie_above_both_thresholds_is_urge_predominant() {
    let ties: [[i64; 6]; 3] = [[3, 3, 1, 3, 3, 1], [4, 4, 4, 4, 4, 4], [2, 2, 2, 2, 2, 2]];
    for scores in ties {
        let result = classify(&scores).unwrap();
        assert_eq!(result.composite.sui, result.composite.uui);
        assert_eq!(result.diagnosis, Diagnosis::UrgePredominantMixed);
    }
}

#[test]
fn wrong_length_is_rejected() {
    let err = classify(&[1, 1, 1]).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::InvalidInput {
            expected: 6,
            actual: 3
        }
    ));

    for len in [0, 5, 7, 12] {
        let scores: Vec<i64> = vec![1; len];
        assert!(matches!(
            classify(&scores),
            Err(InstrumentError::InvalidInput { actual, .. }) if actual == len
        ));
    }
}

#[test]
fn stress_threshold_boundary() {
    let at = classify(&[2, 1, 1, 0, 0, 0]).unwrap();
    assert!(at.composite.has_sui());
    assert_eq!(at.diagnosis, Diagnosis::Stress);

    let below = classify(&[1, 1, 1, 0, 0, 0]).unwrap();
    assert!(!below.composite.has_sui());
    assert_eq!(below.diagnosis, Diagnosis::NoClearPredominance);
}

#[test]
fn urge_threshold_boundary() {
    let at = classify(&[0, 0, 0, 2, 2, 2]).unwrap();
    assert!(at.composite.has_uui());
    assert_eq!(at.diagnosis, Diagnosis::Urge);

    let below = classify(&[0, 0, 0, 2, 2, 1]).unwrap();
    assert!(!below.composite.has_uui());
    assert_eq!(below.diagnosis, Diagnosis::NoClearPredominance);
}

#[test]
fn composite_sums_to_total() {
    let inputs: [[i64; 6]; 5] = [
        [0, 0, 0, 0, 0, 0],
        [4, 3, 2, 1, 0, 4],
        [1, 2, 3, 4, 0, 1],
        [-1, 2, 0, 9, 0, 3],
        [4, 4, 4, 4, 4, 4],
    ];
    for scores in inputs {
        let composite = ScoreInput::new(&scores).unwrap().composite();
        assert_eq!(composite.total(), scores.iter().sum::<i64>());
    }
}

#[test]
fn classification_is_repeatable() {
    let scores: [i64; 6] = [1, 3, 0, 2, 4, 1];
    assert_eq!(classify(&scores).unwrap(), classify(&scores).unwrap());
}

#[test]
fn out_of_scale_values_are_not_validated() {
    let result = classify(&[-5, 10, 0, 0, 0, -1]).unwrap();
    assert_eq!(result.composite, CompositeScores { sui: 5, uui: -1 });
    assert_eq!(result.diagnosis, Diagnosis::Stress);
}

#[test]
fn message_joins_diagnosis_and_recommendation() {
    let result = classify(&[4, 4, 4, 0, 0, 0]).unwrap();
    assert_eq!(
        result.message,
        format!("{}<br />{}", result.diagnosis.label(), result.recommendation)
    );
}

#[test]
fn result_serializes_with_step_identifiers() {
    let result = classify(&[3, 1, 1, 0, 0, 0]).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["scheduleTarget"], "surgeon");
    assert_eq!(json["diagnosis"], "stress");
    assert_eq!(
        json["pathwaySteps"],
        serde_json::json!(["introduction", "sui", "spath-1", "spath-2", "spath-3", "close"])
    );
    assert_eq!(json["composite"], serde_json::json!({ "sui": 5, "uui": 0 }));
}

#[test]
fn every_step_serializes_as_its_identifier() {
    for step in PathwayStep::ALL {
        assert_eq!(serde_json::to_value(step).unwrap(), step.as_str());
        let back: PathwayStep = serde_json::from_value(step.as_str().into()).unwrap();
        assert_eq!(back, step);
    }
}

#[test]
fn extreme_scores_saturate_instead_of_overflowing() {
    let result = classify(&[i64::MAX, 1, 0, 0, 0, 0]).unwrap();
    assert_eq!(result.composite.sui, i64::MAX);
    assert_eq!(result.diagnosis, Diagnosis::Stress);

    let low = classify(&[0, 0, 0, i64::MIN, -1, 0]).unwrap();
    assert_eq!(low.composite.uui, i64::MIN);
    assert_eq!(low.composite.total(), i64::MIN);
}
