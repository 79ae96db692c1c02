use fuzzy_credit::curves::{input_curves, output_curves};
use fuzzy_credit::variables::{Application, Credit, House, Salary};
use fuzzy_credit::{
    CreditEvaluator, Defuzzifier, Error, InferenceConfig, Inputs, Memberships, OutputDomain, DEFAULT_RESOLUTION,
};

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
}

#[test]
fn test_moderate_applicant() {
    let evaluation = CreditEvaluator::default()
        .evaluate(&Inputs::new(87_000., 4.5, 150_000., 45_000., 3.5))
        .unwrap();

    assert_eq!(evaluation.fuzzified.assets.named(), vec![("Low", 0.), ("Medium", 0.5), ("High", 0.)]);
    assert_eq!(evaluation.fuzzified.interest_rate.named(), vec![
        ("Low", 0.5),
        ("Medium", 0.75),
        ("High", 0.),
    ]);

    assert_close(evaluation.scores.house, 4.185626519925503);
    assert_close(evaluation.scores.application, 5.795807620926671);
    assert_close(evaluation.scores.credit, 468.80028787413573);
}

#[test]
fn test_strong_applicant_scores_higher() {
    let evaluator = CreditEvaluator::default();
    let strong = evaluator
        .evaluate(&Inputs::new(500_000., 9., 800_000., 90_000., 1.))
        .unwrap();
    let moderate = evaluator
        .evaluate(&Inputs::new(87_000., 4.5, 150_000., 45_000., 3.5))
        .unwrap();

    assert_close(strong.scores.credit, 922.4814028409238);
    assert!(strong.scores.credit > moderate.scores.credit);
    assert!(strong.scores.house > moderate.scores.house);
    assert!(strong.scores.application > moderate.scores.application);
}

#[test]
fn test_empty_outputs_fall_back_to_midpoints() {
    let defuzz = Defuzzifier::default();

    assert_eq!(defuzz.centroid(&Memberships::<Credit>::zero()), 500.);
    assert_eq!(defuzz.centroid(&Memberships::<House>::zero()), 5.);
    assert_eq!(defuzz.centroid(&Memberships::<Application>::zero()), 5.);

    assert_eq!(defuzz.centroid_named(std::iter::empty(), "credit"), Ok(500.));
    assert_eq!(defuzz.centroid_named([("Low", 0.)], "application"), Ok(5.));
}

#[test]
fn test_named_centroid_matches_typed_centroid() {
    let defuzz = Defuzzifier::default();
    let pairs = [("Very_low", 0.), ("Low", 0.3), ("Medium", 0.8), ("High", 0.5), ("Very_high", 0.1)];
    let credit = Memberships::<Credit>::from_named(pairs).unwrap();

    assert_close(defuzz.centroid(&credit), 538.0512813415339);
    assert_eq!(defuzz.centroid_named(pairs, "credit"), Ok(defuzz.centroid(&credit)));

    // Absent categories count as zero
    assert_eq!(defuzz.centroid_named(pairs[1..].iter().copied(), "credit"), Ok(defuzz.centroid(&credit)));
}

#[test]
fn test_named_centroid_errors() {
    let defuzz = Defuzzifier::default();

    assert_eq!(
        defuzz.centroid_named([("Low", 1.)], "salary"),
        Err(Error::UnknownDomain("salary".into()))
    );
    assert_eq!(
        defuzz.centroid_named([("Very High", 1.)], "house"),
        Err(Error::UnknownCategory {
            domain: "house",
            category: "Very High".into(),
        })
    );
    assert_eq!("Credit".parse::<OutputDomain>(), Err(Error::UnknownDomain("Credit".into())));
}

#[test]
fn test_missing_categories_are_rejected() {
    assert_eq!(
        Memberships::<Salary>::from_named([("Low", 0.5), ("Medium", 0.5), ("High", 0.)]),
        Err(Error::MissingCategory {
            domain: "salary",
            category: "Very High",
        })
    );
}

#[test]
fn test_resolution() {
    assert_eq!(Defuzzifier::default().resolution(), DEFAULT_RESOLUTION);
    assert_eq!(
        CreditEvaluator::new(&InferenceConfig::default().with_resolution(1)).unwrap_err(),
        Error::InvalidResolution(1)
    );

    let coarse = CreditEvaluator::new(&InferenceConfig::default().with_resolution(101)).unwrap();
    let fine = CreditEvaluator::default();
    let inputs = Inputs::new(87_000., 4.5, 150_000., 45_000., 3.5);

    let coarse = coarse.evaluate(&inputs).unwrap();
    let fine = fine.evaluate(&inputs).unwrap();

    // Same fuzzy stages, slightly different grids
    assert_eq!(coarse.credit, fine.credit);
    assert!((coarse.scores.credit - fine.scores.credit).abs() < 5.);
}

#[test]
fn test_aggregation_matches_centroid() {
    let defuzz = Defuzzifier::default();
    let evaluation = CreditEvaluator::default()
        .evaluate(&Inputs::new(87_000., 4.5, 150_000., 45_000., 3.5))
        .unwrap();

    let aggregation = defuzz.aggregated(&evaluation.credit);

    assert_eq!(aggregation.domain, OutputDomain::Credit);
    assert_eq!(aggregation.xs.len(), DEFAULT_RESOLUTION);
    assert_eq!(aggregation.centroid, evaluation.scores.credit);
    assert!(aggregation.clipped.iter().all(|term| term.strength > 0.));
}

#[test]
fn test_curves_cover_universe() {
    let salary = input_curves::<Salary>(DEFAULT_RESOLUTION);
    let credit = output_curves::<Credit>(DEFAULT_RESOLUTION);

    assert_eq!(salary.xs.first(), Some(&0.));
    assert_eq!(salary.xs.last(), Some(&100_000.));
    assert_eq!(credit.xs.last(), Some(&1000.));
    assert_eq!(credit.terms.len(), 5);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let inputs: Inputs = serde_json::from_str(
        r#"{"market_value": 87000, "location": 4.5, "assets": 150000, "salary": 45000, "interest_rate": 3.5}"#,
    )
    .unwrap();
    let config: InferenceConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config, InferenceConfig::default());

    let evaluation = CreditEvaluator::new(&config).unwrap().evaluate(&inputs).unwrap();
    let json = serde_json::to_value(&evaluation).unwrap();

    assert_eq!(json["fuzzified"]["location"]["Fair"], 0.8);
    assert_eq!(json["application"]["Medium"], 0.5);
    assert_eq!(json["scores"]["credit"], evaluation.scores.credit);
}
