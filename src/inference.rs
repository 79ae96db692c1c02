#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::config::InferenceConfig;
use crate::defuzzify::Defuzzifier;
use crate::error::Result;
use crate::fuzzify;
use crate::inputs::Inputs;
use crate::outputs::{Evaluation, Fuzzified, Scores};
use crate::rules::{APPLICATION_RULES, HOUSE_RULES, LOAN_PROFILE_RULES, LOAN_TERMS_RULES};
use crate::terms::Memberships;
use crate::variables::{Application, Assets, Credit, House, InterestRate, Location, MarketValue, Salary};

pub fn evaluate_house_rule(
    market: &Memberships<MarketValue>,
    location: &Memberships<Location>,
) -> Result<Memberships<House>> {
    HOUSE_RULES.eval(market, location)
}

pub fn evaluate_application_rule(
    assets: &Memberships<Assets>,
    salary: &Memberships<Salary>,
) -> Result<Memberships<Application>> {
    APPLICATION_RULES.eval(assets, salary)
}

/// Credit rules. `application` and `house` are the outputs of the two rule
/// sets above, not fuzzified crisp scores.
pub fn evaluate_loan_rule(
    salary: &Memberships<Salary>,
    interest: &Memberships<InterestRate>,
    application: &Memberships<Application>,
    house: &Memberships<House>,
) -> Result<Memberships<Credit>> {
    let terms = LOAN_TERMS_RULES.eval(salary, interest)?;
    let profile = LOAN_PROFILE_RULES.eval(application, house)?;

    terms.union(&profile)
}

pub fn fuzzify_inputs(inputs: &Inputs) -> Fuzzified {
    Fuzzified {
        market_value: fuzzify::market_value(inputs.market_value),
        location: fuzzify::location(inputs.location),
        assets: fuzzify::assets(inputs.assets),
        salary: fuzzify::salary(inputs.salary),
        interest_rate: fuzzify::interest_rate(inputs.interest_rate),
    }
}

/// Runs the whole pipeline: fuzzification, the three rule sets and centroid
/// defuzzification of house, application and credit.
///
/// Holds no state between calls besides its configuration.
#[derive(Clone, Debug, Default)]
pub struct CreditEvaluator {
    defuzzifier: Defuzzifier,
}

impl CreditEvaluator {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        Ok(Self {
            defuzzifier: Defuzzifier::new(config)?,
        })
    }

    pub fn defuzzifier(&self) -> &Defuzzifier {
        &self.defuzzifier
    }

    pub fn evaluate(&self, inputs: &Inputs) -> Result<Evaluation> {
        let fuzzified = fuzzify_inputs(inputs);

        let house = evaluate_house_rule(&fuzzified.market_value, &fuzzified.location)?;
        let application = evaluate_application_rule(&fuzzified.assets, &fuzzified.salary)?;

        debug!(?house, ?application, "house and application rules evaluated");

        let credit = evaluate_loan_rule(&fuzzified.salary, &fuzzified.interest_rate, &application, &house)?;

        debug!(?credit, "loan rules evaluated");

        let scores = Scores {
            house: self.defuzzifier.centroid(&house),
            application: self.defuzzifier.centroid(&application),
            credit: self.defuzzifier.centroid(&credit),
        };

        debug!(house = scores.house, application = scores.application, credit = scores.credit, "defuzzified");

        Ok(Evaluation {
            fuzzified,
            house,
            application,
            credit,
            scores,
        })
    }

    /// Evaluates independent applications, in order.
    pub fn evaluate_batch(&self, batch: &[Inputs]) -> Result<Vec<Evaluation>> {
        #[cfg(feature = "parallel")]
        let batch = batch.par_iter();
        #[cfg(not(feature = "parallel"))]
        let batch = batch.iter();

        batch.map(|inputs| self.evaluate(inputs)).collect()
    }
}

#[cfg(test)]
use crate::ops::assert_close;

#[test]
fn test_house_rule() {
    let market = Memberships::from_named([("Low", 0.8), ("Medium", 0.2), ("High", 0.0), ("Very High", 0.0)]).unwrap();
    let location = Memberships::from_named([("Bad", 0.1), ("Fair", 0.5), ("Excellent", 0.4)]).unwrap();

    let house = evaluate_house_rule(&market, &location).unwrap();

    // Medium: max(min(Bad, High), min(Fair, Medium), min(Excellent, Low)) = max(0, 0.2, 0.4)
    // High: max(min(Bad, Very High), min(Fair, High), min(Excellent, Medium)) = max(0, 0, 0.2)
    assert_eq!(house.named(), vec![
        ("Very_low", 0.1),
        ("Low", 0.8),
        ("Medium", 0.4),
        ("High", 0.2),
        ("Very_high", 0.0),
    ]);
}

#[test]
fn test_application_rule() {
    let assets = Memberships::from_named([("Low", 0.3), ("Medium", 0.5), ("High", 0.2)]).unwrap();
    let salary = Memberships::from_named([("Low", 0.1), ("Medium", 0.4), ("High", 0.3), ("Very High", 0.2)]).unwrap();

    let application = evaluate_application_rule(&assets, &salary).unwrap();

    assert_eq!(application.named(), vec![("Low", 0.3), ("Medium", 0.4), ("High", 0.3)]);
}

#[test]
fn test_loan_rule() {
    let salary = Memberships::from_named([("Low", 0.2), ("Medium", 0.5), ("High", 0.2), ("Very High", 0.1)]).unwrap();
    let interest = Memberships::from_named([("Low", 0.3), ("Medium", 0.4), ("High", 0.3)]).unwrap();
    let application = Memberships::from_named([("Low", 0.1), ("Medium", 0.6), ("High", 0.3)]).unwrap();
    let house = Memberships::from_named([
        ("Very_low", 0.0),
        ("Low", 0.2),
        ("Medium", 0.5),
        ("High", 0.2),
        ("Very_high", 0.1),
    ])
    .unwrap();

    let credit = evaluate_loan_rule(&salary, &interest, &application, &house).unwrap();

    assert_eq!(credit.named(), vec![
        ("Very_low", 0.2),
        ("Low", 0.3),
        ("Medium", 0.5),
        ("High", 0.3),
        ("Very_high", 0.1),
    ]);
}

#[test]
fn test_loan_rule_unary_overrides() {
    // Either a weak applicant or a very poor house alone sinks the credit
    let salary = Memberships::zero();
    let interest = Memberships::zero();
    let application = Memberships::from_named([("Low", 0.9), ("Medium", 0.0), ("High", 0.0)]).unwrap();
    let house = Memberships::<House>::from_fn(|term| if term == House::VeryLow { 0.7 } else { 0. });

    let credit = evaluate_loan_rule(&salary, &interest, &application, &house).unwrap();

    assert_eq!(credit.get(Credit::VeryLow), Ok(0.9));
    assert!(credit.iter().filter(|&(term, _)| term != Credit::VeryLow).all(|(_, s)| s == 0.));
}

#[test]
fn test_credit_evaluation() {
    let evaluator = CreditEvaluator::default();
    let evaluation = evaluator.evaluate(&Inputs::new(87_000., 4.5, 150_000., 45_000., 3.5)).unwrap();

    assert_eq!(evaluation.fuzzified.location.named(), vec![("Bad", 0.), ("Fair", 0.8), ("Excellent", 0.)]);
    assert_eq!(evaluation.application.named(), vec![("Low", 0.), ("Medium", 0.5), ("High", 0.25)]);
    assert_close(evaluation.house.get(House::Medium).unwrap(), 0.74);
    assert_close(evaluation.credit.get(Credit::Low).unwrap(), 13. / 30.);
    assert_eq!(evaluation.credit.get(Credit::Medium), Ok(0.5));

    assert_close(evaluation.scores.house, 4.185626519925503);
    assert_close(evaluation.scores.application, 5.795807620926671);
    assert_close(evaluation.scores.credit, 468.80028787413573);
}

#[test]
fn test_batch_keeps_order() {
    let evaluator = CreditEvaluator::new(&InferenceConfig::default()).unwrap();
    let batch = [
        Inputs::new(500_000., 9., 800_000., 90_000., 1.),
        Inputs::new(87_000., 4.5, 150_000., 45_000., 3.5),
    ];

    let evaluations = evaluator.evaluate_batch(&batch).unwrap();

    assert_eq!(evaluations.len(), 2);
    assert_close(evaluations[0].scores.credit, 922.4814028409238);
    assert_close(evaluations[1].scores.credit, 468.80028787413573);
    assert_eq!(evaluations[1], evaluator.evaluate(&batch[1]).unwrap());
}
