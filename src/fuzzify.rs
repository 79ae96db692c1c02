use crate::terms::Memberships;
use crate::variables::{Application, Assets, House, InterestRate, Location, MarketValue, Salary, Variable};

/// Degree to which `x` belongs to every category of `K`.
///
/// Never fails: any real input yields a complete, possibly all-zero, mapping.
pub fn fuzzify<K: Variable>(x: f64) -> Memberships<K> {
    Memberships::from_fn(|term: K| term.shape().eval(x))
}

pub fn market_value(value: f64) -> Memberships<MarketValue> {
    fuzzify(value)
}

pub fn location(score: f64) -> Memberships<Location> {
    fuzzify(score)
}

pub fn assets(assets: f64) -> Memberships<Assets> {
    fuzzify(assets)
}

pub fn salary(income: f64) -> Memberships<Salary> {
    fuzzify(income)
}

pub fn interest_rate(rate: f64) -> Memberships<InterestRate> {
    fuzzify(rate)
}

/// Fuzzifies a crisp house score
pub fn house(score: f64) -> Memberships<House> {
    fuzzify(score)
}

/// Fuzzifies a crisp applicant score
pub fn application(score: f64) -> Memberships<Application> {
    fuzzify(score)
}

#[cfg(test)]
fn assert_degrees<K: Variable>(actual: &Memberships<K>, expected: &[f64]) {
    let actual: Vec<_> = actual.iter().map(|(_, degree)| degree).collect();

    assert_eq!(actual.len(), expected.len());

    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
    }
}

#[test]
fn test_market_value() {
    assert_degrees(&market_value(87_000.), &[13. / 30., 0.74, 0., 0.]);
    assert_degrees(&market_value(50_000.), &[1., 0., 0., 0.]);
    assert_degrees(&market_value(150_000.), &[0., 1., 0., 0.]);
    assert_degrees(&market_value(400_000.), &[0., 0., 1., 0.]);
    assert_degrees(&market_value(900_000.), &[0., 0., 0., 1.]);
    assert_degrees(&market_value(750_000.), &[0., 0., 0.5, 0.5]);
    // Past the end of the universe every category drops to zero
    assert_degrees(&market_value(1_200_000.), &[0., 0., 0., 0.]);
}

#[test]
fn test_location() {
    assert_degrees(&location(1.), &[1., 0., 0.]);
    assert_degrees(&location(3.), &[0.4, 0.2, 0.]);
    assert_degrees(&location(4.5), &[0., 0.8, 0.]);
    assert_degrees(&location(7.), &[0., 0.6, 0.4]);
    assert_degrees(&location(10.), &[0., 0., 1.]);
}

#[test]
fn test_assets() {
    assert_degrees(&assets(0.), &[1., 0., 0.]);
    assert_degrees(&assets(100_000.), &[1. / 3., 0.25, 0.]);
    assert_degrees(&assets(150_000.), &[0., 0.5, 0.]);
    assert_degrees(&assets(600_000.), &[0., 0.25, 0.5]);
}

#[test]
fn test_salary() {
    assert_degrees(&salary(45_000.), &[0., 0.5, 0.25, 0.]);
    assert_degrees(&salary(20_000.), &[1. / 3., 0.25, 0., 0.]);
    assert_degrees(&salary(70_000.), &[0., 0., 0.5, 0.5]);
    assert_degrees(&salary(100_000.), &[0., 0., 0., 1.]);
}

#[test]
fn test_interest_rate() {
    assert_degrees(&interest_rate(3.5), &[0.5, 0.75, 0.]);
    assert_degrees(&interest_rate(7.), &[0., 0.5, 0.4]);
    assert_degrees(&interest_rate(-1.), &[0., 0., 0.]);
}

#[test]
fn test_house_and_application_scores() {
    assert_degrees(&house(0.), &[1., 0., 0., 0., 0.]);
    assert_degrees(&house(10.), &[0., 0., 0., 0., 1.]);
    assert_degrees(&house(5.), &[0., 1. / 3., 1., 1. / 3., 0.]);
    assert_degrees(&application(3.), &[0.5, 1. / 3., 0.]);
    assert_degrees(&application(7.), &[0., 1. / 3., 0.5]);
}

#[test]
fn test_generic_fuzzify() {
    fn check<K: Variable>(x: f64) {
        let memberships = fuzzify::<K>(x);

        for &term in K::ALL {
            assert_eq!(memberships.get(term), Ok(term.shape().eval(x)), "{term:?}");
        }
    }

    check::<Location>(3.);
    check::<Salary>(45_000.);
    check::<House>(5.);
    assert_eq!(fuzzify::<InterestRate>(3.5), interest_rate(3.5));
}
