//! Property-based tests for membership, fuzzification, rules and defuzzification

use fuzzy_credit::fuzzify::fuzzify;
use fuzzy_credit::membership::{trapezoid, triangle, Shape};
use fuzzy_credit::rules::{RuleSet, APPLICATION_RULES, HOUSE_RULES, LOAN_PROFILE_RULES, LOAN_TERMS_RULES};
use fuzzy_credit::variables::{
    Application, Assets, Credit, House, InterestRate, Location, MarketValue, Salary, Variable,
};
use fuzzy_credit::{Consequent, CreditEvaluator, Defuzzifier, Inputs, Memberships, Term};
use proptest::prelude::*;

/// Ordered breakpoints `a <= b <= c`
fn triangle_strategy() -> impl Strategy<Value = (f64, f64, f64)> {
    prop::collection::vec(-1000.0..1000.0f64, 3).prop_map(|mut v| {
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        (v[0], v[1], v[2])
    })
}

/// Ordered breakpoints `a <= b <= c <= d`
fn trapezoid_strategy() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    prop::collection::vec(-1000.0..1000.0f64, 4).prop_map(|mut v| {
        v.sort_by(|a, b| a.partial_cmp(b).unwrap());
        (v[0], v[1], v[2], v[3])
    })
}

fn degree_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.), Just(1.), 0.0..=1.0f64]
}

fn memberships_strategy<K: Term>() -> impl Strategy<Value = Memberships<K>> {
    prop::collection::vec(degree_strategy(), K::ALL.len()).prop_map(|degrees| {
        let mut degrees = degrees.into_iter();
        Memberships::from_fn(|_| degrees.next().unwrap_or(0.))
    })
}

fn all_shapes() -> Vec<Shape> {
    fn shapes<K: Variable>() -> Vec<Shape> {
        K::ALL.iter().map(|term| term.shape()).collect()
    }

    fn output_shapes<K: Consequent>() -> Vec<Shape> {
        K::ALL.iter().map(|term| term.output_shape()).collect()
    }

    [
        shapes::<MarketValue>(),
        shapes::<Location>(),
        shapes::<Assets>(),
        shapes::<Salary>(),
        shapes::<InterestRate>(),
        shapes::<House>(),
        shapes::<Application>(),
        output_shapes::<Credit>(),
        output_shapes::<House>(),
        output_shapes::<Application>(),
    ]
    .concat()
}

/// Nonzero categories, as indices into `K::ALL`
fn nonzero<K: Term>(memberships: &Memberships<K>) -> Vec<usize> {
    memberships
        .iter()
        .enumerate()
        .filter(|(_, (_, degree))| *degree > 0.)
        .map(|(i, _)| i)
        .collect()
}

/// Weighted means may land an ulp outside the universe
fn within(x: f64, lo: f64, hi: f64) -> bool {
    lo - 1e-9 <= x && x <= hi + 1e-9
}

fn assert_partition<K: Variable>(x: f64) {
    let memberships = fuzzify::<K>(x);
    let hot = nonzero(&memberships);

    assert_eq!(memberships.iter().count(), K::ALL.len());
    assert!(memberships.iter().all(|(_, d)| (0. ..=1.).contains(&d)), "{memberships:?}");
    assert!(hot.len() <= 2, "{x}: {memberships:?}");

    if let [first, second] = hot[..] {
        assert_eq!(first + 1, second, "{x}: {memberships:?}");
    }
}

#[test]
fn test_domain_breakpoints() {
    for shape in all_shapes() {
        match shape {
            Shape::Triangle(a, b, c) => {
                assert_eq!(shape.eval(b), 1.);
                if a < b {
                    assert_eq!(shape.eval(a), 0.);
                }
                if b < c {
                    assert_eq!(shape.eval(c), 0.);
                }
            },
            Shape::Trapezoid(a, b, c, d) => {
                assert_eq!(shape.eval(b), 1.);
                assert_eq!(shape.eval(c), 1.);
                assert_eq!(shape.eval((b + c) / 2.), 1.);
                if a < b {
                    assert_eq!(shape.eval(a), 0.);
                }
                if c < d {
                    assert_eq!(shape.eval(d), 0.);
                }
            },
        }
    }
}

#[test]
fn test_input_partitions_on_grid() {
    for i in 0..=2000 {
        let t = i as f64 / 2000.;

        assert_partition::<MarketValue>(t * 1_000_000.);
        assert_partition::<Location>(t * 10.);
        assert_partition::<Assets>(t * 1_000_000.);
        assert_partition::<Salary>(t * 100_000.);
        assert_partition::<InterestRate>(t * 10.);
        assert_partition::<Application>(t * 10.);
    }
}

proptest! {
    #[test]
    fn triangle_is_bounded_and_monotonic((a, b, c) in triangle_strategy(), t in 0.0..=1.0f64, u in 0.0..=1.0f64) {
        let (lo, hi) = if t <= u { (t, u) } else { (u, t) };

        // Rising side
        let x0 = a + (b - a) * lo;
        let x1 = a + (b - a) * hi;
        prop_assert!(triangle(x0, a, b, c) <= triangle(x1, a, b, c) + 1e-6);

        // Falling side
        let y0 = b + (c - b) * lo;
        let y1 = b + (c - b) * hi;
        prop_assert!(triangle(y0, a, b, c) + 1e-6 >= triangle(y1, a, b, c));

        for x in [x0, x1, y0, y1, a - 1., c + 1.] {
            let m = triangle(x, a, b, c);
            prop_assert!((0. ..=1.).contains(&m));
        }

        prop_assert_eq!(triangle(b, a, b, c), 1.);
        prop_assert_eq!(triangle(a - 1., a, b, c), 0.);
        prop_assert_eq!(triangle(c + 1., a, b, c), 0.);
    }

    #[test]
    fn trapezoid_plateau_and_support((a, b, c, d) in trapezoid_strategy(), t in 0.0..=1.0f64) {
        prop_assert_eq!(trapezoid((b + (c - b) * t).min(c), a, b, c, d), 1.);
        prop_assert_eq!(trapezoid(a - 1., a, b, c, d), 0.);
        prop_assert_eq!(trapezoid(d + 1., a, b, c, d), 0.);

        let rising = trapezoid(a + (b - a) * t, a, b, c, d);
        let falling = trapezoid(c + (d - c) * t, a, b, c, d);

        prop_assert!((0. ..=1.).contains(&rising) && !rising.is_nan());
        prop_assert!((0. ..=1.).contains(&falling) && !falling.is_nan());

        if a < b && t > 0. && t < 1. {
            prop_assert!((rising - t).abs() < 1e-9);
        }
    }

    #[test]
    fn fuzzifiers_are_total_for_any_input(x in prop::num::f64::NORMAL) {
        fn check<K: Variable>(x: f64) -> Result<(), TestCaseError> {
            let memberships = fuzzify::<K>(x);

            prop_assert_eq!(memberships.iter().count(), K::ALL.len());
            prop_assert!(memberships.iter().all(|(_, d)| (0. ..=1.).contains(&d)));

            Ok(())
        }

        check::<MarketValue>(x)?;
        check::<Location>(x)?;
        check::<Assets>(x)?;
        check::<Salary>(x)?;
        check::<InterestRate>(x)?;
        check::<House>(x)?;
        check::<Application>(x)?;
    }

    #[test]
    fn input_partitions_overlap_pairwise(t in 0.0..=1.0f64) {
        assert_partition::<MarketValue>(t * 1_000_000.);
        assert_partition::<Location>(t * 10.);
        assert_partition::<Assets>(t * 1_000_000.);
        assert_partition::<Salary>(t * 100_000.);
        assert_partition::<InterestRate>(t * 10.);
    }

    #[test]
    fn house_rules_are_monotonic(
        market in memberships_strategy::<MarketValue>(),
        location in memberships_strategy::<Location>(),
        index in 0..4usize,
        bump in 0.0..=1.0f64,
    ) {
        let term = MarketValue::ALL[index];
        let raised = Memberships::<MarketValue>::from_fn(|t| {
            let degree = market.get(t).unwrap();
            if t == term { degree.max(bump) } else { degree }
        });

        assert_monotonic(HOUSE_RULES, (&market, &location), (&raised, &location))?;
    }

    #[test]
    fn application_rules_are_monotonic(
        assets in memberships_strategy::<Assets>(),
        salary in memberships_strategy::<Salary>(),
        index in 0..4usize,
        bump in 0.0..=1.0f64,
    ) {
        let term = Salary::ALL[index];
        let raised = Memberships::<Salary>::from_fn(|t| {
            let degree = salary.get(t).unwrap();
            if t == term { degree.max(bump) } else { degree }
        });

        assert_monotonic(APPLICATION_RULES, (&assets, &salary), (&assets, &raised))?;
    }

    #[test]
    fn loan_rules_are_monotonic(
        application in memberships_strategy::<Application>(),
        house in memberships_strategy::<House>(),
        salary in memberships_strategy::<Salary>(),
        interest in memberships_strategy::<InterestRate>(),
        index in 0..5usize,
        bump in 0.0..=1.0f64,
    ) {
        let term = House::ALL[index];
        let raised = Memberships::<House>::from_fn(|t| {
            let degree = house.get(t).unwrap();
            if t == term { degree.max(bump) } else { degree }
        });

        assert_monotonic(LOAN_PROFILE_RULES, (&application, &house), (&application, &raised))?;

        let before = fuzzy_credit::evaluate_loan_rule(&salary, &interest, &application, &house).unwrap();
        let after = fuzzy_credit::evaluate_loan_rule(&salary, &interest, &application, &raised).unwrap();

        for (&(_, b), &(_, a)) in before.named().iter().zip(after.named().iter()) {
            prop_assert!(a >= b);
        }

        let terms = LOAN_TERMS_RULES.eval(&salary, &interest).unwrap();

        for (term, degree) in terms.iter() {
            prop_assert!(before.get(term).unwrap() >= degree);
        }
    }

    #[test]
    fn centroid_stays_in_range(credit in memberships_strategy::<Credit>(), house in memberships_strategy::<House>()) {
        let defuzz = Defuzzifier::default();
        let credit_score = defuzz.centroid(&credit);
        let house_score = defuzz.centroid(&house);

        prop_assert!(within(credit_score, 0., 1000.));
        prop_assert!(within(house_score, 0., 10.));

        if credit.is_zero() {
            prop_assert_eq!(credit_score, 500.);
        }
    }

    #[test]
    fn evaluation_scores_stay_in_range(
        market_value in 0.0..1_200_000.0f64,
        location in -1.0..11.0f64,
        assets in 0.0..1_200_000.0f64,
        salary in 0.0..120_000.0f64,
        interest_rate in -1.0..11.0f64,
    ) {
        let evaluation = CreditEvaluator::default()
            .evaluate(&Inputs::new(market_value, location, assets, salary, interest_rate))
            .unwrap();

        prop_assert!(within(evaluation.scores.house, 0., 10.));
        prop_assert!(within(evaluation.scores.application, 0., 10.));
        prop_assert!(within(evaluation.scores.credit, 0., 1000.));
    }
}

fn assert_monotonic<L: Term, R: Term, O: Term>(
    rules: RuleSet<L, R, O>,
    (left, right): (&Memberships<L>, &Memberships<R>),
    (raised_left, raised_right): (&Memberships<L>, &Memberships<R>),
) -> Result<(), TestCaseError> {
    let before = rules.eval(left, right).unwrap();
    let after = rules.eval(raised_left, raised_right).unwrap();

    for &term in O::ALL {
        prop_assert!(after.get(term).unwrap() >= before.get(term).unwrap(), "{:?}", term);
    }

    Ok(())
}
