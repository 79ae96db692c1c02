//! Sampled membership curves for rendering. Nothing here feeds back into scoring.

use std::ops::RangeInclusive;

use crate::defuzzify::Consequent;
use crate::linspace::Linspace;
use crate::membership::Shape;
use crate::terms::Term;
use crate::variables::Variable;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TermCurve {
    pub name: &'static str,
    pub values: Vec<f64>,
}

/// Every category of one variable sampled over the same grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Curves {
    pub domain: &'static str,
    pub xs: Vec<f64>,
    pub terms: Vec<TermCurve>,
}

impl Curves {
    pub fn get(&self, name: &str) -> Option<&TermCurve> {
        self.terms.iter().find(|term| term.name == name)
    }
}

/// Input-side curves of `K` over its design universe.
pub fn input_curves<K: Variable>(resolution: usize) -> Curves {
    sample::<K>(K::universe(), resolution, K::shape)
}

/// Output curves of `K` as the defuzzifier sees them, before clipping.
pub fn output_curves<K: Consequent>(resolution: usize) -> Curves {
    sample::<K>(K::OUTPUT.range(), resolution, K::output_shape)
}

fn sample<K: Term>(universe: RangeInclusive<f64>, resolution: usize, shape: impl Fn(K) -> Shape) -> Curves {
    let xs: Vec<f64> = Linspace::over(&universe, resolution).collect();
    let terms = K::ALL
        .iter()
        .map(|&term| {
            let shape = shape(term);

            TermCurve {
                name: term.name(),
                values: xs.iter().map(|&x| shape.eval(x)).collect(),
            }
        })
        .collect();

    Curves {
        domain: K::DOMAIN,
        xs,
        terms,
    }
}

#[test]
fn test_input_curves() {
    use crate::variables::InterestRate;

    let curves = input_curves::<InterestRate>(11);

    assert_eq!(curves.domain, "interest rate");
    assert_eq!(curves.xs, vec![0., 1., 2., 3., 4., 5., 6., 7., 8., 9., 10.]);
    assert_eq!(curves.terms.len(), 3);

    let medium = curves.get("Medium").unwrap();

    assert_eq!(medium.values, vec![0., 0., 0., 0.5, 1., 1., 1., 0.5, 0., 0., 0.]);
    assert!(curves.get("Very High").is_none());
}

#[test]
fn test_output_curves_differ_from_input_curves() {
    use crate::variables::House;

    let output = output_curves::<House>(11);
    let input = input_curves::<House>(11);

    assert_eq!(output.xs, input.xs);
    assert_eq!(output.get("Very_low").unwrap().values[1], 1.);
    assert!(input.get("Very_low").unwrap().values[1] < 1.);
}
