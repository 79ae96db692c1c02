use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::config::InferenceConfig;
use crate::error::{Error, Result};
use crate::linspace::Linspace;
use crate::membership::Shape;
use crate::ops;
use crate::terms::{Memberships, Term};
use crate::variables::{Application, Credit, House};

/// The three scores the evaluation produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputDomain {
    Credit,
    House,
    Application,
}

impl OutputDomain {
    pub const ALL: [Self; 3] = [Self::Credit, Self::House, Self::Application];

    pub fn name(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::House => "house",
            Self::Application => "application",
        }
    }

    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::Credit => 0. ..=1000.,
            Self::House | Self::Application => 0. ..=10.,
        }
    }

    pub fn midpoint(self) -> f64 {
        let range = self.range();

        (range.start() + range.end()) / 2.
    }
}

impl FromStr for OutputDomain {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|domain| domain.name() == name)
            .ok_or_else(|| Error::UnknownDomain(name.to_owned()))
    }
}

impl fmt::Display for OutputDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Categories of an output variable together with the shapes they are
/// defuzzified with.
pub trait Consequent: Term {
    const OUTPUT: OutputDomain;

    fn output_shape(self) -> Shape;
}

impl Consequent for Credit {
    const OUTPUT: OutputDomain = OutputDomain::Credit;

    fn output_shape(self) -> Shape {
        match self {
            Self::VeryLow => Shape::Trapezoid(0., 0., 100., 200.),
            Self::Low => Shape::Triangle(100., 250., 400.),
            Self::Medium => Shape::Triangle(300., 500., 700.),
            Self::High => Shape::Triangle(600., 750., 900.),
            Self::VeryHigh => Shape::Trapezoid(800., 900., 1000., 1000.),
        }
    }
}

impl Consequent for House {
    const OUTPUT: OutputDomain = OutputDomain::House;

    fn output_shape(self) -> Shape {
        match self {
            Self::VeryLow => Shape::Trapezoid(0., 0., 1., 3.),
            Self::Low => Shape::Triangle(1., 3., 5.),
            Self::Medium => Shape::Triangle(3., 5., 7.),
            Self::High => Shape::Triangle(5., 7., 9.),
            Self::VeryHigh => Shape::Trapezoid(7., 9., 10., 10.),
        }
    }
}

impl Consequent for Application {
    const OUTPUT: OutputDomain = OutputDomain::Application;

    fn output_shape(self) -> Shape {
        match self {
            Self::Low => Shape::Trapezoid(0., 0., 2., 4.),
            Self::Medium => Shape::Triangle(2., 5., 8.),
            Self::High => Shape::Trapezoid(6., 8., 10., 10.),
        }
    }
}

/// One output category clipped at its rule strength
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClippedTerm {
    pub name: &'static str,
    pub strength: f64,
    pub values: Vec<f64>,
}

/// Everything the centroid was computed from, sampled over the output grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Aggregation {
    pub domain: OutputDomain,
    pub xs: Vec<f64>,
    /// Only categories with a positive strength
    pub clipped: Vec<ClippedTerm>,
    pub aggregated: Vec<f64>,
    pub centroid: f64,
}

/// Centroid defuzzification over a fixed, evenly spaced grid.
///
/// The result depends on the grid resolution; it is a discrete center of
/// gravity, not a closed-form integral.
#[derive(Clone, Debug)]
pub struct Defuzzifier {
    resolution: usize,
}

impl Default for Defuzzifier {
    fn default() -> Self {
        Defuzzifier {
            resolution: InferenceConfig::default().resolution,
        }
    }
}

impl Defuzzifier {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        config.validate()?;

        Ok(Defuzzifier {
            resolution: config.resolution,
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Sample points of `domain`, both ends included
    pub fn universe(&self, domain: OutputDomain) -> Vec<f64> {
        Linspace::over(&domain.range(), self.resolution).collect()
    }

    pub fn centroid<K: Consequent>(&self, output: &Memberships<K>) -> f64 {
        let strengths = output.iter().map(|(term, strength)| (term.output_shape(), strength));

        self.centroid_of(K::OUTPUT, strengths)
    }

    /// Centroid of a name-keyed fuzzy output.
    ///
    /// Categories left out of `fuzzy_output` contribute nothing; names the domain
    /// doesn't define are rejected.
    pub fn centroid_named<'a>(
        &self,
        fuzzy_output: impl IntoIterator<Item = (&'a str, f64)>,
        domain: &str,
    ) -> Result<f64> {
        let domain: OutputDomain = domain.parse()?;
        let strengths = match domain {
            OutputDomain::Credit => named_shapes::<Credit>(fuzzy_output)?,
            OutputDomain::House => named_shapes::<House>(fuzzy_output)?,
            OutputDomain::Application => named_shapes::<Application>(fuzzy_output)?,
        };

        Ok(self.centroid_of(domain, strengths))
    }

    /// The clipped curves, their aggregate and the resulting centroid.
    pub fn aggregated<K: Consequent>(&self, output: &Memberships<K>) -> Aggregation {
        let domain = K::OUTPUT;
        let xs = self.universe(domain);
        let clipped: Vec<_> = output
            .iter()
            .filter(|&(_, strength)| strength > 0.)
            .map(|(term, strength)| ClippedTerm {
                name: term.name(),
                strength,
                values: ops::clip(sample(term.output_shape(), &xs), strength).collect(),
            })
            .collect();
        let aggregated = clipped.iter().fold(vec![0.; xs.len()], |acc, term| {
            ops::aggregate(acc, term.values.iter().copied()).collect()
        });
        let centroid = ops::centroid(&xs, &aggregated).unwrap_or_else(|| domain.midpoint());

        Aggregation {
            domain,
            xs,
            clipped,
            aggregated,
            centroid,
        }
    }

    fn centroid_of(&self, domain: OutputDomain, strengths: impl IntoIterator<Item = (Shape, f64)>) -> f64 {
        let universe = self.universe(domain);
        let mut aggregated = vec![0.; universe.len()];

        for (shape, strength) in strengths.into_iter().filter(|&(_, strength)| strength > 0.) {
            let clipped = ops::clip(sample(shape, &universe), strength);

            aggregated = ops::aggregate(aggregated, clipped).collect();
        }

        ops::centroid(&universe, &aggregated).unwrap_or_else(|| {
            tracing::trace!(%domain, "empty fuzzy output, falling back to the range midpoint");

            domain.midpoint()
        })
    }
}

fn sample(shape: Shape, universe: &[f64]) -> impl Iterator<Item = f64> + '_ {
    universe.iter().map(move |&x| shape.eval(x))
}

fn named_shapes<'a, K: Consequent>(
    fuzzy_output: impl IntoIterator<Item = (&'a str, f64)>,
) -> Result<Vec<(Shape, f64)>> {
    fuzzy_output
        .into_iter()
        .map(|(name, strength)| Ok((K::from_name(name)?.output_shape(), strength)))
        .collect()
}

#[cfg(test)]
use crate::ops::assert_close;

#[test]
fn test_centroid_credit() {
    let credit = Memberships::<Credit>::from_named([
        ("Very_low", 0.),
        ("Low", 0.3),
        ("Medium", 0.8),
        ("High", 0.5),
        ("Very_high", 0.1),
    ])
    .unwrap();

    assert_close(Defuzzifier::default().centroid(&credit), 538.0512813415339);
}

#[test]
fn test_centroid_house() {
    let house = Memberships::<House>::from_named([
        ("Very_low", 0.1),
        ("Low", 0.5),
        ("Medium", 0.8),
        ("High", 0.4),
        ("Very_high", 0.2),
    ])
    .unwrap();

    assert_close(Defuzzifier::default().centroid(&house), 5.036310847191557);
}

#[test]
fn test_centroid_application() {
    let defuzz = Defuzzifier::default();
    let application = defuzz
        .centroid_named([("Low", 0.2), ("Medium", 0.7), ("High", 0.6)], "application")
        .unwrap();

    assert_close(application, 5.861538715974017);
}

#[test]
fn test_centroid_single_category() {
    let defuzz = Defuzzifier::default();

    assert_close(defuzz.centroid_named([("Medium", 1.)], "credit").unwrap(), 500.);
    assert_close(defuzz.centroid_named([("High", 1.)], "application").unwrap(), 8.447036566409693);
}

#[test]
fn test_centroid_falls_back_to_midpoint() {
    let defuzz = Defuzzifier::default();

    assert_eq!(defuzz.centroid(&Memberships::<House>::zero()), 5.);
    assert_eq!(defuzz.centroid(&Memberships::<Application>::zero()), 5.);
    assert_eq!(defuzz.centroid(&Memberships::<Credit>::zero()), 500.);
    assert_eq!(defuzz.centroid_named(std::iter::empty(), "credit"), Ok(500.));
    // Negative strengths never fire
    assert_eq!(defuzz.centroid_named([("High", -0.5)], "house"), Ok(5.));
}

#[test]
fn test_centroid_named_errors() {
    let defuzz = Defuzzifier::default();

    assert_eq!(
        defuzz.centroid_named([("Low", 0.5)], "loan"),
        Err(Error::UnknownDomain("loan".into()))
    );
    assert_eq!(
        defuzz.centroid_named([("Very High", 0.5)], "house"),
        Err(Error::UnknownCategory {
            domain: "house",
            category: "Very High".into(),
        })
    );
    // Application has no Very_low
    assert!(defuzz.centroid_named([("Very_low", 0.5)], "application").is_err());
}

#[test]
fn test_output_domain() {
    assert_eq!("credit".parse::<OutputDomain>(), Ok(OutputDomain::Credit));
    assert_eq!("house".parse::<OutputDomain>(), Ok(OutputDomain::House));
    assert_eq!("application".parse::<OutputDomain>(), Ok(OutputDomain::Application));
    assert!("Credit".parse::<OutputDomain>().is_err());
    assert_eq!(OutputDomain::Credit.midpoint(), 500.);
    assert_eq!(OutputDomain::House.to_string(), "house");
}

#[test]
fn test_aggregated_matches_centroid() {
    let defuzz = Defuzzifier::new(&InferenceConfig::default().with_resolution(201)).unwrap();
    let house = Memberships::<House>::from_named([
        ("Very_low", 0.),
        ("Low", 0.25),
        ("Medium", 0.75),
        ("High", 0.),
        ("Very_high", 0.),
    ])
    .unwrap();
    let aggregation = defuzz.aggregated(&house);

    assert_eq!(aggregation.domain, OutputDomain::House);
    assert_eq!(aggregation.xs.len(), 201);
    assert_eq!(aggregation.aggregated.len(), 201);
    assert_eq!(
        aggregation.clipped.iter().map(|term| term.name).collect::<Vec<_>>(),
        ["Low", "Medium"]
    );
    assert!(aggregation.aggregated.iter().all(|&m| (0. ..=0.75).contains(&m)));
    assert_close(aggregation.centroid, defuzz.centroid(&house));
}

#[test]
fn test_finer_grid_stays_close() {
    let coarse = Defuzzifier::default();
    let fine = Defuzzifier::new(&InferenceConfig::default().with_resolution(10_000)).unwrap();
    let credit = Memberships::<Credit>::from_fn(|term| if term == Credit::High { 0.6 } else { 0. });

    assert!((coarse.centroid(&credit) - fine.centroid(&credit)).abs() < 1.);
}
