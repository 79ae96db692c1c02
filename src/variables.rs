//! Linguistic variables of the credit evaluation and the shapes of their input categories.

use std::ops::RangeInclusive;

use crate::membership::Shape;
use crate::terms::{terms, Term};

/// A variable that crisp values are fuzzified into.
pub trait Variable: Term {
    /// Range the categories were designed over. Values outside of it are
    /// accepted and simply end up with zero membership past the outer feet.
    fn universe() -> RangeInclusive<f64>;

    fn shape(self) -> Shape;
}

terms! {
    /// House market value in currency units
    pub enum MarketValue("market value") {
        Low = "Low",
        Medium = "Medium",
        High = "High",
        VeryHigh = "Very High",
    }
}

terms! {
    /// House location score between 0 and 10
    pub enum Location("location") {
        Bad = "Bad",
        Fair = "Fair",
        Excellent = "Excellent",
    }
}

terms! {
    /// Applicant assets in currency units
    pub enum Assets("assets") {
        Low = "Low",
        Medium = "Medium",
        High = "High",
    }
}

terms! {
    /// Yearly applicant salary
    pub enum Salary("salary") {
        Low = "Low",
        Medium = "Medium",
        High = "High",
        VeryHigh = "Very High",
    }
}

terms! {
    /// Loan interest rate in percent
    pub enum InterestRate("interest rate") {
        Low = "Low",
        Medium = "Medium",
        High = "High",
    }
}

terms! {
    /// House desirability, 0 to 10
    pub enum House("house") {
        VeryLow = "Very_low",
        Low = "Low",
        Medium = "Medium",
        High = "High",
        VeryHigh = "Very_high",
    }
}

terms! {
    /// Applicant strength, 0 to 10
    pub enum Application("application") {
        Low = "Low",
        Medium = "Medium",
        High = "High",
    }
}

terms! {
    /// Final credit score, 0 to 1000
    pub enum Credit("credit") {
        VeryLow = "Very_low",
        Low = "Low",
        Medium = "Medium",
        High = "High",
        VeryHigh = "Very_high",
    }
}

impl Variable for MarketValue {
    fn universe() -> RangeInclusive<f64> {
        0. ..=1_000_000.
    }

    fn shape(self) -> Shape {
        match self {
            Self::Low => Shape::Trapezoid(0., 0., 70_000., 100_000.),
            Self::Medium => Shape::Trapezoid(50_000., 100_000., 200_000., 250_000.),
            Self::High => Shape::Trapezoid(200_000., 300_000., 650_000., 850_000.),
            Self::VeryHigh => Shape::Trapezoid(650_000., 850_000., 1_000_000., 1_000_000.),
        }
    }
}

impl Variable for Location {
    fn universe() -> RangeInclusive<f64> {
        0. ..=10.
    }

    fn shape(self) -> Shape {
        match self {
            Self::Bad => Shape::Trapezoid(0., 0., 1.5, 4.),
            Self::Fair => Shape::Trapezoid(2.5, 5., 6., 8.5),
            Self::Excellent => Shape::Trapezoid(6., 8.5, 10., 10.),
        }
    }
}

impl Variable for Assets {
    fn universe() -> RangeInclusive<f64> {
        0. ..=1_000_000.
    }

    fn shape(self) -> Shape {
        match self {
            Self::Low => Shape::Triangle(0., 0., 150_000.),
            Self::Medium => Shape::Trapezoid(50_000., 250_000., 450_000., 650_000.),
            Self::High => Shape::Trapezoid(500_000., 700_000., 1_000_000., 1_000_000.),
        }
    }
}

impl Variable for Salary {
    fn universe() -> RangeInclusive<f64> {
        0. ..=100_000.
    }

    // High ends at 80k while Very High already starts at 60k. The overlap is part
    // of the partition and must not be evened out.
    fn shape(self) -> Shape {
        match self {
            Self::Low => Shape::Trapezoid(0., 0., 10_000., 25_000.),
            Self::Medium => Shape::Triangle(15_000., 35_000., 55_000.),
            Self::High => Shape::Triangle(40_000., 60_000., 80_000.),
            Self::VeryHigh => Shape::Trapezoid(60_000., 80_000., 100_000., 100_000.),
        }
    }
}

impl Variable for InterestRate {
    fn universe() -> RangeInclusive<f64> {
        0. ..=10.
    }

    fn shape(self) -> Shape {
        match self {
            Self::Low => Shape::Trapezoid(0., 0., 2., 5.),
            Self::Medium => Shape::Trapezoid(2., 4., 6., 8.),
            Self::High => Shape::Trapezoid(6., 8.5, 10., 10.),
        }
    }
}

/// Input-side shapes of a house score. The defuzzifier uses its own set, see `Consequent`.
impl Variable for House {
    fn universe() -> RangeInclusive<f64> {
        0. ..=10.
    }

    fn shape(self) -> Shape {
        match self {
            Self::VeryLow => Shape::Triangle(0., 0., 3.),
            Self::Low => Shape::Triangle(0., 3., 6.),
            Self::Medium => Shape::Triangle(2., 5., 8.),
            Self::High => Shape::Triangle(4., 7., 10.),
            Self::VeryHigh => Shape::Triangle(7., 10., 10.),
        }
    }
}

impl Variable for Application {
    fn universe() -> RangeInclusive<f64> {
        0. ..=10.
    }

    fn shape(self) -> Shape {
        match self {
            Self::Low => Shape::Trapezoid(0., 0., 2., 4.),
            Self::Medium => Shape::Triangle(2., 5., 8.),
            Self::High => Shape::Trapezoid(6., 8., 10., 10.),
        }
    }
}

#[test]
fn test_category_names() {
    assert_eq!(
        MarketValue::ALL.iter().map(|t| t.name()).collect::<Vec<_>>(),
        ["Low", "Medium", "High", "Very High"]
    );
    assert_eq!(
        Location::ALL.iter().map(|t| t.name()).collect::<Vec<_>>(),
        ["Bad", "Fair", "Excellent"]
    );
    assert_eq!(
        House::ALL.iter().map(|t| t.name()).collect::<Vec<_>>(),
        ["Very_low", "Low", "Medium", "High", "Very_high"]
    );
    assert_eq!(Credit::ALL.len(), 5);
    assert_eq!(Application::ALL.len(), 3);
    assert_eq!(Salary::from_name("Very High"), Ok(Salary::VeryHigh));
    assert!(Salary::from_name("Very_high").is_err());
    assert_eq!(House::from_name("Very_high"), Ok(House::VeryHigh));
}

#[test]
fn test_shapes_lie_within_universe() {
    fn check<K: Variable>() {
        let universe = K::universe();

        for &term in K::ALL {
            let (lo, hi) = term.shape().support();

            assert!(universe.contains(&lo) && universe.contains(&hi), "{term:?} outside of {universe:?}");
        }
    }

    check::<MarketValue>();
    check::<Location>();
    check::<Assets>();
    check::<Salary>();
    check::<InterestRate>();
    check::<House>();
    check::<Application>();
}
